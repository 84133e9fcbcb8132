//! Bounded output formatter
//!
//! Every line of console output is rendered into one fixed scratch buffer and
//! then written to the sink. Output that does not fit is cut and reported as
//! [`CliError::Truncated`]; the part that fits is still written.

use core::fmt::{self, Write};

use super::CliError;
use crate::config::PRINT_SIZE;

/// Fixed-capacity renderer
///
/// Holds at most `PRINT_SIZE - 1` bytes, leaving the last slot for the
/// terminator a C-style sink expects. A render whose required length reaches
/// `PRINT_SIZE` is therefore truncated.
pub struct Printer {
    buf: [u8; PRINT_SIZE],
    len: usize,
    /// Length the full rendering would need
    required: usize,
    cut: bool,
}

impl Printer {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; PRINT_SIZE],
            len: 0,
            required: 0,
            cut: false,
        }
    }

    /// Render `args` into the scratch buffer, replacing previous contents
    pub fn render(&mut self, args: fmt::Arguments<'_>) -> Result<(), CliError> {
        self.len = 0;
        self.required = 0;
        self.cut = false;

        // A failing Display impl only shortens the output
        let _ = fmt::write(self, args);

        if self.required >= PRINT_SIZE {
            Err(CliError::Truncated)
        } else {
            Ok(())
        }
    }

    /// Render `args` and write the result to `sink`
    ///
    /// A failing sink reports `Output`, taking precedence over `Truncated`.
    pub fn emit(&mut self, sink: &mut dyn Write, args: fmt::Arguments<'_>) -> Result<(), CliError> {
        let result = self.render(args);

        if sink.write_str(self.as_str()).is_err() {
            log::warn!("output sink failed, {} bytes lost", self.len);
            return Err(CliError::Output);
        }
        if result.is_err() {
            log::warn!("output truncated: {} of {} bytes", self.len, self.required);
        }
        result
    }

    /// Last rendered text
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Length the last rendering needed, before truncation
    pub fn required(&self) -> usize {
        self.required
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for Printer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.cut {
            return Ok(());
        }

        let available = PRINT_SIZE - 1 - self.len;
        let mut to_copy = s.len().min(available);
        if to_copy < s.len() {
            // Never split a UTF-8 sequence
            while !s.is_char_boundary(to_copy) {
                to_copy -= 1;
            }
            self.cut = true;
        }

        self.buf[self.len..self.len + to_copy].copy_from_slice(&s.as_bytes()[..to_copy]);
        self.len += to_copy;
        Ok(())
    }
}

/// Output handle given to command handlers
///
/// Pairs the session's scratch [`Printer`] with its sink.
pub struct Output<'o> {
    printer: &'o mut Printer,
    sink: &'o mut dyn Write,
}

impl<'o> Output<'o> {
    pub fn new(printer: &'o mut Printer, sink: &'o mut dyn Write) -> Self {
        Self { printer, sink }
    }

    /// Render and write; see [`Printer::emit`]
    pub fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<(), CliError> {
        self.printer.emit(&mut *self.sink, args)
    }
}

/// Print through an [`Output`] (or anything with an `emit(fmt::Arguments)` method).
///
/// Evaluates to `Result<(), CliError>`: `Err(Truncated)` if the text was cut,
/// `Err(Output)` if the sink refused it.
///
/// # Example
///
/// ```ignore
/// cli_print!(out, "led {}", state)?;
/// ```
#[macro_export]
macro_rules! cli_print {
    ($out:expr, $($arg:tt)*) => {
        $out.emit(format_args!($($arg)*))
    };
}

/// Like [`cli_print!`], terminated with CRLF.
#[macro_export]
macro_rules! cli_println {
    ($out:expr) => {
        $out.emit(format_args!("\r\n"))
    };
    ($out:expr, $($arg:tt)*) => {
        $out.emit(format_args!("{}\r\n", format_args!($($arg)*)))
    };
}
