//! Interpreter session integrating all components

use core::fmt::Write;

use super::{parse_line, CliError, Command, LineBuffer, Output, Printer, Registry};
use crate::config::{
    CliConfig, EchoMode, LineEnding, OverflowPolicy, BACKSPACE, CARRIAGE_RETURN, DELETE, LINE_FEED,
};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// One interpreter session
///
/// Owns the line buffer, the print scratch buffer and the output sink. Not
/// reentrant: feed it from one context at a time.
pub struct Interpreter<'a, W: Write> {
    registry: Registry<'a>,
    line: LineBuffer,
    /// Set while a handler runs
    busy: bool,
    /// Rest of an overflowed line is being ignored (`OverflowPolicy::Reject`)
    discarding: bool,
    /// Previous byte was a carriage return
    after_cr: bool,
    printer: Printer,
    out: W,
    config: CliConfig,
}

impl<'a, W: Write> Interpreter<'a, W> {
    /// Create a session writing to `out`. Register commands with [`initialize`](Self::initialize).
    pub const fn new(out: W, config: CliConfig) -> Self {
        Self {
            registry: Registry::new(),
            line: LineBuffer::new(),
            busy: false,
            discarding: false,
            after_cr: false,
            printer: Printer::new(),
            out,
            config,
        }
    }

    /// Register the command table and reset the line state
    ///
    /// Allowed once per session.
    pub fn initialize(&mut self, table: &'a [Command<'a>]) -> Result<(), CliError> {
        self.registry.initialize(table)?;
        self.line.clear();
        self.busy = false;
        self.discarding = false;
        self.after_cr = false;
        log::debug!("registered {} commands", table.len());
        Ok(())
    }

    /// Process a single input byte
    ///
    /// Returns `Some(result)` once a non-empty line was terminated (or on
    /// overflow under the reject policy), `None` if more input is needed.
    pub fn consume(&mut self, byte: u8) -> Option<Result<(), CliError>> {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == CARRIAGE_RETURN);

        // LF of a CRLF pair: the CR already ended the line
        if byte == LINE_FEED && after_cr && self.config.line_ending == LineEnding::CrOrLf {
            return None;
        }

        match byte {
            BACKSPACE | DELETE => {
                if !self.discarding {
                    self.line.backspace();
                }
                self.echo(byte);
                None
            }

            b if self.config.is_terminator(b) => {
                if self.config.echo == EchoMode::All {
                    let _ = self.printer.emit(&mut self.out, format_args!("\r\n"));
                }

                let result = if self.discarding {
                    self.discarding = false;
                    None
                } else {
                    self.run_line()
                };

                self.line.clear();
                self.print_prompt();
                result
            }

            _ if self.discarding => None,

            _ => {
                if !self.line.is_full() {
                    self.line.push(byte);
                    if self.config.echo == EchoMode::All {
                        self.echo(byte);
                    }
                    return None;
                }

                match self.config.overflow {
                    OverflowPolicy::Wrap => {
                        log::warn!("line overflow, restarting line");
                        self.line.rewind();
                        None
                    }
                    OverflowPolicy::Reject => {
                        log::warn!("line overflow, discarding line");
                        self.line.clear();
                        self.discarding = true;
                        Some(Err(CliError::BufferOverflow))
                    }
                }
            }
        }
    }

    /// Feed every byte of `input` through [`consume`](Self::consume)
    ///
    /// Stops at a NUL byte. Per-line failures are logged, not returned.
    /// Returns the number of bytes consumed.
    pub fn process(&mut self, input: &str) -> usize {
        let mut count = 0;
        for byte in input.bytes().take_while(|&b| b != 0) {
            if let Some(Err(e)) = self.consume(byte) {
                log::debug!("line dropped: {}", e);
            }
            count += 1;
        }
        count
    }

    fn run_line(&mut self) -> Option<Result<(), CliError>> {
        self.busy = true;
        let result = self.dispatch_line();
        self.busy = false;

        if let Some(Err(e)) = result {
            log::debug!("line failed: {}", e);
        }
        result
    }

    fn dispatch_line(&mut self) -> Option<Result<(), CliError>> {
        let Some(line) = self.line.as_str() else {
            return Some(Err(CliError::InvalidEncoding));
        };

        // Empty or blank line: nothing to dispatch
        let cmd = parse_line(line)?;

        let mut out = Output::new(&mut self.printer, &mut self.out);
        Some(self.registry.dispatch(&cmd, &mut out))
    }

    fn echo(&mut self, byte: u8) {
        // Multi-byte input is stored but not echoed byte by byte
        if byte.is_ascii() {
            let _ = self.printer.emit(&mut self.out, format_args!("{}", byte as char));
        }
    }

    /// Discard the partially entered line
    pub fn reset_line(&mut self) {
        self.line.clear();
        self.discarding = false;
        self.after_cr = false;
    }

    /// Print the prompt, if configured
    pub fn print_prompt(&mut self) {
        if let Some(prompt) = self.config.prompt {
            let _ = self.printer.emit(&mut self.out, format_args!("{}", prompt));
        }
    }

    /// Print welcome banner
    pub fn print_banner(&mut self) {
        let _ = self.printer.emit(&mut self.out, format_args!("\r\n{}\r\n", VERSION));
        self.print_prompt();
    }

    /// Print the registered commands
    pub fn print_help(&mut self) -> Result<(), CliError> {
        let mut out = Output::new(&mut self.printer, &mut self.out);
        self.registry.write_help(&mut out)
    }

    /// Output handle for integrator messages between lines
    pub fn output(&mut self) -> Output<'_> {
        Output::new(&mut self.printer, &mut self.out)
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn registry(&self) -> &Registry<'a> {
        &self.registry
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Get the output sink
    pub fn sink(&self) -> &W {
        &self.out
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.out
    }
}
