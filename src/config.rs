//! Module: config
//!
//! Purpose: Capacities and session options for the interpreter.
//!
//! Capacities are compile-time constants: every buffer in the crate is a
//! fixed-size array sized from them. Behavioural options live in
//! [`CliConfig`], chosen once when the session is constructed.

/// Maximum number of registrable commands.
pub const MAX_COMMANDS: usize = 10;

/// Maximum input line length in bytes.
pub const LINE_SIZE: usize = 100;

/// Output formatter scratch size in bytes.
pub const PRINT_SIZE: usize = 100;

/// Maximum arguments passed to a handler (excess words are ignored).
pub const MAX_ARGS: usize = 5;

/// Backspace (BS).
pub const BACKSPACE: u8 = 0x08;

/// Delete (DEL), sent by most terminals for the backspace key.
pub const DELETE: u8 = 0x7F;

/// Carriage return, the line terminator.
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Line feed, a terminator only under [`LineEnding::CrOrLf`].
pub const LINE_FEED: u8 = b'\n';

/// Token separator.
pub const SEPARATOR: u8 = b' ';

/// What happens when a byte arrives while the line buffer is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Drop the byte and restart the line from position zero.
    Wrap,
    /// Discard the whole line and report `BufferOverflow`.
    Reject,
}

/// Which input bytes are echoed back to the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EchoMode {
    /// Only backspace/delete are echoed.
    Editing,
    /// Every accepted byte is echoed, terminators as CRLF.
    All,
}

/// Which bytes terminate a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    /// Carriage return only.
    Cr,
    /// Carriage return or line feed.
    CrOrLf,
}

/// Session options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub overflow: OverflowPolicy,
    pub echo: EchoMode,
    pub line_ending: LineEnding,
    /// Printed after each completed line, if set.
    pub prompt: Option<&'static str>,
}

impl CliConfig {
    /// Defaults matching a bare serial line: wrap on overflow, echo edits only, CR terminates.
    pub const fn new() -> Self {
        Self {
            overflow: OverflowPolicy::Wrap,
            echo: EchoMode::Editing,
            line_ending: LineEnding::Cr,
            prompt: None,
        }
    }

    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub const fn with_echo(mut self, echo: EchoMode) -> Self {
        self.echo = echo;
        self
    }

    pub const fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub const fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// True if `byte` ends a line under this configuration.
    pub fn is_terminator(&self, byte: u8) -> bool {
        match self.line_ending {
            LineEnding::Cr => byte == CARRIAGE_RETURN,
            LineEnding::CrOrLf => byte == CARRIAGE_RETURN || byte == LINE_FEED,
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
    }
}
