//! Interpreter error types

/// Interpreter error with code and message
///
/// None of these is fatal: the session stays usable for the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    /// E01: Bad registration (empty table, too many commands, bad name, already initialized)
    InvalidArgument,
    /// E02: Line completed before a command table was registered
    NotInitialized,
    /// E03: No descriptor matched the command word
    UnknownCommand,
    /// E04: Line exceeded the input buffer (strict overflow policy)
    BufferOverflow,
    /// E05: Formatted output did not fit the print buffer
    Truncated,
    /// E06: Line is not valid UTF-8
    InvalidEncoding,
    /// E07: Handler reported a failure
    Handler,
    /// E08: Output sink refused a write
    Output,
}

impl CliError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "E01",
            Self::NotInitialized => "E02",
            Self::UnknownCommand => "E03",
            Self::BufferOverflow => "E04",
            Self::Truncated => "E05",
            Self::InvalidEncoding => "E06",
            Self::Handler => "E07",
            Self::Output => "E08",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::NotInitialized => "not initialized",
            Self::UnknownCommand => "unknown command",
            Self::BufferOverflow => "line too long",
            Self::Truncated => "output truncated",
            Self::InvalidEncoding => "invalid encoding",
            Self::Handler => "command failed",
            Self::Output => "output failed",
        }
    }
}

impl core::fmt::Display for CliError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
