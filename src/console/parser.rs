//! Command line parser
//!
//! Split on runs of spaces, max `MAX_ARGS` arguments. Words borrow from the
//! line, so a parsed command cannot outlive the buffer it came from.

use crate::config::{MAX_ARGS, SEPARATOR};

/// Argument words of one command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args<'a> {
    words: [&'a str; MAX_ARGS],
    len: usize,
}

impl<'a> Args<'a> {
    /// No arguments
    pub const fn empty() -> Self {
        Self {
            words: [""; MAX_ARGS],
            len: 0,
        }
    }

    /// Collect words, keeping at most `MAX_ARGS`
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut args = Self::empty();
        for word in words.into_iter().take(MAX_ARGS) {
            args.words[args.len] = word;
            args.len += 1;
        }
        args
    }

    /// Get argument by index (0-based)
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.as_slice().get(idx).copied()
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.words[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Parsed command with up to `MAX_ARGS` arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The command name (first token)
    pub command: &'a str,
    /// Following tokens, excess dropped
    pub args: Args<'a>,
}

impl<'a> ParsedCommand<'a> {
    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx)
    }
}

/// Parse a command line into command and arguments
///
/// Returns `None` for a line without a command word (empty or all spaces).
pub fn parse_line(line: &str) -> Option<ParsedCommand<'_>> {
    let mut parts = line
        .split(SEPARATOR as char)
        .filter(|word| !word.is_empty());

    let command = parts.next()?;
    let args = Args::from_words(parts);

    Some(ParsedCommand { command, args })
}
