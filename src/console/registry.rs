//! Command registry and dispatch

use super::parser::{Args, ParsedCommand};
use super::printer::Output;
use super::CliError;
use crate::config::MAX_COMMANDS;
use crate::cli_println;

/// Command handler capability
///
/// Implemented for plain functions and closures with the matching signature.
/// Handlers that keep state use atomics or another `Sync` cell, since
/// command tables are usually `static`.
pub trait Handler: Sync {
    /// Run the command. `cmd` is the matched descriptor, `args` the words after it.
    fn call(&self, cmd: &Command<'_>, args: &Args<'_>, out: &mut Output<'_>) -> Result<(), CliError>;
}

impl<F> Handler for F
where
    F: Fn(&Command<'_>, &Args<'_>, &mut Output<'_>) -> Result<(), CliError> + Sync,
{
    fn call(&self, cmd: &Command<'_>, args: &Args<'_>, out: &mut Output<'_>) -> Result<(), CliError> {
        self(cmd, args, out)
    }
}

/// Command descriptor
pub struct Command<'a> {
    /// Primary name, non-empty and unique within a table
    pub name: &'a str,
    /// Alternative name, empty for none
    pub alias: &'a str,
    /// Shown by help only
    pub description: &'a str,
    /// A descriptor without a handler never matches
    pub handler: Option<&'a dyn Handler>,
}

impl<'a> Command<'a> {
    pub const fn new(name: &'a str, alias: &'a str, description: &'a str, handler: &'a dyn Handler) -> Self {
        Self {
            name,
            alias,
            description,
            handler: Some(handler),
        }
    }

    /// True if `word` selects this descriptor.
    ///
    /// Matches on name or alias, and only with a handler present. An empty
    /// alias never matches.
    pub fn matches(&self, word: &str) -> bool {
        if self.handler.is_none() || word.is_empty() {
            return false;
        }
        self.name == word || (!self.alias.is_empty() && self.alias == word)
    }

    /// One help line: name, alias, description
    pub fn write_row(&self, out: &mut Output<'_>) -> Result<(), CliError> {
        cli_println!(out, "  {:<10} {:<4} {}", self.name, self.alias, self.description)
    }
}

impl core::fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Fixed table of registered commands
///
/// Borrows the table for the whole session; initialized at most once.
pub struct Registry<'a> {
    table: &'a [Command<'a>],
    initialized: bool,
}

impl<'a> Registry<'a> {
    /// Create an empty, uninitialized registry
    pub const fn new() -> Self {
        Self {
            table: &[],
            initialized: false,
        }
    }

    /// Register the command table
    ///
    /// Fails with `InvalidArgument` for an empty table, more than
    /// `MAX_COMMANDS` entries, an empty or duplicated name, or a second call.
    /// Nothing is stored on failure.
    pub fn initialize(&mut self, table: &'a [Command<'a>]) -> Result<(), CliError> {
        if self.initialized {
            log::debug!("registry already initialized");
            return Err(CliError::InvalidArgument);
        }
        if table.is_empty() || table.len() > MAX_COMMANDS {
            log::debug!("invalid command count {}", table.len());
            return Err(CliError::InvalidArgument);
        }
        for (i, cmd) in table.iter().enumerate() {
            if cmd.name.is_empty() || table[..i].iter().any(|prev| prev.name == cmd.name) {
                log::debug!("invalid command name {:?} at {}", cmd.name, i);
                return Err(CliError::InvalidArgument);
            }
        }

        self.table = table;
        self.initialized = true;
        Ok(())
    }

    /// First descriptor in table order selected by `word`
    pub fn find(&self, word: &str) -> Option<&'a Command<'a>> {
        let table: &'a [Command<'a>] = self.table;
        table.iter().find(|c| c.matches(word))
    }

    /// Execute a parsed command
    ///
    /// Handler errors are returned unchanged.
    pub fn dispatch(&self, cmd: &ParsedCommand<'_>, out: &mut Output<'_>) -> Result<(), CliError> {
        if !self.initialized {
            return Err(CliError::NotInitialized);
        }

        let descriptor = self.find(cmd.command).ok_or(CliError::UnknownCommand)?;
        let handler = descriptor.handler.ok_or(CliError::UnknownCommand)?;

        log::trace!("dispatch {} ({} args)", descriptor.name, cmd.args.len());
        handler.call(descriptor, &cmd.args, out)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Command<'a>> {
        let table: &'a [Command<'a>] = self.table;
        table.iter()
    }

    /// List every command: name, alias, description
    pub fn write_help(&self, out: &mut Output<'_>) -> Result<(), CliError> {
        for c in self.iter() {
            c.write_row(out)?;
        }
        Ok(())
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::new()
    }
}
