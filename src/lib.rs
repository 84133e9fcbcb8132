//! # tiny-cli
//!
//! Minimal line interpreter for serial consoles on small devices.
//!
//! ## Pipeline
//!
//! ```text
//! byte ──▶ LineBuffer ──CR──▶ parse_line ──▶ Registry::dispatch ──▶ Handler
//!    │                                                                 │
//!    └── echo ──────────────▶ Printer (bounded) ◀──── cli_print! ──────┘
//! ```
//!
//! - One [`Interpreter`] per session, fed with [`Interpreter::consume`]
//! - Commands are a borrowed table of [`Command`] descriptors
//! - No heap allocation, no locking; every loop is bounded by a capacity in [`config`]

#![cfg_attr(not(test), no_std)]

pub mod classify;
pub mod config;
pub mod console;

pub use classify::{is_alphabetic, is_numeric};
pub use config::CliConfig;
pub use console::{Args, CliError, Command, Handler, Interpreter, Output, Registry};
