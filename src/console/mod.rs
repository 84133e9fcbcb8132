//! Serial line interpreter
//!
//! Byte-at-a-time input, space-separated words, table dispatch.
//! Zero heap allocation - all fixed buffers.

pub mod error;
pub mod interpreter;
pub mod line_buffer;
pub mod parser;
pub mod printer;
pub mod registry;

pub use error::CliError;
pub use interpreter::{Interpreter, VERSION};
pub use line_buffer::LineBuffer;
pub use parser::{parse_line, Args, ParsedCommand};
pub use printer::{Output, Printer};
pub use registry::{Command, Handler, Registry};
