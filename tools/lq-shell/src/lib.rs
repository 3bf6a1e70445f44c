//! LQ-Shell: command interpreter for Linked-Queue
//!
//! Reads one command per line from a file or stdin, applies it to a queue
//! and reports each result. Runs with injected allocation failures exercise
//! the error paths of the queue.

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;

pub use command::{parse_line, Command, COMMANDS};
pub use config::{ShellConfig, MAX_STRING_LENGTH, OPTIONS};
pub use error::ShellError;
pub use interpreter::{Flow, Interpreter, RunSummary};
