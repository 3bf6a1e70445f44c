//! Error types for the command shell

use lq_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Usage: {usage}")]
    Usage { usage: &'static str },

    #[error("Invalid number '{value}' for {what}")]
    InvalidNumber { what: &'static str, value: String },

    #[error("Unterminated quote in '{0}'")]
    UnterminatedQuote(String),

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Invalid value '{value}' for option {name}: {reason}")]
    InvalidOption {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
