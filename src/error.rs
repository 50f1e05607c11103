//! Errors for turning user text into tree commands.

use std::fmt;

/// Why a line of user input couldn't become a [`Command`][crate::Command].
///
/// Nothing here comes from the tree itself: its operations can't fail. Inserting a duplicate,
/// or deleting or finding a missing key, is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument that should be a number isn't one.
    InvalidInput(String),
    /// The line was blank.
    EmptyCommand,
    /// The first word isn't a known command.
    UnknownCommand(String),
    /// The command needs an argument that wasn't given.
    MissingArgument(&'static str),
    /// The command got more arguments than it takes.
    UnexpectedArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(text) => write!(f, "Not a valid number: {:?}", text),
            Self::EmptyCommand => write!(f, "Empty command"),
            Self::UnknownCommand(word) => write!(f, "Unknown command: {}", word),
            Self::MissingArgument(what) => write!(f, "Missing argument: {}", what),
            Self::UnexpectedArgument(text) => write!(f, "Unexpected argument: {}", text),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for command parsing.
pub type Result<T> = std::result::Result<T, Error>;
