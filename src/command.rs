//! Text commands a front end sends to a [`Session`][crate::Session].
//!
//! One command per line, a word followed by at most one argument:
//!
//! ```text
//! insert <key>    find <key>    delete <key>
//! delay <ms>      clear         show
//! ```
//!
//! Keys are signed integers. Arguments are rejected before anything touches the tree.

use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

/// The key type commands work with.
pub type Key = i64;

/// A parsed line of user input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert the key, animating the walk to its spot.
    Insert(Key),
    /// Delete the key, animating the walk to it.
    Delete(Key),
    /// Search for the key, animating the search path.
    Find(Key),
    /// Throw the whole tree away.
    Clear,
    /// Change the pacing delay.
    Delay(Duration),
    /// Redraw the tree without changing it.
    Show,
}

impl FromStr for Command {
    type Err = Error;

    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use animated_bst::{Command, Error};
    ///
    /// assert_eq!("insert 5".parse(), Ok(Command::Insert(5)));
    /// assert_eq!("  FIND -3 ".parse(), Ok(Command::Find(-3)));
    /// assert_eq!("delay 100".parse(), Ok(Command::Delay(Duration::from_millis(100))));
    /// assert_eq!(
    ///     "insert five".parse::<Command>(),
    ///     Err(Error::InvalidInput("five".to_string()))
    /// );
    /// ```
    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(Error::EmptyCommand)?.to_ascii_lowercase();
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(Error::UnexpectedArgument(extra.to_string()));
        }

        let command = match name.as_str() {
            "insert" => Self::Insert(parse_key(required(argument, "key")?)?),
            "delete" => Self::Delete(parse_key(required(argument, "key")?)?),
            "find" => Self::Find(parse_key(required(argument, "key")?)?),
            "delay" => Self::Delay(parse_delay(required(argument, "milliseconds")?)?),
            "clear" => no_argument(argument, Self::Clear)?,
            "show" => no_argument(argument, Self::Show)?,
            _ => return Err(Error::UnknownCommand(name)),
        };
        Ok(command)
    }
}

/// Parses a key, accepting surrounding whitespace but nothing else that isn't part of the
/// number.
///
/// # Examples
///
/// ```
/// use animated_bst::{parse_key, Error};
///
/// assert_eq!(parse_key(" -12 "), Ok(-12));
/// assert_eq!(parse_key("12abc"), Err(Error::InvalidInput("12abc".to_string())));
/// assert_eq!(parse_key(""), Err(Error::InvalidInput(String::new())));
/// ```
pub fn parse_key(text: &str) -> Result<Key> {
    let text = text.trim();
    text.parse().map_err(|_| Error::InvalidInput(text.to_string()))
}

/// Parses a whole number of milliseconds.
pub fn parse_delay(text: &str) -> Result<Duration> {
    let text = text.trim();
    text.parse()
        .map(Duration::from_millis)
        .map_err(|_| Error::InvalidInput(text.to_string()))
}

fn required<'a>(argument: Option<&'a str>, what: &'static str) -> Result<&'a str> {
    argument.ok_or(Error::MissingArgument(what))
}

fn no_argument(argument: Option<&str>, command: Command) -> Result<Command> {
    match argument {
        Some(extra) => Err(Error::UnexpectedArgument(extra.to_string())),
        None => Ok(command),
    }
}
