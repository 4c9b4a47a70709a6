//! Commands emitted into thread files, and their textual representation.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// The largest value a `write` command can carry.
pub const MAX_WRITE_VALUE: u32 = 1000;

/// Abstract category of a command, before random parameters are filled in.
///
/// Scenarios assign weights to kinds. The declaration order is also the order in which kinds are
/// listed in a scenario.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Read key `0`.
    Read0,
    /// Write a random value to key `0`.
    Write0,
    /// Read key `1`.
    Read1,
    /// Write a random value to key `1`.
    Write1,
    /// Read all keys at once.
    String,
}

impl CommandKind {
    /// All command kinds in declaration order.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Read0,
        CommandKind::Write0,
        CommandKind::Read1,
        CommandKind::Write1,
        CommandKind::String,
    ];

    /// Returns the name used for this kind in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Read0 => "read0",
            CommandKind::Write0 => "write0",
            CommandKind::Read1 => "read1",
            CommandKind::Write1 => "write1",
            CommandKind::String => "string",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of one of the two keys that commands operate on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// Key `0`.
    Zero,
    /// Key `1`.
    One,
}

impl Key {
    fn index(self) -> u8 {
        match self {
            Key::Zero => 0,
            Key::One => 1,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for Key {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Key::Zero),
            "1" => Ok(Key::One),
            other => Err(ParseCommandError::InvalidKey(other.to_owned())),
        }
    }
}

/// A single line in a thread file.
///
/// The textual forms are `read <key>`, `write <key> <value>` and `string`, where `key` is `0` or
/// `1` and `value` is in `0..=1000`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Command {
    /// Read a single key.
    Read(Key),
    /// Write a value to a single key.
    Write(Key, u32),
    /// Read all keys at once.
    String,
}

impl Command {
    /// Returns the kind this command was generated from.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Read(Key::Zero) => CommandKind::Read0,
            Command::Read(Key::One) => CommandKind::Read1,
            Command::Write(Key::Zero, _) => CommandKind::Write0,
            Command::Write(Key::One, _) => CommandKind::Write1,
            Command::String => CommandKind::String,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Read(key) => write!(f, "read {key}"),
            Command::Write(key, value) => write!(f, "write {key} {value}"),
            Command::String => f.write_str("string"),
        }
    }
}

/// Error returned when a line is not a valid [`Command`].
#[derive(Debug, Error, PartialEq)]
pub enum ParseCommandError {
    /// The line does not start with a known operation.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// The key is neither `0` nor `1`.
    #[error("invalid key `{0}`")]
    InvalidKey(String),
    /// The write value is not an integer in `0..=1000`.
    #[error("invalid write value `{0}`")]
    InvalidValue(String),
    /// The line has too few or too many fields.
    #[error("wrong number of arguments in `{0}`")]
    Arity(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = line.split(' ').collect();
        match fields.as_slice() {
            ["read", key] => Ok(Command::Read(key.parse()?)),
            ["write", key, value] => {
                let key = key.parse()?;
                let value = value
                    .parse::<u32>()
                    .ok()
                    .filter(|v| *v <= MAX_WRITE_VALUE)
                    .ok_or_else(|| ParseCommandError::InvalidValue((*value).to_owned()))?;
                Ok(Command::Write(key, value))
            }
            ["string"] => Ok(Command::String),
            ["read" | "write" | "string", ..] => Err(ParseCommandError::Arity(line.to_owned())),
            _ => Err(ParseCommandError::UnknownCommand(line.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_forms() {
        assert_eq!(Command::Read(Key::Zero).to_string(), "read 0");
        assert_eq!(Command::Read(Key::One).to_string(), "read 1");
        assert_eq!(Command::Write(Key::Zero, 0).to_string(), "write 0 0");
        assert_eq!(Command::Write(Key::One, 1000).to_string(), "write 1 1000");
        assert_eq!(Command::String.to_string(), "string");
    }

    #[test]
    fn parses_rendered_commands() {
        assert_eq!("read 1".parse(), Ok(Command::Read(Key::One)));
        assert_eq!("write 0 517".parse(), Ok(Command::Write(Key::Zero, 517)));
        assert_eq!("string".parse(), Ok(Command::String));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            "read 2".parse::<Command>(),
            Err(ParseCommandError::InvalidKey("2".into()))
        );
        assert_eq!(
            "write 1 1001".parse::<Command>(),
            Err(ParseCommandError::InvalidValue("1001".into()))
        );
        assert_eq!(
            "write 1 -3".parse::<Command>(),
            Err(ParseCommandError::InvalidValue("-3".into()))
        );
        assert_eq!(
            "write 1".parse::<Command>(),
            Err(ParseCommandError::Arity("write 1".into()))
        );
        assert_eq!(
            "string 0".parse::<Command>(),
            Err(ParseCommandError::Arity("string 0".into()))
        );
        assert_eq!(
            "delete 0".parse::<Command>(),
            Err(ParseCommandError::UnknownCommand("delete 0".into()))
        );
        assert!("read  0".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Command::Write(Key::One, 3).kind(), CommandKind::Write1);
        assert_eq!(Command::Read(Key::Zero).kind(), CommandKind::Read0);
        assert_eq!(Command::String.kind(), CommandKind::String);
    }
}
