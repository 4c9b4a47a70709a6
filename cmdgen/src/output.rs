//! Persisting command sequences as thread files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::error::{Error, Result};

/// Returns the path of the file for thread `thread`, i.e. `<prefix>_thread<thread>.txt`.
///
/// The prefix is used verbatim, so it may contain directories as well as a file name stem.
pub fn thread_file_path(prefix: &Path, thread: usize) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(format!("_thread{thread}.txt"));
    PathBuf::from(path)
}

/// Renders commands one per line, without a trailing newline.
pub fn render_sequence(commands: &[Command]) -> String {
    commands
        .iter()
        .map(Command::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the commands as the complete content of the file at `path`.
///
/// An existing file is truncated and overwritten.
pub fn write_sequence_to_file(path: &Path, commands: &[Command]) -> Result<()> {
    fs::write(path, render_sequence(commands)).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use crate::command::Key;

    use super::*;

    #[test]
    fn thread_file_names() {
        assert_eq!(
            thread_file_path(Path::new("out"), 0),
            PathBuf::from("out_thread0.txt")
        );
        assert_eq!(
            thread_file_path(Path::new("data/variant"), 2),
            PathBuf::from("data/variant_thread2.txt")
        );
    }

    #[test]
    fn renders_without_trailing_newline() {
        let commands = [
            Command::Read(Key::Zero),
            Command::Write(Key::One, 42),
            Command::String,
        ];
        assert_eq!(render_sequence(&commands), "read 0\nwrite 1 42\nstring");
        assert_eq!(render_sequence(&[]), "");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.txt");
        fs::write(&path, "stale content that is longer than the new one").unwrap();

        write_sequence_to_file(&path, &[Command::String]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "string");
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("seq.txt");

        let err = write_sequence_to_file(&path, &[Command::String]).unwrap_err();
        assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
    }
}
