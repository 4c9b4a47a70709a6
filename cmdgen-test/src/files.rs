//! A scratch directory for generated thread files.
//!
//! ```
//! use cmdgen_test::files::OutputDir;
//!
//! let dir = OutputDir::new();
//! let prefix = dir.prefix("run");
//! // generate files with `prefix`, then inspect them with `dir.read_thread("run", 0)`
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cmdgen::Command;
use cmdgen::output::thread_file_path;
use tempfile::TempDir;

/// A temporary directory that holds the thread files of one or more runs.
///
/// The directory and all files in it are deleted when this value is dropped.
#[derive(Debug)]
pub struct OutputDir {
    tempdir: TempDir,
}

impl OutputDir {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self {
            tempdir: tempfile::tempdir().expect("failed to create temporary directory"),
        }
    }

    /// The path of the directory.
    pub fn path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Returns the output prefix for files named `<name>_thread<t>.txt` in this directory.
    pub fn prefix(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Names of all entries in the directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(self.path())
            .expect("failed to list output directory")
            .map(|entry| {
                let entry = entry.expect("failed to read directory entry");
                entry.file_name().to_string_lossy().into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// Returns the raw contents of a thread file.
    pub fn read_raw(&self, name: &str, thread: usize) -> String {
        let path = thread_file_path(&self.prefix(name), thread);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read `{}`: {e}", path.display()))
    }

    /// Reads a thread file and parses every line, panicking on malformed lines.
    pub fn read_thread(&self, name: &str, thread: usize) -> Vec<Command> {
        let contents = self.read_raw(name, thread);
        if contents.is_empty() {
            return Vec::new();
        }

        contents
            .split('\n')
            .map(|line| {
                line.parse()
                    .unwrap_or_else(|e| panic!("invalid line `{line}`: {e}"))
            })
            .collect()
    }
}

impl Default for OutputDir {
    fn default() -> Self {
        Self::new()
    }
}
