use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating command files.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested scenario is neither built in nor configured.
    #[error("unknown scenario `{name}` (available: {})", available.join(", "))]
    UnknownScenario {
        /// The name that was requested.
        name: String,
        /// Names of all scenarios that could have been selected.
        available: Vec<String>,
    },

    /// A scenario's weights cannot form a probability distribution.
    #[error("scenario `{scenario}` has invalid weights: {reason}")]
    InvalidWeights {
        /// Name of the offending scenario.
        scenario: String,
        /// What is wrong with the weights.
        reason: String,
    },

    /// At least one thread file has to be generated.
    #[error("thread count must be at least 1")]
    InvalidThreads,

    /// A thread file could not be written.
    #[error("failed to write `{}`", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type using [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;
