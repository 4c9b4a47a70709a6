//! Generator for synthetic workload command files.
//!
//! A [`Scenario`] assigns weights to five command kinds: reads and writes on two keys, plus a
//! `string` command that reads all keys. For every simulated thread, a [`Workload`] draws an
//! independent sequence of commands from the scenario and writes it to
//! `<prefix>_thread<t>.txt`, one command per line:
//!
//! ```text
//! read 0
//! write 1 417
//! string
//! ```
//!
//! Three scenarios are built in (`variant`, `uniform` and `skewed`); more can be defined in a
//! [`Config`] file.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod command;
pub mod config;
mod error;
pub mod generate;
pub mod observability;
pub mod output;
pub mod scenario;
pub mod workload;

pub use crate::command::{Command, CommandKind};
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::generate::run;
pub use crate::scenario::{Scenario, ScenarioSet};
pub use crate::workload::Workload;
