//! Optional YAML configuration for `cmdgen`.
//!
//! All fields are optional. Command line flags take precedence over values from the file.
//!
//! ```yaml
//! threads: 4
//! seed: 42
//! scenarios:
//!   read-heavy:
//!     read0: 45
//!     write0: 5
//!     read1: 45
//!     write1: 5
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::command::CommandKind;
use crate::scenario::{Scenario, ScenarioSet};
use crate::workload::DEFAULT_THREADS;

/// Settings shared by all thread files of a single run.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of thread files to generate.
    ///
    /// # Default
    ///
    /// `3`
    pub threads: usize,

    /// Seed for the random number generator.
    ///
    /// If not set, a random seed is chosen and every run produces different files.
    pub seed: Option<u64>,

    /// Additional scenarios, keyed by name.
    ///
    /// Each scenario maps command kinds (`read0`, `write0`, `read1`, `write1`, `string`) to
    /// positive weights. Kinds that are left out are never generated. A scenario named like a
    /// built-in one replaces it.
    pub scenarios: BTreeMap<String, BTreeMap<CommandKind, u32>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            seed: None,
            scenarios: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from a YAML file, or returns the defaults if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config file `{}`", path.display()))?;
        let config = serde_yaml::from_reader(file).context("failed to parse config YAML")?;
        Ok(config)
    }

    /// Builds the set of selectable scenarios: the built-ins plus the configured ones.
    pub fn scenario_set(&self) -> crate::Result<ScenarioSet> {
        let mut set = ScenarioSet::builtin();
        for (name, weights) in &self.scenarios {
            let scenario = Scenario::new(name.as_str(), weights.iter().map(|(k, w)| (*k, *w)))?;
            if set.insert(scenario).is_some() {
                tracing::debug!(scenario = %name, "configured scenario replaces built-in");
            }
        }
        Ok(set)
    }
}
