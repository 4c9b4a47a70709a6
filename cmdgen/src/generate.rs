//! Generate and write the command files of all threads for one scenario.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::output::{thread_file_path, write_sequence_to_file};
use crate::workload::Workload;

/// Generates `count` commands per thread for the named scenario and writes them next to `prefix`.
///
/// The scenario is resolved before anything is written, so an unknown scenario never touches the
/// filesystem. Thread files are written in order; if one fails, earlier files are left in place.
/// Returns the paths of all written files.
pub fn run(config: &Config, scenario: &str, count: usize, prefix: &Path) -> Result<Vec<PathBuf>> {
    let scenario = config.scenario_set()?.get(scenario)?.clone();

    let mut builder = Workload::builder(scenario).threads(config.threads);
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }

    write_workload(builder.build()?, count, prefix)
}

/// Writes one file per thread of the workload, each containing `count` fresh commands.
pub fn write_workload(mut workload: Workload, count: usize, prefix: &Path) -> Result<Vec<PathBuf>> {
    tracing::debug!(
        scenario = workload.scenario().name(),
        threads = workload.threads(),
        seed = workload.seed(),
        "generating command files"
    );

    let mut paths = Vec::with_capacity(workload.threads());
    for thread in 0..workload.threads() {
        let commands = workload.thread_sequence(count);
        let path = thread_file_path(prefix, thread);

        write_sequence_to_file(&path, &commands)?;
        tracing::info!(path = %path.display(), commands = commands.len(), "wrote thread file");

        paths.push(path);
    }

    Ok(paths)
}
