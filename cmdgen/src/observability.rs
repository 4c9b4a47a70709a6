//! Logging setup for the `cmdgen` binary.

use std::env;

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs the global `tracing` subscriber, logging to stderr.
///
/// Stdout is reserved for the list of generated files.
pub fn initialize_tracing() {
    let (level, env_filter) = parse_rust_log();
    let format = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(format.with_filter(LevelFilter::from(level)))
        .with(env_filter)
        .init();
}

fn parse_rust_log() -> (Level, EnvFilter) {
    // A bare level such as `RUST_LOG=debug` only raises cmdgen's own verbosity. Anything else is
    // taken as a full filter directive.
    let level = match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) => match value.parse::<Level>() {
            Ok(level) => level,
            Err(_) => return (Level::TRACE, EnvFilter::new(value)),
        },
        Err(_) => Level::INFO,
    };

    // Dependencies stay at WARN; cmdgen events pass here and are capped by `level` on the layer.
    let env_filter = EnvFilter::new("WARN,cmdgen=TRACE");

    (level, env_filter)
}
