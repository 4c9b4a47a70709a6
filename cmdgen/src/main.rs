//! Writes one command file per simulated thread for a benchmarking harness.
//!
//! ```text
//! cmdgen variant 1000 data/variant
//! ```
//!
//! produces `data/variant_thread0.txt` through `data/variant_thread2.txt`.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use std::path::{Path, PathBuf};
use std::{env, process};

use anyhow::Context;
use argh::FromArgs;
use yansi::Paint;

use cmdgen::Config;
use cmdgen::observability::initialize_tracing;

/// Generate per-thread workload command files
#[derive(Debug, FromArgs)]
pub struct Args {
    /// scenario to draw commands from: variant, uniform, skewed, or one from the config file
    #[argh(positional)]
    pub scenario: String,

    /// number of commands per thread file
    #[argh(positional)]
    pub count: usize,

    /// path prefix of the output files, which are named `<prefix>_thread<t>.txt`
    #[argh(positional)]
    pub prefix: PathBuf,

    /// path to the yaml configuration file
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// seed for reproducible output
    #[argh(option)]
    pub seed: Option<u64>,

    /// number of thread files to generate (default: 3)
    #[argh(option)]
    pub threads: Option<usize>,

    /// further arguments are accepted for compatibility and ignored
    #[argh(positional)]
    pub ignored: Vec<String>,
}

/// Like [`argh::from_env`], but prints the full usage text when arguments are missing or invalid.
fn parse_args() -> Args {
    let strings: Vec<String> = env::args().collect();
    let cmd = strings
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("cmdgen");
    let rest: Vec<&str> = strings.iter().skip(1).map(String::as_str).collect();

    Args::from_args(&[cmd], &rest).unwrap_or_else(|early_exit| match early_exit.status {
        Ok(()) => {
            println!("{}", early_exit.output);
            process::exit(0)
        }
        Err(()) => {
            eprintln!("{}", early_exit.output);
            if let Err(help) = Args::from_args(&[cmd], &["--help"]) {
                eprintln!("{}", help.output);
            }
            process::exit(1)
        }
    })
}

fn main() -> anyhow::Result<()> {
    let args = parse_args();

    initialize_tracing();
    yansi::whenever(yansi::Condition::TTY_AND_COLOR);

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    tracing::debug!(?config);
    if !args.ignored.is_empty() {
        tracing::debug!(ignored = ?args.ignored, "ignoring extra arguments");
    }

    let paths = cmdgen::run(&config, &args.scenario, args.count, &args.prefix)
        .with_context(|| format!("failed to generate `{}` workload", args.scenario))?;

    println!("{}", "Generated files:".bold());
    for path in paths {
        println!("  {}", path.display());
    }

    Ok(())
}
