//! A module for defining a [`Workload`] that generates per-thread command sequences.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::command::{Command, CommandKind, Key, MAX_WRITE_VALUE};
use crate::error::{Error, Result};
use crate::scenario::Scenario;

/// Number of thread files generated unless configured otherwise.
pub const DEFAULT_THREADS: usize = 3;

/// A builder for creating a [`Workload`].
#[derive(Debug)]
pub struct WorkloadBuilder {
    scenario: Scenario,
    threads: usize,
    seed: u64,
}

impl WorkloadBuilder {
    /// The number of thread files to generate.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Seed for the RNG, making the generated commands reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Creates the workload instance.
    pub fn build(self) -> Result<Workload> {
        if self.threads == 0 {
            return Err(Error::InvalidThreads);
        }

        Ok(Workload {
            scenario: self.scenario,
            threads: self.threads,
            seed: self.seed,
            rng: SmallRng::seed_from_u64(self.seed),
        })
    }
}

/// Generates command sequences for a fixed number of simulated threads.
#[derive(Debug)]
pub struct Workload {
    /// The distribution commands are drawn from.
    scenario: Scenario,
    /// How many thread files to generate.
    threads: usize,
    /// The seed the RNG was created from, kept for logging.
    seed: u64,

    /// The RNG driving all command and value draws.
    rng: SmallRng,
}

impl Workload {
    /// Constructs a new workload builder for the given scenario.
    pub fn builder(scenario: Scenario) -> WorkloadBuilder {
        WorkloadBuilder {
            scenario,
            threads: DEFAULT_THREADS,
            seed: rand::random(),
        }
    }

    /// The scenario this workload samples from.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The number of thread files this workload generates.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// The seed the RNG was created from. Reusing it reproduces the same files.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the next command.
    pub fn next_command(&mut self) -> Command {
        next_command(&self.scenario, &mut self.rng)
    }

    /// Generates a fresh sequence of `count` commands for one thread.
    ///
    /// Every call continues the RNG stream, so consecutive sequences are independent.
    pub fn thread_sequence(&mut self, count: usize) -> Vec<Command> {
        generate_thread_sequence(&self.scenario, count, &mut self.rng)
    }
}

/// Generates `count` commands drawn independently from `scenario`, using the given RNG.
pub fn generate_thread_sequence<R: Rng + ?Sized>(
    scenario: &Scenario,
    count: usize,
    rng: &mut R,
) -> Vec<Command> {
    (0..count).map(|_| next_command(scenario, rng)).collect()
}

fn next_command<R: Rng + ?Sized>(scenario: &Scenario, rng: &mut R) -> Command {
    match scenario.sample_kind(rng) {
        CommandKind::Read0 => Command::Read(Key::Zero),
        CommandKind::Write0 => Command::Write(Key::Zero, rng.random_range(0..=MAX_WRITE_VALUE)),
        CommandKind::Read1 => Command::Read(Key::One),
        CommandKind::Write1 => Command::Write(Key::One, rng.random_range(0..=MAX_WRITE_VALUE)),
        CommandKind::String => Command::String,
    }
}
