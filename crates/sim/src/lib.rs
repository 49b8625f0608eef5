// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Texas Hold'em hands simulator.
//!
//! Deals random Texas Hold'em hands to a table of players, evaluates every
//! player hand at showdown and aggregates the hands categories frequencies and
//! the players wins and ties:
//!
//! ```
//! # use showdown_sim::{Config, Simulation};
//! let config = Config {
//!     trials: 1_000,
//!     players: 3,
//!     seed: Some(42),
//!     ..Config::default()
//! };
//!
//! let stats = Simulation::new(config).unwrap().run(|_| {}).unwrap();
//! assert_eq!(stats.trials(), 1_000);
//! assert_eq!(stats.showdowns(), 3_000);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};

pub mod player;
pub mod simulation;
pub mod stats;
pub mod table;

pub use player::{Player, PlayerId};
pub use simulation::Simulation;
pub use stats::Stats;
pub use table::{Showdown, Table, TrialResult};

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of hands to deal.
    pub trials: u64,
    /// The number of players at the table.
    pub players: usize,
    /// The number of parallel tasks running trials.
    pub tasks: usize,
    /// The number of trials between reports.
    pub report_every: u64,
    /// The random generator seed, seeded from the OS if None.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 10_000,
            players: 2,
            tasks: 1,
            report_every: 100,
            seed: None,
        }
    }
}

impl Config {
    /// Checks the config values.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            bail!("The number of trials must be greater than zero");
        }

        if self.players < 2 {
            bail!("A showdown needs at least 2 players, got {}", self.players);
        }

        if self.tasks == 0 {
            bail!("The number of tasks must be greater than zero");
        }

        if self.report_every == 0 {
            bail!("The report interval must be greater than zero");
        }

        Ok(())
    }
}
