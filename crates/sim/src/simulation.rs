// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation runner.
use anyhow::{Result, anyhow};
use log::{debug, info};
use rand::prelude::*;
use std::{thread, time::Instant};

use crate::{Config, stats::Stats, table::Table};

/// Runs trials and aggregates their stats.
#[derive(Debug)]
pub struct Simulation {
    config: Config,
}

impl Simulation {
    /// Creates a simulation for a valid config.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The simulation config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs all the trials calling `report` with the aggregated stats every
    /// `report_every` trials and at the end.
    ///
    /// Each task owns its random generator and table and counts into its own
    /// stats, the tasks stats are merged at the end of each batch.
    pub fn run<F>(&self, mut report: F) -> Result<Stats>
    where
        F: FnMut(&Stats),
    {
        let Config {
            trials,
            players,
            tasks,
            report_every,
            seed,
        } = self.config;

        info!("Running {trials} trials with {players} players on {tasks} tasks");

        let mut rngs = (0..tasks)
            .map(|task_id| match seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                None => SmallRng::from_os_rng(),
            })
            .collect::<Vec<_>>();

        let now = Instant::now();
        let mut stats = Stats::new(players);

        while stats.trials() < trials {
            let batch = report_every.min(trials - stats.trials());
            let batch_stats = run_batch(&mut rngs, players, batch)?;
            stats.merge(&batch_stats);

            debug!("Completed {} of {trials} trials", stats.trials());
            report(&stats);
        }

        info!(
            "Completed {} trials in {:.3}s",
            stats.trials(),
            now.elapsed().as_secs_f64()
        );

        Ok(stats)
    }
}

/// Runs a batch of trials splitting them between the tasks.
fn run_batch(rngs: &mut [SmallRng], players: usize, trials: u64) -> Result<Stats> {
    let num_tasks = rngs.len() as u64;

    thread::scope(|s| -> Result<Stats> {
        let handles = rngs
            .iter_mut()
            .enumerate()
            .map(|(task_id, rng)| {
                // Spread the remainder on the first tasks.
                let task_id = task_id as u64;
                let task_trials = trials / num_tasks + u64::from(task_id < trials % num_tasks);
                s.spawn(move || run_trials(rng, players, task_trials))
            })
            .collect::<Vec<_>>();

        let mut stats = Stats::new(players);
        for handle in handles {
            let task_stats = handle
                .join()
                .map_err(|_| anyhow!("Simulation task panicked"))??;
            stats.merge(&task_stats);
        }

        Ok(stats)
    })
}

/// Runs trials on a single table.
fn run_trials<R: Rng>(rng: &mut R, players: usize, trials: u64) -> Result<Stats> {
    let mut table = Table::new(players);
    let mut stats = Stats::new(players);

    for _ in 0..trials {
        let result = table.play(rng)?;
        stats.record(&result);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::HandRank;

    fn config(trials: u64, players: usize, tasks: usize) -> Config {
        Config {
            trials,
            players,
            tasks,
            report_every: 100,
            seed: Some(11),
        }
    }

    #[test]
    fn invalid_config() {
        assert!(Simulation::new(config(0, 2, 1)).is_err());
        assert!(Simulation::new(config(10, 1, 1)).is_err());
    }

    #[test]
    fn run_reports() {
        let sim = Simulation::new(config(1_050, 2, 1)).unwrap();

        let mut reports = Vec::new();
        let stats = sim.run(|stats| reports.push(stats.trials())).unwrap();

        assert_eq!(
            reports,
            [100, 200, 300, 400, 500, 600, 700, 800, 900, 1_000, 1_050]
        );
        assert_eq!(stats.trials(), 1_050);
        assert_eq!(stats.showdowns(), 2_100);
        assert_eq!(stats.wins(0) + stats.wins(1) + stats.ties(), 1_050);

        let total = HandRank::ranks().map(|r| stats.frequency(r)).sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(stats.count(HandRank::RoyalStraightFlush), 0);
    }

    #[test]
    fn run_seeded() {
        let s1 = Simulation::new(config(500, 3, 2)).unwrap().run(|_| {}).unwrap();
        let s2 = Simulation::new(config(500, 3, 2)).unwrap().run(|_| {}).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn run_parallel() {
        // Trials don't divide evenly between tasks.
        let stats = Simulation::new(config(1_001, 4, 3))
            .unwrap()
            .run(|_| {})
            .unwrap();

        assert_eq!(stats.trials(), 1_001);
        assert_eq!(stats.showdowns(), 4_004);
        let wins = (0..4).map(|seat| stats.wins(seat)).sum::<u64>();
        assert_eq!(wins + stats.ties(), 1_001);
    }

    #[test]
    fn run_frequencies() {
        // About 17% of 7 cards hands are high card and 44% one pair.
        let stats = Simulation::new(config(20_000, 2, 2))
            .unwrap()
            .run(|_| {})
            .unwrap();

        let high_card = stats.frequency(HandRank::HighCard);
        assert!((0.15..0.20).contains(&high_card), "{high_card}");

        let one_pair = stats.frequency(HandRank::OnePair);
        assert!((0.41..0.47).contains(&one_pair), "{one_pair}");
    }

    #[test]
    fn run_exhausted_deck() {
        let err = Simulation::new(config(10, 23, 1))
            .unwrap()
            .run(|_| {})
            .unwrap_err();
        assert!(err.to_string().contains("deck exhausted"), "{err}");
    }
}
