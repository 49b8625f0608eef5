// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown statistics.
use std::fmt;

use showdown_eval::HandRank;

use crate::table::{Showdown, TrialResult};

/// Counters aggregated over many trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    trials: u64,
    ties: u64,
    wins: Vec<u64>,
    categories: [u64; HandRank::COUNT],
}

impl Stats {
    /// Creates empty stats for a table with the given number of players.
    pub fn new(players: usize) -> Self {
        Self {
            trials: 0,
            ties: 0,
            wins: vec![0; players],
            categories: [0; HandRank::COUNT],
        }
    }

    /// Records the result of a trial.
    pub fn record(&mut self, result: &TrialResult) {
        self.trials += 1;

        for value in &result.values {
            self.categories[value.rank().index()] += 1;
        }

        match result.showdown {
            Showdown::Winner(seat) => self.wins[seat] += 1,
            Showdown::Tie(_) => self.ties += 1,
        }
    }

    /// Adds the counters from other stats.
    pub fn merge(&mut self, other: &Stats) {
        self.trials += other.trials;
        self.ties += other.ties;

        if self.wins.len() < other.wins.len() {
            self.wins.resize(other.wins.len(), 0);
        }

        for (w, o) in self.wins.iter_mut().zip(&other.wins) {
            *w += o;
        }

        for (c, o) in self.categories.iter_mut().zip(&other.categories) {
            *c += o;
        }
    }

    /// The number of trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// The number of trials that ended in a tie.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// The number of wins for the player at the given seat.
    pub fn wins(&self, seat: usize) -> u64 {
        self.wins.get(seat).copied().unwrap_or_default()
    }

    /// The number of evaluated hands, one for each player in each trial.
    pub fn showdowns(&self) -> u64 {
        self.categories.iter().sum()
    }

    /// The number of hands with the given category.
    pub fn count(&self, rank: HandRank) -> u64 {
        self.categories[rank.index()]
    }

    /// The frequency of a category over all the evaluated hands.
    pub fn frequency(&self, rank: HandRank) -> f64 {
        match self.showdowns() {
            0 => 0.0,
            total => self.count(rank) as f64 / total as f64,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Number of Games: {}", self.trials)?;

        for rank in HandRank::reachable() {
            let label = format!("{rank}:");
            writeln!(f, "{label:<17}{:.6}", self.frequency(rank))?;
        }

        writeln!(f)?;
        for (seat, wins) in self.wins.iter().enumerate() {
            writeln!(f, "Player {} wins: {wins}", seat + 1)?;
        }

        write!(f, "Ties:          {}", self.ties)
    }
}
