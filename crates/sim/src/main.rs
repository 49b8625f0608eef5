// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown simulator command line.
use clap::{Parser, value_parser};
use log::error;
use std::process::ExitCode;

use showdown_sim::{Config, Simulation};

#[derive(Debug, Parser)]
struct Cli {
    /// The number of hands to deal.
    #[clap(long, short, default_value_t = 10_000)]
    trials: u64,
    /// The number of players at the table.
    #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(2..=22))]
    players: u8,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 1, value_parser = value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// Print the frequencies table every this many hands.
    #[clap(long, short, default_value_t = 100)]
    report_every: u64,
    /// Seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        trials: cli.trials,
        players: cli.players as usize,
        tasks: cli.tasks as usize,
        report_every: cli.report_every,
        seed: cli.seed,
    };

    let res = Simulation::new(config).and_then(|sim| {
        sim.run(|stats| {
            println!("{stats}\n");
        })
    });

    match res {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
