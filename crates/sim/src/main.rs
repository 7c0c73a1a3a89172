// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use showdown_sim::{Config, eval_hands};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals rounds and reports the winning hands.
    Deal {
        /// Number of players at the table.
        #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Number of rounds to play.
        #[clap(long, short, default_value_t = 1000)]
        rounds: usize,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
        tasks: u8,
        /// Seed for repeatable runs.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Scores and ranks hands of 5 to 7 cards, i.e. "AS KD 7H 7C 2S".
    Eval {
        /// The hands to evaluate.
        #[arg(required = true)]
        hands: Vec<String>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deal {
            players,
            rounds,
            tasks,
            seed,
        } => {
            let config = Config {
                players: players as usize,
                rounds,
                tasks: tasks as usize,
                seed,
            };

            let summary = showdown_sim::run(&config)?;
            println!("{summary}");
        }
        Command::Eval { hands } => {
            for ranked in eval_hands(&hands)? {
                let cards = ranked
                    .best
                    .cards()
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");

                println!(
                    "{:>2}. hand {} {:<28} {cards}",
                    ranked.place,
                    ranked.hand + 1,
                    ranked.best.score().to_string()
                );
            }
        }
    }

    Ok(())
}
