// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown simulation.
use anyhow::{Context, Result, anyhow, ensure};
use log::{debug, info, trace};
use rand::{prelude::*, rngs::StdRng};
use std::{fmt, thread, time::Instant};

use showdown_eval::{BestHand, Deck, HandRank, best_hand_with_cards, parse_cards};

use crate::round::{Round, Showdown};

/// The simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// Number of rounds to play.
    pub rounds: usize,
    /// Number of parallel tasks.
    pub tasks: usize,
    /// Seed for the decks shuffling, random if `None`.
    pub seed: Option<u64>,
}

impl Config {
    /// The maximum number of players, a round uses two cards for each
    /// player plus three burn and five board cards.
    pub const MAX_PLAYERS: usize = (Deck::SIZE - 8) / 2;
}

/// The simulation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of rounds played.
    pub rounds: usize,
    /// Number of rounds with more than one winner.
    pub splits: usize,
    wins: [usize; 9],
}

impl Summary {
    /// Number of rounds won with a hand of the given rank.
    pub fn wins(&self, rank: HandRank) -> usize {
        self.wins[rank as usize]
    }

    fn record(&mut self, showdown: &Showdown) {
        self.rounds += 1;

        if showdown.is_split() {
            self.splits += 1;
        }

        if let Some(hand) = showdown.winning_hand() {
            self.wins[hand.best.score().rank() as usize] += 1;
        }
    }

    fn merge(&mut self, other: &Summary) {
        self.rounds += other.rounds;
        self.splits += other.splits;
        for (w, o) in self.wins.iter_mut().zip(other.wins) {
            *w += o;
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds:          {}", self.rounds)?;
        writeln!(f, "Split pots:      {}", self.splits)?;
        writeln!(f)?;
        writeln!(f, "Winning hands:")?;
        for rank in HandRank::ranks().rev() {
            writeln!(f, "{:<17}{}", format!("{rank}:"), self.wins(rank))?;
        }

        Ok(())
    }
}

/// Plays the configured number of rounds and returns the results.
///
/// Rounds are split between tasks, when a seed is given each task shuffles its
/// decks from the seed plus the task id so that runs are repeatable.
pub fn run(config: &Config) -> Result<Summary> {
    ensure!(
        (2..=Config::MAX_PLAYERS).contains(&config.players),
        "players must be between 2 and {}, got {}",
        Config::MAX_PLAYERS,
        config.players
    );
    ensure!(config.tasks > 0, "tasks must be greater than 0");

    info!(
        "Playing {} rounds with {} players on {} tasks",
        config.rounds, config.players, config.tasks
    );

    let now = Instant::now();
    let rounds_per_task = config.rounds.div_ceil(config.tasks);

    let summary = thread::scope(|s| -> Result<Summary> {
        let tasks = (0..config.tasks)
            .map(|task_id| {
                let start = task_id * rounds_per_task;
                let rounds = rounds_per_task.min(config.rounds.saturating_sub(start));
                s.spawn(move || play(config, task_id, rounds))
            })
            .collect::<Vec<_>>();

        let mut summary = Summary::default();
        for task in tasks {
            let task_summary = task
                .join()
                .map_err(|_| anyhow!("simulation task panicked"))??;
            summary.merge(&task_summary);
        }

        Ok(summary)
    })?;

    info!(
        "Played {} rounds in {:.3}s",
        summary.rounds,
        now.elapsed().as_secs_f64()
    );

    Ok(summary)
}

fn play(config: &Config, task_id: usize, rounds: usize) -> Result<Summary> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
        None => StdRng::from_os_rng(),
    };

    let mut summary = Summary::default();
    for _ in 0..rounds {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let round = Round::deal(&mut deck, config.players);
        let showdown = round.showdown()?;

        for hand in &showdown.hands {
            trace!(
                "Task {task_id} player {} {:?}: {}",
                hand.player,
                hand.best.cards(),
                hand.best.score()
            );
        }

        if let Some(hand) = showdown.winning_hand() {
            debug!(
                "Task {task_id} board {round} winners {:?} with {}",
                showdown.winners,
                hand.best.score()
            );
        }

        summary.record(&showdown);
    }

    Ok(summary)
}

/// A ranked hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedHand {
    /// The hand index in the input.
    pub hand: usize,
    /// The hand position, tied hands share the same position.
    pub place: usize,
    /// The hand best five cards and score.
    pub best: BestHand,
}

/// Scores and ranks the given hands, each hand is a list of 5 to 7 cards.
///
/// Hands are returned from the strongest.
pub fn eval_hands<S: AsRef<str>>(hands: &[S]) -> Result<Vec<RankedHand>> {
    let bests = hands
        .iter()
        .enumerate()
        .map(|(idx, hand)| {
            let cards = parse_cards(hand.as_ref())
                .with_context(|| format!("hand {} '{}'", idx + 1, hand.as_ref()))?;
            best_hand_with_cards(&cards)
                .with_context(|| format!("hand {} '{}'", idx + 1, hand.as_ref()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut ranked = bests
        .iter()
        .enumerate()
        .map(|(hand, best)| RankedHand {
            hand,
            place: 1 + bests.iter().filter(|b| b.score() > best.score()).count(),
            best: *best,
        })
        .collect::<Vec<_>>();

    ranked.sort_by_key(|r| (r.place, r.hand));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rounds: usize, tasks: usize) -> Config {
        Config {
            players: 6,
            rounds,
            tasks,
            seed: Some(101),
        }
    }

    #[test]
    fn run_with_seed() {
        let s1 = run(&config(200, 1)).unwrap();
        let s2 = run(&config(200, 1)).unwrap();
        assert_eq!(s1, s2);

        assert_eq!(s1.rounds, 200);
        let wins = HandRank::ranks().map(|r| s1.wins(r)).sum::<usize>();
        assert_eq!(wins, 200);
        assert!(s1.splits < 200);

        // With 6 players a high card very rarely wins.
        assert!(s1.wins(HandRank::OnePair) + s1.wins(HandRank::TwoPair) > 0);
    }

    #[test]
    fn run_tasks() {
        let summary = run(&config(101, 4)).unwrap();
        assert_eq!(summary.rounds, 101);

        let summary = run(&config(3, 8)).unwrap();
        assert_eq!(summary.rounds, 3);

        let summary = run(&config(0, 2)).unwrap();
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn invalid_config() {
        let mut cfg = config(10, 1);
        cfg.players = 1;
        assert!(run(&cfg).is_err());

        cfg.players = Config::MAX_PLAYERS + 1;
        assert!(run(&cfg).is_err());

        cfg.players = Config::MAX_PLAYERS;
        assert!(run(&cfg).is_ok());

        cfg.tasks = 0;
        assert!(run(&cfg).is_err());
    }

    #[test]
    fn summary_display() {
        let summary = run(&config(10, 2)).unwrap();
        let s = summary.to_string();
        assert!(s.starts_with("Rounds:          10\n"));
        assert!(s.contains("Straight Flush:  "));
        assert!(s.contains("High Card:       "));
    }

    #[test]
    fn rank_hands() {
        let hands = ["9S 9H 4C 4D 2S", "9C 9D 5C 5D KS", "9H 9S 5H 5S KD"];
        let ranked = eval_hands(&hands).unwrap();

        let order = ranked.iter().map(|r| (r.hand, r.place)).collect::<Vec<_>>();
        assert_eq!(order, [(1, 1), (2, 1), (0, 3)]);
        assert_eq!(ranked[0].best.score().to_string(), "Two Pair (9, 5, 13)");

        let ranked = eval_hands(&["AS KS QS JS TS 2H 3H".to_string()]).unwrap();
        assert_eq!(ranked[0].best.score().rank(), HandRank::StraightFlush);
    }

    #[test]
    fn rank_invalid_hands() {
        let err = eval_hands(&["AS KS QS JS TS", "1S 2S 3S 4S 5S"]).unwrap_err();
        assert!(format!("{err:#}").contains("hand 2 '1S 2S 3S 4S 5S'"));

        let err = eval_hands(&["AS KS QS JS"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid hand size 4"));
    }
}
