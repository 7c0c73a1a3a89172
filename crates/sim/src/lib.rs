// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hands simulator.
//!
//! Deals Texas Hold'em rounds from shuffled decks and scores each showdown
//! with the [showdown_eval] evaluator:
//!
//! ```
//! # use showdown_sim::*;
//! let config = Config {
//!     players: 6,
//!     rounds: 100,
//!     tasks: 2,
//!     seed: Some(7),
//! };
//!
//! let summary = run(&config).unwrap();
//! assert_eq!(summary.rounds, 100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod round;
pub use round::{PlayerHand, Round, Showdown};

pub mod sim;
pub use sim::{Config, RankedHand, Summary, eval_hands, run};
