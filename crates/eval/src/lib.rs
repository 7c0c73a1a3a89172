// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A hand is scored with a
//! [HandRank] category and a [Tiebreak] sequence of values that orders hands
//! with the same category, the [Score] ordering matches the standard poker hand
//! rankings so the greater score wins at showdown.
//!
//! To evaluate a hand use [best_hand] and compare the scores, or use
//! [compare_hands] to compare two hands directly:
//!
//! ```
//! # use std::cmp::Ordering;
//! # use showdown_eval::*;
//! let board = parse_cards("KH 7D 7S 2C 9H").unwrap();
//!
//! let mut hero = parse_cards("KS QS").unwrap();
//! hero.extend_from_slice(&board);
//!
//! let mut villain = parse_cards("9S 9D").unwrap();
//! villain.extend_from_slice(&board);
//!
//! let s1 = best_hand(&hero).unwrap();
//! let s2 = best_hand(&villain).unwrap();
//! assert_eq!(s1.to_string(), "Two Pair (13, 7, 12)");
//! assert_eq!(s2.to_string(), "Full House (9, 7)");
//! assert!(s2 > s1);
//!
//! assert_eq!(compare_hands(&hero, &villain).unwrap(), Ordering::Less);
//! ```
//!
//! The evaluator is stateless, hands can be evaluated concurrently from any
//! number of threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod error;
pub use error::{EvalError, Result};

pub mod eval;
pub use eval::{
    BestHand, HandCard, best_hand, best_hand_with_cards, card_value, card_values,
    compare_hands, compare_scores, score_five, straight_flush_high, straight_high, value_of,
};

mod score;
pub use score::{HandRank, Score, Tiebreak};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
