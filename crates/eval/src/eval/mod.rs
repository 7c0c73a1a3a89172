// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Five cards hands are scored directly by checking categories from the
//! strongest, six and seven cards hands are scored by searching all their five
//! cards subsets for the best score.
//!
//! It provides a [best_hand] function that computes the score of a 5, 6, or 7
//! cards hand, and a [best_hand_with_cards] that also returns the five cards
//! that make the best hand, useful for UIs to show a winning hand.
use log::trace;
use showdown_cards::{Card, KSubsets, Rank, Suit};
use std::cmp::Ordering;

use crate::{EvalError, HandRank, Result, Score};

mod five;
pub use five::score_five;

mod values;
pub use values::{card_value, card_values, straight_flush_high, straight_high, value_of};

/// The minimum number of cards in a hand.
pub const MIN_CARDS: usize = 5;

/// The maximum number of cards in a hand.
pub const MAX_CARDS: usize = 7;

/// A card in a hand that may be missing.
///
/// This is implemented for [Card] and for `Option<Card>`, hands dealt from a
/// short deck can have missing cards that are skipped by the evaluator.
pub trait HandCard: Copy {
    /// Returns the card if present.
    fn card(self) -> Option<Card>;
}

impl HandCard for Card {
    #[inline]
    fn card(self) -> Option<Card> {
        Some(self)
    }
}

impl HandCard for Option<Card> {
    #[inline]
    fn card(self) -> Option<Card> {
        self
    }
}

/// The best five cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    score: Score,
    cards: [Card; 5],
}

impl BestHand {
    /// The hand score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The five cards that make the hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

/// Returns the score of the best five cards hand in the given cards.
///
/// Missing cards are skipped, fails with
/// [InvalidHandSize](EvalError::InvalidHandSize) if the number of cards is not
/// between 5 and 7.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("AS KS QS JS TS 2H 3H").unwrap();
/// assert_eq!(best_hand(&cards).unwrap(), Score::new(HandRank::StraightFlush, &[14]));
/// ```
pub fn best_hand<C: HandCard>(cards: &[C]) -> Result<Score> {
    best_hand_with_cards(cards).map(|best| best.score)
}

/// Returns the best five cards hand and its score from the given cards.
///
/// When more than one subset has the best score the first in enumeration
/// order is returned.
pub fn best_hand_with_cards<C: HandCard>(cards: &[C]) -> Result<BestHand> {
    let count = cards.iter().filter(|c| c.card().is_some()).count();
    let size_error = EvalError::InvalidHandSize {
        count,
        min: MIN_CARDS,
        max: MAX_CARDS,
    };

    if !(MIN_CARDS..=MAX_CARDS).contains(&count) {
        return Err(size_error);
    }

    let mut hand = [Card::new(Rank::Ace, Suit::Spades); MAX_CARDS];
    for (pos, card) in cards.iter().filter_map(|c| c.card()).enumerate() {
        hand[pos] = card;
    }

    let hand = &hand[..count];
    let best = if count == MIN_CARDS {
        let cards = [hand[0], hand[1], hand[2], hand[3], hand[4]];
        BestHand {
            score: five::score(&cards),
            cards,
        }
    } else {
        KSubsets::new(count, MIN_CARDS)
            .map(|subset| {
                let cards = std::array::from_fn(|i| hand[subset[i]]);
                BestHand {
                    score: five::score(&cards),
                    cards,
                }
            })
            .reduce(|best, h| if h.score > best.score { h } else { best })
            .ok_or(size_error)?
    };

    debug_assert!(straight_flush_high(hand).is_none_or(|high| {
        best.score == Score::new(HandRank::StraightFlush, &[high])
    }));

    trace!(
        "Best hand {} {:?} from {count} cards",
        best.score, best.cards
    );

    Ok(best)
}

/// Compares two scores, a greater score is the stronger hand.
pub fn compare_scores(s1: &Score, s2: &Score) -> Ordering {
    s1.cmp(s2)
}

/// Compares the best hands from two sets of cards.
///
/// ```
/// # use std::cmp::Ordering;
/// # use showdown_eval::*;
/// let h1 = parse_cards("9S 9H 4C 4D 2S").unwrap();
/// let h2 = parse_cards("9C 9D 5C 5D KS").unwrap();
/// assert_eq!(compare_hands(&h1, &h2).unwrap(), Ordering::Less);
/// ```
pub fn compare_hands<C1, C2>(cards1: &[C1], cards2: &[C2]) -> Result<Ordering>
where
    C1: HandCard,
    C2: HandCard,
{
    let s1 = best_hand(cards1)?;
    let s2 = best_hand(cards2)?;
    Ok(compare_scores(&s1, &s2))
}
