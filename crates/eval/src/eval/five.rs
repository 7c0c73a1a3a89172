// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand scoring.
use showdown_cards::Card;

use super::values::ValueSet;
use crate::{EvalError, HandRank, Result, Score, Tiebreak};

/// Scores a five cards hand.
///
/// Fails with [InvalidHandSize](EvalError::InvalidHandSize) if the hand doesn't
/// have exactly five cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("AS 2H 3C 4D 5S").unwrap();
/// let score = score_five(&cards).unwrap();
/// assert_eq!(score, Score::new(HandRank::Straight, &[5]));
/// ```
pub fn score_five(cards: &[Card]) -> Result<Score> {
    let cards: &[Card; 5] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize {
            count: cards.len(),
            min: 5,
            max: 5,
        })?;

    Ok(score(cards))
}

/// Scores five cards, categories are checked from the strongest.
pub(crate) fn score(cards: &[Card; 5]) -> Score {
    // Values sorted from the highest so that kickers come out in order.
    let mut values = cards.map(|c| c.value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = values.into_iter().collect::<ValueSet>().straight_high();

    let mut counts = [0u8; 15];
    for v in values {
        counts[v as usize] += 1;
    }

    // Five cards hold at most one quad or one triple, and at most two pairs.
    let mut quad = None;
    let mut triple = None;
    let mut pairs = Tiebreak::default();
    for v in distinct(&values) {
        match counts[v as usize] {
            4 => quad = Some(v),
            3 => triple = Some(v),
            2 => pairs.push(v),
            _ => {}
        }
    }

    if let (true, Some(high)) = (is_flush, straight) {
        return Score::from_parts(HandRank::StraightFlush, [high].into_iter().collect());
    }

    if let Some(quad) = quad {
        let tiebreak = [quad].into_iter().chain(kickers(values, &[quad])).collect();
        return Score::from_parts(HandRank::FourOfAKind, tiebreak);
    }

    let pairs = pairs.as_slice();
    if let (Some(triple), [pair]) = (triple, pairs) {
        let tiebreak = [triple, *pair].into_iter().collect();
        return Score::from_parts(HandRank::FullHouse, tiebreak);
    }

    if is_flush {
        return Score::from_parts(HandRank::Flush, values.into_iter().collect());
    }

    if let Some(high) = straight {
        return Score::from_parts(HandRank::Straight, [high].into_iter().collect());
    }

    if let Some(triple) = triple {
        let tiebreak = [triple].into_iter().chain(kickers(values, &[triple])).collect();
        return Score::from_parts(HandRank::ThreeOfAKind, tiebreak);
    }

    match *pairs {
        [high, low] => {
            let tiebreak = [high, low]
                .into_iter()
                .chain(kickers(values, &[high, low]))
                .collect();
            Score::from_parts(HandRank::TwoPair, tiebreak)
        }
        [pair] => {
            let tiebreak = [pair].into_iter().chain(kickers(values, &[pair])).collect();
            Score::from_parts(HandRank::OnePair, tiebreak)
        }
        _ => Score::from_parts(HandRank::HighCard, values.into_iter().collect()),
    }
}

/// The values not in `skip`.
fn kickers(values: [u8; 5], skip: &[u8]) -> impl Iterator<Item = u8> + '_ {
    values.into_iter().filter(move |v| !skip.contains(v))
}

/// Distinct values of a sorted values array, in the same order.
fn distinct(values: &[u8; 5]) -> impl Iterator<Item = u8> + '_ {
    values
        .iter()
        .enumerate()
        .filter(|&(pos, v)| pos == 0 || values[pos - 1] != *v)
        .map(|(_, &v)| v)
}
