// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card values and straights detection.
use showdown_cards::{Card, Rank};

use super::HandCard;
use crate::Result;

/// The value of an ace when it plays low in a wheel straight.
const LOW_ACE: u8 = 1;

/// Returns the rank value of a card in 2..=14.
#[inline]
pub fn card_value(card: Card) -> u8 {
    card.value()
}

/// Returns the rank values of the given cards.
pub fn card_values(cards: &[Card]) -> Vec<u8> {
    cards.iter().copied().map(card_value).collect()
}

/// Returns the rank value of a card given in two characters notation.
///
/// Fails with [InvalidCard](crate::EvalError::InvalidCard) if the notation is
/// malformed or uses an unknown rank or suit:
///
/// ```
/// # use showdown_eval::{value_of, EvalError};
/// assert_eq!(value_of("TS").unwrap(), 10);
/// assert!(matches!(value_of("1S"), Err(EvalError::InvalidCard(_))));
/// ```
pub fn value_of(notation: &str) -> Result<u8> {
    Ok(notation.parse::<Card>()?.value())
}

/// A set of rank values, bit `v` is set if value `v` is in the set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ValueSet(u16);

impl ValueSet {
    /// Adds a rank value, values outside 2..=14 are ignored.
    pub fn insert(&mut self, value: u8) {
        if (Rank::Deuce.value()..=Rank::Ace.value()).contains(&value) {
            self.0 |= 1 << value;
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.0 & (1 << value) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the high value of the highest five values run.
    pub fn straight_high(self) -> Option<u8> {
        if self.len() < 5 {
            return None;
        }

        // The ace also plays as a one for the wheel, this is the only wrap
        // around so K-A-2-3-4 is not a straight.
        let mut set = self;
        if set.contains(Rank::Ace.value()) {
            set.0 |= 1 << LOW_ACE;
        }

        // The wheel run 1..=5 has high value 5.
        (Rank::Five.value()..=Rank::Ace.value())
            .rev()
            .find(|&high| (high - 4..=high).all(|v| set.contains(v)))
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = ValueSet::default();
        for v in iter {
            set.insert(v);
        }

        set
    }
}

/// Returns the high value of the highest straight in the given rank values.
///
/// Duplicate values are ignored, an ace counts both as 14 and as 1 so that the
/// wheel A-2-3-4-5 is a straight with high value 5. Values outside 2..=14 are
/// ignored, a low ace is given as 14 and not as 1.
///
/// ```
/// # use showdown_eval::straight_high;
/// assert_eq!(straight_high([14, 2, 3, 4, 5]), Some(5));
/// assert_eq!(straight_high([9, 10, 11, 12, 13, 14]), Some(14));
/// assert_eq!(straight_high([13, 14, 2, 3, 4]), None);
/// assert_eq!(straight_high([1, 2, 3, 4, 5]), None);
/// ```
pub fn straight_high<I>(values: I) -> Option<u8>
where
    I: IntoIterator<Item = u8>,
{
    values.into_iter().collect::<ValueSet>().straight_high()
}

/// Returns the high value of the highest straight flush in the given cards.
///
/// Cards are grouped by suit and each suit is checked for a straight, missing
/// cards are skipped.
pub fn straight_flush_high<C: HandCard>(cards: &[C]) -> Option<u8> {
    let mut suits = [ValueSet::default(); 4];
    for card in cards.iter().filter_map(|c| c.card()) {
        suits[card.suit() as usize].insert(card.value());
    }

    suits.into_iter().filter_map(ValueSet::straight_high).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalError;
    use showdown_cards::{ParseCardError, parse_cards};

    #[test]
    fn values_translation() {
        let cards = parse_cards("2S 9H TC JD QS KH AC").unwrap();
        assert_eq!(card_values(&cards), [2, 9, 10, 11, 12, 13, 14]);

        assert_eq!(value_of("ah"), Ok(14));
        assert_eq!(value_of("2D"), Ok(2));
        assert_eq!(
            value_of("1S"),
            Err(EvalError::InvalidCard(ParseCardError::InvalidRank('1')))
        );
        assert!(matches!(value_of("AS1"), Err(EvalError::InvalidCard(_))));
        assert!(matches!(value_of(""), Err(EvalError::InvalidCard(_))));
    }

    #[test]
    fn straights() {
        assert_eq!(straight_high([2, 3, 4, 5, 6]), Some(6));
        assert_eq!(straight_high([10, 11, 12, 13, 14]), Some(14));
        assert_eq!(straight_high([14, 5, 4, 3, 2]), Some(5));

        // Highest run wins.
        assert_eq!(straight_high([14, 2, 3, 4, 5, 6, 7]), Some(7));
        assert_eq!(straight_high([5, 6, 7, 8, 9, 10, 2]), Some(10));

        // Duplicates don't count.
        assert_eq!(straight_high([2, 3, 4, 5, 5]), None);
        assert_eq!(straight_high([2, 2, 3, 4, 5, 6]), Some(6));

        // No wrap around.
        assert_eq!(straight_high([12, 13, 14, 2, 3]), None);
        assert_eq!(straight_high([13, 14, 2, 3, 4]), None);

        assert_eq!(straight_high([2, 3, 4, 5]), None);

        // Values outside 2..=14 are ignored.
        assert_eq!(straight_high([1, 2, 3, 4, 5]), None);
        assert_eq!(straight_high([0, 1, 2, 3, 4, 5, 6]), Some(6));
        assert_eq!(straight_high([15, 10, 11, 12, 13]), None);
        assert_eq!(straight_high(Vec::new()), None);
        assert_eq!(straight_high([2, 3, 4, 6, 7, 9, 14]), None);
    }

    #[test]
    fn straight_flushes() {
        let cards = parse_cards("AS KS QS JS TS 2H 3H").unwrap();
        assert_eq!(straight_flush_high(&cards), Some(14));

        let cards = parse_cards("AH 2H 3H 4H 5H 6C 7D").unwrap();
        assert_eq!(straight_flush_high(&cards), Some(5));

        // A straight and a flush but not in the same suit.
        let cards = parse_cards("9C TC JC QC 2C KD 8D").unwrap();
        assert_eq!(straight_flush_high(&cards), None);

        // Missing cards are skipped.
        let cards = parse_cards("2D 3D 4D 5D 6D").unwrap();
        let mut cards = cards.into_iter().map(Some).collect::<Vec<_>>();
        assert_eq!(straight_flush_high(&cards), Some(6));

        cards.push(None);
        cards.push("AD".parse().ok());
        assert_eq!(straight_flush_high(&cards), Some(6));
        cards[5] = "7D".parse().ok();
        assert_eq!(straight_flush_high(&cards), Some(7));
    }
}
