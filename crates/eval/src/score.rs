// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scores.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all the hand ranks from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The number of tiebreak values for a hand of this rank.
    pub const fn tiebreak_len(self) -> usize {
        match self {
            HandRank::HighCard | HandRank::Flush => 5,
            HandRank::OnePair => 4,
            HandRank::TwoPair | HandRank::ThreeOfAKind => 3,
            HandRank::FullHouse | HandRank::FourOfAKind => 2,
            HandRank::Straight | HandRank::StraightFlush => 1,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// Tiebreak values for hands with the same rank.
///
/// Values are compared in order, the first value has the highest priority.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Tiebreak {
    values: [u8; Tiebreak::CAPACITY],
    len: u8,
}

impl Tiebreak {
    /// The maximum number of values.
    pub const CAPACITY: usize = 5;

    /// The tiebreak values.
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    /// Appends a value.
    ///
    /// Panics if the tiebreak is full.
    pub(crate) fn push(&mut self, value: u8) {
        assert!((self.len as usize) < Self::CAPACITY, "tiebreak is full");
        self.values[self.len as usize] = value;
        self.len += 1;
    }
}

impl FromIterator<u8> for Tiebreak {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut tiebreak = Tiebreak::default();
        for v in iter {
            tiebreak.push(v);
        }

        tiebreak
    }
}

impl TryFrom<Vec<u8>> for Tiebreak {
    type Error = String;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        if values.len() > Self::CAPACITY {
            return Err(format!(
                "tiebreak has {} values, at most {} allowed",
                values.len(),
                Self::CAPACITY
            ));
        }

        Ok(values.into_iter().collect())
    }
}

impl From<Tiebreak> for Vec<u8> {
    fn from(tiebreak: Tiebreak) -> Self {
        tiebreak.as_slice().to_vec()
    }
}

impl PartialEq for Tiebreak {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Tiebreak {}

impl PartialOrd for Tiebreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tiebreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl fmt::Display for Tiebreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (pos, v) in self.as_slice().iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

/// A hand score.
///
/// Scores are ordered by rank first and then by tiebreak values, a greater
/// score wins and equal scores tie.
///
/// ```
/// # use showdown_eval::{HandRank, Score};
/// let s1 = Score::new(HandRank::TwoPair, &[9, 4, 2]);
/// let s2 = Score::new(HandRank::TwoPair, &[9, 5, 13]);
/// assert!(s2 > s1);
/// assert_eq!(s2.to_string(), "Two Pair (9, 5, 13)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "ScoreParts")]
pub struct Score {
    rank: HandRank,
    tiebreak: Tiebreak,
}

impl Score {
    /// Creates a score from a rank and its tiebreak values.
    ///
    /// Panics if the number of values doesn't match the rank.
    pub fn new(rank: HandRank, values: &[u8]) -> Self {
        assert_eq!(
            values.len(),
            rank.tiebreak_len(),
            "{rank} takes {} tiebreak values",
            rank.tiebreak_len()
        );

        Self::from_parts(rank, values.iter().copied().collect())
    }

    pub(crate) fn from_parts(rank: HandRank, tiebreak: Tiebreak) -> Self {
        debug_assert_eq!(tiebreak.as_slice().len(), rank.tiebreak_len());
        Self { rank, tiebreak }
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak values.
    pub fn tiebreak(&self) -> &Tiebreak {
        &self.tiebreak
    }
}

/// Deserialized score fields, checked against the rank before building a score.
#[derive(Deserialize)]
struct ScoreParts {
    rank: HandRank,
    tiebreak: Tiebreak,
}

impl TryFrom<ScoreParts> for Score {
    type Error = String;

    fn try_from(parts: ScoreParts) -> Result<Self, Self::Error> {
        let ScoreParts { rank, tiebreak } = parts;
        if tiebreak.as_slice().len() != rank.tiebreak_len() {
            return Err(format!(
                "{rank} takes {} tiebreak values, got {}",
                rank.tiebreak_len(),
                tiebreak.as_slice().len()
            ));
        }

        Ok(Self { rank, tiebreak })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.tiebreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 9);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandRank::StraightFlush as u8, 8);
        assert_eq!(HandRank::HighCard as u8, 0);
    }

    #[test]
    fn tiebreak_order() {
        let t1 = [9, 5, 2].into_iter().collect::<Tiebreak>();
        let t2 = [9, 4, 14].into_iter().collect::<Tiebreak>();
        assert!(t1 > t2);
        assert_eq!(t1, [9, 5, 2].into_iter().collect::<Tiebreak>());
        assert_eq!(t1.cmp(&t1), Ordering::Equal);
    }

    #[test]
    #[should_panic]
    fn tiebreak_overflow() {
        let _ = (0..6).collect::<Tiebreak>();
    }

    #[test]
    fn score_order() {
        let flush = Score::new(HandRank::Flush, &[7, 5, 4, 3, 2]);
        let straight = Score::new(HandRank::Straight, &[14]);
        assert!(flush > straight);

        let s1 = Score::new(HandRank::OnePair, &[10, 14, 8, 3]);
        let s2 = Score::new(HandRank::OnePair, &[10, 14, 8, 2]);
        assert!(s1 > s2);
        assert_eq!(s1, Score::new(HandRank::OnePair, &[10, 14, 8, 3]));
    }

    #[test]
    #[should_panic]
    fn score_shape() {
        let _ = Score::new(HandRank::FullHouse, &[7, 7, 2]);
    }

    #[test]
    fn score_to_string() {
        let s = Score::new(HandRank::StraightFlush, &[14]);
        assert_eq!(s.to_string(), "Straight Flush (14)");

        let s = Score::new(HandRank::HighCard, &[13, 11, 8, 4, 2]);
        assert_eq!(s.to_string(), "High Card (13, 11, 8, 4, 2)");

        let s = Score::new(HandRank::ThreeOfAKind, &[6, 12, 3]);
        assert_eq!(s.to_string(), "Three of a Kind (6, 12, 3)");

        let names = HandRank::ranks().map(|r| r.to_string()).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "High Card",
                "One Pair",
                "Two Pair",
                "Three of a Kind",
                "Straight",
                "Flush",
                "Full House",
                "Four of a Kind",
                "Straight Flush"
            ]
        );
    }

    #[test]
    fn score_serde() {
        let s = Score::new(HandRank::FullHouse, &[12, 3]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"rank":"FullHouse","tiebreak":[12,3]}"#);
        assert_eq!(serde_json::from_str::<Score>(&json).unwrap(), s);

        let bad = r#"{"rank":"Flush","tiebreak":[9,8,7,6,5,4]}"#;
        assert!(serde_json::from_str::<Score>(bad).is_err());

        // Tiebreak length must match the rank.
        let bad = r#"{"rank":"FullHouse","tiebreak":[]}"#;
        let err = serde_json::from_str::<Score>(bad).unwrap_err();
        assert!(err.to_string().contains("Full House takes 2 tiebreak values, got 0"));

        let bad = r#"{"rank":"Straight","tiebreak":[9,8]}"#;
        assert!(serde_json::from_str::<Score>(bad).is_err());
    }
}
