// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A dealt round and its showdown.
use showdown_eval::{BestHand, Card, Deck, Result, best_hand_with_cards};
use std::fmt;

/// The cards dealt in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The players hole cards.
    pub players: Vec<[Option<Card>; 2]>,
    /// The flop, turn, and river cards.
    pub board: [Option<Card>; 5],
}

impl Round {
    /// Deals a round from the deck.
    ///
    /// Deals the hole cards to each player and the board cards with a burn
    /// card before the flop, the turn, and the river.
    pub fn deal(deck: &mut Deck, players: usize) -> Self {
        let players = deck.deal_players(players);
        let [f1, f2, f3] = deck.deal_flop();
        let turn = deck.deal_turn();
        let river = deck.deal_river();

        Self {
            players,
            board: [f1, f2, f3, turn, river],
        }
    }

    /// Scores each player hand and finds the winners.
    pub fn showdown(&self) -> Result<Showdown> {
        let hands = self
            .players
            .iter()
            .enumerate()
            .map(|(player, [c1, c2])| {
                let mut cards = [None; 7];
                cards[0] = *c1;
                cards[1] = *c2;
                cards[2..].copy_from_slice(&self.board);

                best_hand_with_cards(&cards).map(|best| PlayerHand { player, best })
            })
            .collect::<Result<Vec<_>>>()?;

        let top = hands.iter().map(|h| h.best.score()).max();
        let winners = hands
            .iter()
            .filter(|h| Some(h.best.score()) == top)
            .map(|h| h.player)
            .collect();

        Ok(Showdown { hands, winners })
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, card) in self.board.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }

            match card {
                Some(card) => write!(f, "{card}")?,
                None => write!(f, "--")?,
            }
        }

        Ok(())
    }
}

/// A player best hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHand {
    /// The player index.
    pub player: usize,
    /// The player best hand.
    pub best: BestHand,
}

/// The showdown result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    /// The players hands in seat order.
    pub hands: Vec<PlayerHand>,
    /// The players with the best hand, more than one for a split pot.
    pub winners: Vec<usize>,
}

impl Showdown {
    /// Returns the winning hand.
    pub fn winning_hand(&self) -> Option<&PlayerHand> {
        self.winners.first().and_then(|&w| self.hands.get(w))
    }

    /// Checks if more than one player has the best hand.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{EvalError, HandRank, Score, parse_cards};

    fn cards<const N: usize>(s: &str) -> [Option<Card>; N] {
        let cards = parse_cards(s).unwrap();
        std::array::from_fn(|i| cards.get(i).copied())
    }

    #[test]
    fn deal_round() {
        let mut deck = Deck::default();
        let round = Round::deal(&mut deck, 2);

        assert_eq!(round.players, vec![cards("AD QD"), cards("KD JD")]);
        assert_eq!(round.board, cards("9D 8D 7D 5D 3D"));
        assert_eq!(round.to_string(), "9D 8D 7D 5D 3D");
        assert_eq!(deck.count(), Deck::SIZE - 4 - 3 - 5);

        let showdown = round.showdown().unwrap();
        assert_eq!(showdown.winners, vec![0]);
        assert!(!showdown.is_split());

        let winner = showdown.winning_hand().unwrap();
        assert_eq!(
            winner.best.score(),
            Score::new(HandRank::Flush, &[14, 12, 9, 8, 7])
        );
        assert_eq!(
            showdown.hands[1].best.score(),
            Score::new(HandRank::Flush, &[13, 11, 9, 8, 7])
        );
    }

    #[test]
    fn split_pot() {
        let round = Round {
            players: vec![cards("2C 3D"), cards("4C 5D"), cards("AC 7D")],
            board: cards("TH JH QH KH AH"),
        };

        let showdown = round.showdown().unwrap();
        assert_eq!(showdown.winners, vec![0, 1, 2]);
        assert!(showdown.is_split());
        assert_eq!(
            showdown.winning_hand().unwrap().best.score(),
            Score::new(HandRank::StraightFlush, &[14])
        );
    }

    #[test]
    fn kicker_decides() {
        let round = Round {
            players: vec![cards("AC 3D"), cards("KC 7D"), cards("9S 2S")],
            board: cards("TH TS 8C 5H 4D"),
        };

        let showdown = round.showdown().unwrap();
        assert_eq!(showdown.winners, vec![0]);
        assert_eq!(showdown.hands[2].best.score().rank(), HandRank::OnePair);
    }

    #[test]
    fn short_board() {
        let round = Round {
            players: vec![cards("AC 3D"), cards("KC 7D")],
            board: cards("TH TS"),
        };

        assert!(matches!(
            round.showdown(),
            Err(EvalError::InvalidHandSize { count: 4, .. })
        ));

        let round = Round {
            players: vec![cards("AC 3D"), cards("KC 7D")],
            board: cards("TH TS 4C"),
        };
        assert_eq!(round.to_string(), "TH TS 4C -- --");
        assert_eq!(round.showdown().unwrap().winners, vec![0]);
    }
}
