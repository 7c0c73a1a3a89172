// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and dealing.
use rand::prelude::*;

use crate::{Card, KSubsets, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck.
///
/// The deck is a stack, cards are dealt and burned from the top, that is the
/// end of the cards sequence. Dealing from an empty deck returns `None`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, missing cards are `None` if the deck runs out.
    pub fn deal_n(&mut self, n: usize) -> Vec<Option<Card>> {
        (0..n).map(|_| self.deal()).collect()
    }

    /// Discards up to `n` cards from the top of the deck.
    pub fn burn(&mut self, n: usize) {
        let len = self.cards.len().saturating_sub(n);
        self.cards.truncate(len);
    }

    /// Deals two hole cards to each player.
    ///
    /// Cards are dealt one at a time to each player in turn, then the second
    /// card to each player.
    pub fn deal_players(&mut self, players: usize) -> Vec<[Option<Card>; 2]> {
        let mut hands = vec![[None; 2]; players];
        for round in 0..2 {
            for hand in hands.iter_mut() {
                hand[round] = self.deal();
            }
        }

        hands
    }

    /// Burns one card and deals the flop.
    pub fn deal_flop(&mut self) -> [Option<Card>; 3] {
        self.burn(1);
        [self.deal(), self.deal(), self.deal()]
    }

    /// Burns one card and deals the turn.
    pub fn deal_turn(&mut self) -> Option<Card> {
        self.burn(1);
        self.deal()
    }

    /// Burns one card and deals the river.
    pub fn deal_river(&mut self) -> Option<Card> {
        self.burn(1);
        self.deal()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        for subset in KSubsets::new(self.cards.len(), k) {
            for (pos, &idx) in subset.iter().enumerate() {
                h[pos] = self.cards[idx];
            }

            f(&h[0..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn deck_order() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(cards[0], card("2S"));
        assert_eq!(cards[12], card("AS"));
        assert_eq!(cards[13], card("2H"));
        assert_eq!(cards[51], card("AD"));

        let unique = cards.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn deck_shuffle() {
        let mut rng = StdRng::seed_from_u64(101);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);

        let mut cards = HashSet::default();
        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);

        // Same seed same order.
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert!(d1.into_iter().eq(d2));
    }

    #[test]
    fn deal_from_top() {
        let mut deck = Deck::default();
        assert_eq!(deck.deal(), Some(card("AD")));
        assert_eq!(deck.deal_n(2), vec![Some(card("KD")), Some(card("QD"))]);
        assert_eq!(deck.count(), 49);

        deck.burn(1);
        assert_eq!(deck.deal(), Some(card("TD")));

        // Burning more cards than available empties the deck.
        deck.burn(100);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(deck.deal_n(3), vec![None, None, None]);
    }

    #[test]
    fn deal_streets() {
        let mut deck = Deck::default();

        let players = deck.deal_players(3);
        assert_eq!(
            players,
            vec![
                [Some(card("AD")), Some(card("JD"))],
                [Some(card("KD")), Some(card("TD"))],
                [Some(card("QD")), Some(card("9D"))],
            ]
        );

        // Burn 8D.
        let flop = deck.deal_flop();
        assert_eq!(flop, [Some(card("7D")), Some(card("6D")), Some(card("5D"))]);

        // Burn 4D.
        assert_eq!(deck.deal_turn(), Some(card("3D")));

        // Burn 2D.
        assert_eq!(deck.deal_river(), Some(card("AC")));
        assert_eq!(deck.count(), Deck::SIZE - 14);
    }

    #[test]
    fn deal_from_short_deck() {
        let mut deck = Deck::default();
        deck.burn(Deck::SIZE - 3);

        let players = deck.deal_players(2);
        assert_eq!(
            players,
            vec![
                [Some(card("4S")), Some(card("2S"))],
                [Some(card("3S")), None],
            ]
        );

        assert_eq!(deck.deal_flop(), [None, None, None]);
        assert_eq!(deck.deal_turn(), None);
        assert_eq!(deck.deal_river(), None);
        assert!(deck.deal_players(0).is_empty());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);
    }

    #[test]
    #[ignore]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 99_884_400);
    }
}
