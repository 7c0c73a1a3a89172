// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::{prelude::*, rngs::StdRng};
use std::thread;

use super::{Card, Deck, KSubsets, Rank, Suit};
use crate::nck;

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let hands_per_task = nck(n, k).div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                let f = &f;
                s.spawn(move || {
                    let mut h = [Card::new(Rank::Ace, Suit::Diamonds); 7];
                    for subset in KSubsets::from_nth(n, k, start).take(hands_per_task) {
                        for (pos, &idx) in subset.iter().enumerate() {
                            h[pos] = self.cards[idx];
                        }

                        f(task_id, &h[..k]);
                    }
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut h = [Card::new(Rank::Ace, Suit::Diamonds); 7];
                    let mut rng = StdRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                            h[pos] = *c;
                        }

                        f(task_id, &h[..k]);
                    }
                });
            }
        });
    }
}
