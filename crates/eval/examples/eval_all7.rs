// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Scores every 7 cards hand and prints the number of hands for each rank.
//
// ```bash
// $ cargo r --release --example eval_all7
// ```
use std::time::Instant;

use showdown_eval::*;

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(7, |hand| match best_hand(hand) {
        Ok(score) => counts[score.rank() as usize] += 1,
        Err(e) => eprintln!("{e}"),
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }
}
