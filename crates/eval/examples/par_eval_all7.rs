// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Scores every 7 cards hand from parallel tasks.
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7 -- 8
// ```
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::*;

fn main() {
    const NUM_RANKS: usize = 9;

    let num_tasks = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(4)
        .max(1);

    // Create per task counters to avoid contention.
    let task_counters = (0..num_tasks)
        .map(|_| std::array::from_fn::<_, NUM_RANKS, _>(|_| AtomicU64::new(0)))
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_for_each(num_tasks, 7, |task_id, hand| {
        if let Ok(score) = best_hand(hand) {
            task_counters[task_id][score.rank() as usize].fetch_add(1, Ordering::Relaxed);
        }
    });

    let elapsed = now.elapsed().as_secs_f64();

    let counts = HandRank::ranks()
        .map(|rank| {
            let count = task_counters
                .iter()
                .map(|counters| counters[rank as usize].load(Ordering::Relaxed))
                .sum::<u64>();
            (rank, count)
        })
        .collect::<Vec<_>>();

    let total = counts.iter().map(|(_, count)| count).sum::<u64>();
    println!("Tasks            {num_tasks}");
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (rank, count) in counts {
        println!("{:<17}{count}", format!("{rank}:"));
    }
}
