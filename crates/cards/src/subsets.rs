// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets enumeration.
//!
//! Walks all the k-combinations of `0..n` for `k <= 7` using Algorithm L from
//! TAOCP 4a, each combination is an ascending set of indices. A walk can start
//! from any position using the combinatorial number system, this is used to
//! split a walk across parallel tasks.
use std::ops::Deref;

/// The maximum subset size.
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 52] {
    let mut t = [[0u32; 8]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");

    if n < k || n == 0 {
        0
    } else {
        NCKS[n.saturating_sub(1)][k] as usize
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; MAX_K] {
    let mut out = [0; MAX_K];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// A k-subset of indices in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subset {
    idx: [usize; MAX_K],
    len: usize,
}

impl Subset {
    /// The subset indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.idx[..self.len]
    }
}

impl Deref for Subset {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Iterator over the k-subsets of `0..n`.
///
/// ```
/// # use showdown_cards::KSubsets;
/// let subsets = KSubsets::new(4, 3).map(|s| s.to_vec()).collect::<Vec<_>>();
/// assert_eq!(subsets, [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct KSubsets {
    // Algorithm L state, c[1..=k] holds the current subset with the
    // sentinels c[k + 1] = n and c[k + 2] = 0.
    c: [usize; MAX_K + 3],
    k: usize,
    done: bool,
}

impl KSubsets {
    /// Creates an iterator over all the k-subsets of `0..n`.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn new(n: usize, k: usize) -> Self {
        assert!((1..=MAX_K).contains(&k), "1 <= k <= 7");

        let mut c = [0; MAX_K + 3];
        for (j, v) in c.iter_mut().enumerate().take(k + 1).skip(1) {
            *v = j - 1;
        }
        c[k + 1] = n;

        Self { c, k, done: k > n }
    }

    /// Creates an iterator over the k-subsets of `0..n` that starts from the
    /// nth subset.
    ///
    /// Panics if k is not 1 <= k <= 7 or n > 52.
    pub fn from_nth(n: usize, k: usize, nth: usize) -> Self {
        let mut subsets = Self::new(n, k);
        if nth >= nck(n, k) {
            subsets.done = true;
        } else {
            let ks = nth_ksubset(nth, k);
            subsets.c[1..=k].copy_from_slice(&ks[..k]);
        }

        subsets
    }
}

impl Iterator for KSubsets {
    type Item = Subset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let k = self.k;
        let mut idx = [0; MAX_K];
        idx[..k].copy_from_slice(&self.c[1..=k]);

        let c = &mut self.c;
        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            self.done = true;
        } else {
            c[j] += 1;
        }

        Some(Subset { idx, len: k })
    }
}
