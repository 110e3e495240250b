/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use pgraph_algo::prelude::*;
use pgraph_algo::rank::AtomicRank;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_partition_covers() {
    for n in 0..60 {
        for w in 1..12 {
            let ranges = partition(n, w);
            assert_eq!(ranges.len(), w);
            assert_eq!(ranges[0].start, 0);
            assert_eq!(ranges[w - 1].end, n);
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "n = {n}, w = {w}");
            }
            assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), n);
        }
    }
}

#[test]
fn test_barrier_phases() {
    const THREADS: usize = 6;
    const ROUNDS: usize = 50;
    let barrier = Barrier::new(THREADS);
    let counter = AtomicUsize::new(0);
    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for round in 0..ROUNDS {
                    counter.fetch_add(1, Ordering::Relaxed);
                    barrier.wait();
                    // Everybody has incremented for this round
                    assert_eq!(counter.load(Ordering::Relaxed), (round + 1) * THREADS);
                    barrier.wait();
                }
            });
        }
    });
    assert_eq!(counter.load(Ordering::Relaxed), THREADS * ROUNDS);
}

#[test]
fn test_concurrent_accumulation() {
    const THREADS: usize = 16;
    const PUSHES: usize = 10_000;

    let cell = <i64 as Rank>::Atomic::new(0);
    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PUSHES {
                    AtomicRank::fetch_add(&cell, 3);
                }
            });
        }
    });
    assert_eq!(AtomicRank::load(&cell), (3 * THREADS * PUSHES) as i64);

    // 0.5 is exactly representable, and so are all partial sums
    let cell = <f64 as Rank>::Atomic::new(0.0);
    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PUSHES {
                    cell.fetch_add(0.5);
                }
            });
        }
    });
    assert_eq!(cell.load(), (THREADS * PUSHES) as f64 * 0.5);
}
