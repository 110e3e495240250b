/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel triangle counting by sorted-list intersection.
//!
//! For each arc *u* → *v* with *u* ≠ *v*, we count the nodes *w* ∉ {*u*, *v*}
//! such that *w* → *u* and *v* → *w*, that is, the intersection of the
//! predecessors of *u* and the successors of *v*. Since neighbor lists are
//! sorted, the intersection is computed by a linear two-pointer merge.
//!
//! A directed 3-cycle is found once from each of its three arcs, so the
//! [total](TriangleCount::total) is three times the number of
//! [unique](TriangleCount::unique) triangles.
//!
//! Nodes are split among threads by [`partition`]; each thread accumulates
//! into a private counter, so the result does not depend on the number of
//! threads.

use crate::utils::{WorkerStats, partition};
use dsi_progress_logger::{ConcurrentProgressLog, ProgressLog, no_logging};
use pgraph::traits::BidiGraph;
use std::cmp::Ordering;
use std::ops::Range;
use std::time::Instant;

/// Returns the number of elements common to two strictly increasing
/// sequences, excluding `u` and `v`.
///
/// If `u == v` the arc is a loop and the result is zero.
///
/// # Examples
///
/// ```
/// use pgraph_algo::triangles::intersection_count;
///
/// assert_eq!(intersection_count(&[1, 3, 5, 7], &[0, 3, 4, 7], 0, 1), 2);
/// assert_eq!(intersection_count(&[1, 3, 5, 7], &[0, 3, 4, 7], 3, 1), 1);
/// assert_eq!(intersection_count(&[1, 3], &[1, 3], 2, 2), 0);
/// ```
pub fn intersection_count(first: &[usize], second: &[usize], u: usize, v: usize) -> u64 {
    if u == v {
        return 0;
    }
    let (mut i, mut j) = (0, 0);
    let mut count = 0;
    while i < first.len() && j < second.len() {
        match first[i].cmp(&second[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                let w = first[i];
                if w != u && w != v {
                    count += 1;
                }
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Returns the triangle contributions of the arcs leaving the nodes in
/// `range`.
pub fn count_range(graph: &impl BidiGraph, range: Range<usize>) -> u64 {
    count_range_with_logging(graph, range, no_logging![])
}

/// Returns the triangle contributions of the arcs leaving the nodes in
/// `range`, logging processed nodes.
pub fn count_range_with_logging(
    graph: &impl BidiGraph,
    range: Range<usize>,
    pl: &mut impl ProgressLog,
) -> u64 {
    let mut count = 0;
    for u in range {
        let preds = graph.predecessors(u);
        for &v in graph.successors(u) {
            count += intersection_count(preds, graph.successors(v), u, v);
        }
        pl.light_update();
    }
    count
}

/// The result of a triangle-counting thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCount {
    /// The range and timing of the thread.
    pub stats: WorkerStats,
    /// The sum of the contributions of the arcs leaving the nodes of the
    /// thread.
    pub count: u64,
}

/// Counts triangles on a fixed number of threads.
///
/// # Examples
///
/// ```
/// use pgraph::prelude::*;
/// use pgraph_algo::triangles::TriangleCount;
///
/// let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 2), (2, 0)]);
/// let mut tc = TriangleCount::new(&graph);
/// tc.num_threads(2).run();
/// assert_eq!(tc.total(), 3);
/// assert_eq!(tc.unique(), 1);
/// ```
pub struct TriangleCount<'a, G: BidiGraph + Sync> {
    graph: &'a G,
    num_threads: usize,
    workers: Vec<WorkerCount>,
}

impl<G: BidiGraph + Sync> std::fmt::Debug for TriangleCount<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangleCount")
            .field("num_threads", &self.num_threads)
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl<'a, G: BidiGraph + Sync> TriangleCount<'a, G> {
    /// Creates a new triangle count using as many threads as there are
    /// logical CPUs.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            num_threads: num_cpus::get(),
            workers: Vec::new(),
        }
    }

    /// Sets the number of threads.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads` is zero.
    pub fn num_threads(&mut self, num_threads: usize) -> &mut Self {
        assert!(num_threads > 0, "The number of threads must be positive");
        self.num_threads = num_threads;
        self
    }

    /// Returns the results of the threads of the last call to
    /// [`run`](Self::run), in thread order.
    pub fn workers(&self) -> &[WorkerCount] {
        &self.workers
    }

    /// Returns the sum of the counts of all threads.
    pub fn total(&self) -> u64 {
        self.workers.iter().map(|w| w.count).sum()
    }

    /// Returns the number of distinct directed 3-cycles, that is,
    /// [`total`](Self::total) divided by three.
    pub fn unique(&self) -> u64 {
        self.total() / 3
    }

    /// Counts triangles.
    pub fn run(&mut self) {
        self.run_with_logging(no_logging![]);
    }

    /// Counts triangles, logging processed nodes to clones of `cpl`.
    pub fn run_with_logging(&mut self, cpl: &mut impl ConcurrentProgressLog) {
        let n = self.graph.num_nodes();
        let graph = self.graph;
        let num_threads = self.num_threads;

        cpl.item_name("node");
        cpl.expected_updates(Some(n));
        cpl.start("Counting triangles...");

        let cpl_ref = &*cpl;
        self.workers = std::thread::scope(|scope| {
            let handles = partition(n, num_threads)
                .into_iter()
                .enumerate()
                .map(|(id, range)| {
                    scope.spawn(move || {
                        let mut local_cpl = cpl_ref.clone();
                        let start = Instant::now();
                        let count = count_range_with_logging(graph, range.clone(), &mut local_cpl);
                        let elapsed = start.elapsed();
                        log::debug!("Thread {id} found {count} triangle arcs in {elapsed:?}");
                        WorkerCount {
                            stats: WorkerStats { id, range, elapsed },
                            count,
                        }
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        });

        cpl.done();
        log::info!("Triangles: {} ({} unique)", self.total(), self.unique());
    }
}
