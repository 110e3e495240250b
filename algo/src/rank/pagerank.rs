/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel push-style PageRank.
//!
//! Every node starts with rank [`INIT`](Rank::INIT). At each iteration,
//! every node *u* pushes its current rank divided by its outdegree to each of
//! its successors; then each node *v* computes its new rank by applying the
//! [rank formula](Rank::page_rank) to the sum of the contributions it
//! received. Dangling nodes push nothing.
//!
//! # Parallelism
//!
//! Nodes are split into contiguous ranges by [`partition`], and each range is
//! assigned to a thread for the whole computation. The state of the
//! computation is a [`RankState`], that is, two arrays of atomic cells: `curr`,
//! containing the ranks of the previous iteration, and `next`, accumulating
//! contributions. Each iteration is made of two phases separated by a
//! [`Barrier`]:
//!
//! 1. in the _push_ phase, each thread scans its nodes and adds contributions
//!    to the `next` cells of their successors, which may belong to any range;
//!    additions use a compare-and-swap loop, so no contribution is lost;
//! 2. in the _finalize_ phase, each thread applies the rank formula to the
//!    `next` cells of its own nodes, copies the result into `curr`, and resets
//!    `next` to zero.
//!
//! A second barrier ends the iteration, so every push of an iteration happens
//! before every finalization of the same iteration, which in turn happens
//! before every push of the next one.
//!
//! The order in which concurrent contributions are added to a cell is not
//! specified: with floating-point representations the last bits of the result
//! may depend on the number of threads and on scheduling.
//!
//! # Stopping
//!
//! The computation always performs exactly [`max_iter`](PageRank::max_iter)
//! iterations: the [change](Rank::change) between successive ranks is not
//! used to stop early.

use crate::rank::numeric::{AtomicRank, Rank};
use crate::sync::Barrier;
use crate::utils::{WorkerStats, partition};
use dsi_progress_logger::{ConcurrentProgressLog, ProgressLog, no_logging};
use pgraph::traits::RandomAccessGraph;
use std::ops::Range;
use std::time::Instant;

/// The shared state of a PageRank computation.
///
/// The state contains, for each node, a cell with its current rank and a cell
/// accumulating the contributions of the current iteration. The two phases of
/// an iteration are exposed as [`push`](Self::push) and
/// [`finalize`](Self::finalize), which can be called concurrently on disjoint
/// ranges of nodes.
pub struct RankState<R: Rank> {
    curr: Box<[R::Atomic]>,
    next: Box<[R::Atomic]>,
}

impl<R: Rank> std::fmt::Debug for RankState<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankState")
            .field("num_nodes", &self.curr.len())
            .finish_non_exhaustive()
    }
}

impl<R: Rank> RankState<R> {
    /// Creates a new state for `n` nodes, with current rank
    /// [`INIT`](Rank::INIT) and no contributions.
    pub fn new(n: usize) -> Self {
        Self {
            curr: (0..n).map(|_| R::Atomic::new(R::INIT)).collect(),
            next: (0..n).map(|_| R::Atomic::new(R::ZERO)).collect(),
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.curr.len()
    }

    /// Returns true if the state has no nodes.
    pub fn is_empty(&self) -> bool {
        self.curr.is_empty()
    }

    /// Pushes the current rank of each node in `range` to its successors.
    ///
    /// Each successor receives the current rank of the node divided by its
    /// outdegree, added atomically to its `next` cell.
    pub fn push(&self, graph: &impl RandomAccessGraph, range: Range<usize>) {
        for u in range {
            let outdegree = graph.outdegree(u);
            if outdegree == 0 {
                continue;
            }
            let share = self.curr[u].load().share(outdegree);
            for &v in graph.successors(u) {
                self.next[v].fetch_add(share);
            }
        }
    }

    /// Computes the new rank of each node in `range` from its accumulated
    /// contributions, and resets the contributions to zero.
    ///
    /// Nodes in `range` must not be the target of concurrent
    /// [pushes](Self::push).
    pub fn finalize(&self, range: Range<usize>) {
        for v in range {
            let rank = R::page_rank(self.next[v].load());
            self.curr[v].store(rank);
            self.next[v].store(R::ZERO);
        }
    }

    /// Returns a copy of the current ranks.
    pub fn curr(&self) -> Vec<R> {
        self.curr.iter().map(|cell| cell.load()).collect()
    }

    /// Returns a copy of the contributions accumulated so far.
    pub fn next(&self) -> Vec<R> {
        self.next.iter().map(|cell| cell.load()).collect()
    }

    /// Returns the sum of the current ranks.
    pub fn sum(&self) -> R {
        self.curr.iter().fold(R::ZERO, |sum, cell| sum + cell.load())
    }

    /// Consumes the state, returning the current ranks.
    pub fn into_ranks(self) -> Box<[R]> {
        self.curr.iter().map(|cell| cell.load()).collect()
    }
}

/// Computes PageRank with a fixed number of push iterations on a fixed
/// number of threads.
///
/// The struct is configured via setters and then executed via
/// [`run`](Self::run). After completion the rank vector is available via the
/// [`rank`](Self::rank) method, and per-thread timings via the
/// [`workers`](Self::workers) method.
///
/// The type parameter `R` selects the [numeric representation](Rank) of
/// ranks; it defaults to `f32`.
///
/// # Examples
///
/// ```
/// use pgraph::prelude::*;
/// use pgraph_algo::rank::PageRank;
///
/// let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 2), (2, 0), (0, 2)]);
///
/// let mut pr = PageRank::<_, f64>::new(&graph);
/// pr.num_threads(2).max_iter(20);
/// pr.run();
///
/// assert_eq!(pr.rank().len(), 3);
/// assert_eq!(pr.workers().len(), 2);
/// // There are no dangling nodes, so the sum of ranks is preserved
/// assert!((pr.rank_sum() - 3.0).abs() < 1E-9);
/// ```
pub struct PageRank<'a, G: RandomAccessGraph + Sync, R: Rank = f32> {
    graph: &'a G,
    num_threads: usize,
    max_iter: usize,

    rank: Box<[R]>,
    workers: Vec<WorkerStats>,
    iterations: usize,
}

impl<G: RandomAccessGraph + Sync, R: Rank> std::fmt::Debug for PageRank<'_, G, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRank")
            .field("representation", &R::NAME)
            .field("num_threads", &self.num_threads)
            .field("max_iter", &self.max_iter)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

impl<'a, G: RandomAccessGraph + Sync, R: Rank> PageRank<'a, G, R> {
    /// The default number of iterations.
    pub const DEFAULT_MAX_ITER: usize = 10;

    /// Creates a new PageRank computation.
    ///
    /// By default, the computation uses as many threads as there are logical
    /// CPUs and performs [`DEFAULT_MAX_ITER`](Self::DEFAULT_MAX_ITER)
    /// iterations.
    pub fn new(graph: &'a G) -> Self {
        let n = graph.num_nodes();
        Self {
            graph,
            num_threads: num_cpus::get(),
            max_iter: Self::DEFAULT_MAX_ITER,
            rank: vec![R::INIT; n].into_boxed_slice(),
            workers: Vec::new(),
            iterations: 0,
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

    /// Sets the number of iterations.
    pub fn max_iter(&mut self, max_iter: usize) -> &mut Self {
        self.max_iter = max_iter;
        self
    }

    /// Returns the rank vector.
    ///
    /// Before calling [`run`](Self::run), every rank is
    /// [`INIT`](Rank::INIT).
    pub fn rank(&self) -> &[R] {
        &self.rank
    }

    /// Returns the sum of the ranks.
    pub fn rank_sum(&self) -> R {
        self.rank.iter().fold(R::ZERO, |sum, &rank| sum + rank)
    }

    /// Returns the timings of the threads of the last call to
    /// [`run`](Self::run), in thread order.
    pub fn workers(&self) -> &[WorkerStats] {
        &self.workers
    }

    /// Returns the number of iterations performed by the last call to
    /// [`run`](Self::run).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs the PageRank computation.
    pub fn run(&mut self) {
        self.run_with_logging(no_logging![]);
    }

    /// Runs the PageRank computation, logging progress.
    ///
    /// Each thread logs to a clone of `cpl` the nodes it finalizes. Options
    /// of `cpl` will be preserved, making thus possible to customize the logs.
    pub fn run_with_logging(&mut self, cpl: &mut impl ConcurrentProgressLog) {
        let n = self.graph.num_nodes();
        let num_threads = self.num_threads;
        let max_iter = self.max_iter;

        log::info!("Representation: {}", R::NAME);
        log::info!("Threads: {}", num_threads);
        log::info!("Iterations: {}", max_iter);

        let state = RankState::<R>::new(n);
        let barrier = Barrier::new(num_threads);
        let graph = self.graph;

        cpl.item_name("node");
        cpl.expected_updates(Some(n * max_iter));
        cpl.start(format!("Computing PageRank ({max_iter} iterations)..."));

        let cpl_ref = &*cpl;
        let workers = std::thread::scope(|scope| {
            let handles = partition(n, num_threads)
                .into_iter()
                .enumerate()
                .map(|(id, range)| {
                    let (state, barrier) = (&state, &barrier);
                    scope.spawn(move || {
                        let mut local_cpl = cpl_ref.clone();
                        let start = Instant::now();
                        for _ in 0..max_iter {
                            state.push(graph, range.clone());
                            barrier.wait();
                            state.finalize(range.clone());
                            barrier.wait();
                            local_cpl.update_with_count(range.len());
                        }
                        let elapsed = start.elapsed();
                        log::debug!(
                            "Thread {id} completed nodes [{}..{}) in {:?}",
                            range.start,
                            range.end,
                            elapsed
                        );
                        WorkerStats { id, range, elapsed }
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        cpl.done();

        self.rank = state.into_ranks();
        self.workers = workers;
        self.iterations = max_iter;

        log::info!("Sum of ranks: {}", self.rank_sum());
    }
}
