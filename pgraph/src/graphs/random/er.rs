/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graphs::bidi_csr_graph::BidiCsrGraph;

/// Provides a sequential implementation of Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// Arcs are returned by [`arcs`](Self::arcs) in lexicographical order. The
/// time required to enumerate them is quadratic in `n`, so if you plan to
/// reuse the graph you should [materialize it](Self::to_bidi_csr).
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Returns an iterator over the arcs of the graph.
    ///
    /// Two calls return the same arcs.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (n, p) = (self.n, self.p);
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| (u, v)))
            .filter(|&(u, v)| u != v)
            .filter(move |_| rng.random_bool(p))
    }

    /// Materializes the graph as a [`BidiCsrGraph`].
    pub fn to_bidi_csr(&self) -> BidiCsrGraph {
        BidiCsrGraph::from_arcs(Some(self.n), self.arcs())
    }
}
