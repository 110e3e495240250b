/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;

/// A mutable [`RandomAccessGraph`] implementation based on a vector of
/// vectors.
///
/// Arcs can be added only in increasing successor order, which keeps the
/// successor lists sorted at all times. Use [`add_arcs`](Self::add_arcs) to
/// add arcs in arbitrary order.
///
/// The graph does not provide predecessors: to run algorithms needing them,
/// build a [`BidiCsrGraph`](crate::graphs::bidi_csr_graph::BidiCsrGraph)
/// with [`from_graph`](crate::graphs::bidi_csr_graph::BidiCsrGraph::from_graph).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph with `n` nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph and returns true if it is a new node.
    ///
    /// All nodes with smaller index that do not exist yet are added, too.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an arc to the graph.
    ///
    /// New arcs must be added in increasing successor order, or this method
    /// will panic.
    ///
    /// # Panics
    ///
    /// This method will panic:
    /// - if one of the given nodes is greater or equal than the number of nodes
    ///   in the graph;
    /// - if the successor is lesser than or equal to the current last successor
    ///   of the source node.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        let succ = &mut self.succ[u];
        if let Some(&last) = succ.last() {
            if v <= last {
                panic!(
                    "Error adding arc ({u}, {v}): successor is not increasing; the last arc inserted was ({u}, {last})"
                );
            }
        }
        succ.push(v);
        self.num_arcs += 1;
    }

    /// Add arcs from an [`IntoIterator`], adding new nodes as needed.
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying an arc.
    /// Arcs are sorted before insertion and duplicates are discarded.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        let mut arcs = arcs.into_iter().collect::<Vec<_>>();
        arcs.sort_unstable();
        arcs.dedup();
        for (u, v) in arcs {
            self.add_node(u);
            self.add_node(v);
            // Arcs already present (from previous calls) are skipped
            if self.succ[u].binary_search(&v).is_ok() {
                continue;
            }
            if self.succ[u].last().is_some_and(|&last| last > v) {
                let pos = self.succ[u].partition_point(|&x| x < v);
                self.succ[u].insert(pos, v);
                self.num_arcs += 1;
            } else {
                self.add_arc(u, v);
            }
        }
    }

    /// Creates a new graph from an [`IntoIterator`].
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying an arc.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_arcs(arcs);
        g
    }
}

impl RandomAccessGraph for VecGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> &[usize] {
        &self.succ[node_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_arcs_sorts_and_dedups() {
        let g = VecGraph::from_arcs([(0, 2), (0, 1), (2, 0), (0, 2), (1, 1)]);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.successors(0), &[1, 2]);
        assert_eq!(g.successors(1), &[1]);
        assert_eq!(g.successors(2), &[0]);
    }

    #[test]
    fn test_add_arcs_twice() {
        let mut g = VecGraph::from_arcs([(0, 3), (1, 2)]);
        g.add_arcs([(0, 1), (0, 3), (3, 0)]);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.successors(0), &[1, 3]);
        assert_eq!(g.successors(3), &[0]);
    }

    #[test]
    #[should_panic(expected = "successor is not increasing")]
    fn test_add_arc_not_increasing() {
        let mut g = VecGraph::empty(3);
        g.add_arc(0, 2);
        g.add_arc(0, 1);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_add_arc_missing_node() {
        let mut g = VecGraph::empty(2);
        g.add_arc(0, 2);
    }
}
