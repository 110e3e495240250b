/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{BidiGraph, RandomAccessGraph};
use rayon::slice::ParallelSliceMut;

/// A compressed sparse-row graph storing both successors and predecessors.
///
/// For each direction, the graph stores the degree-cumulative function (DCF),
/// that is, the sequence of offsets indicating the start of the neighbors of
/// each node, and the concatenation of all neighbor lists. Neighbor lists are
/// strictly increasing by construction: duplicate arcs are removed, whereas
/// loops are preserved.
///
/// # Examples
///
/// ```
/// use pgraph::prelude::*;
///
/// let g = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 2), (2, 0), (0, 2)]);
/// assert_eq!(g.num_nodes(), 3);
/// assert_eq!(g.successors(0), &[1, 2]);
/// assert_eq!(g.predecessors(2), &[0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiCsrGraph {
    out_dcf: Box<[usize]>,
    successors: Box<[usize]>,
    in_dcf: Box<[usize]>,
    predecessors: Box<[usize]>,
}

impl Default for BidiCsrGraph {
    fn default() -> Self {
        Self {
            out_dcf: vec![0].into(),
            successors: vec![].into(),
            in_dcf: vec![0].into(),
            predecessors: vec![].into(),
        }
    }
}

/// Builds the DCF and the neighbor lists from arcs sorted by source and
/// target.
fn compress(num_nodes: usize, sorted_arcs: &[(usize, usize)]) -> (Box<[usize]>, Box<[usize]>) {
    let mut dcf = Vec::with_capacity(num_nodes + 1);
    dcf.push(0);
    let mut neighbors = Vec::with_capacity(sorted_arcs.len());
    let mut arcs = sorted_arcs.iter().peekable();
    for node in 0..num_nodes {
        while let Some(&(_, v)) = arcs.next_if(|(u, _)| *u == node) {
            neighbors.push(v);
        }
        dcf.push(neighbors.len());
    }
    debug_assert!(arcs.next().is_none());
    (dcf.into_boxed_slice(), neighbors.into_boxed_slice())
}

impl BidiCsrGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph from a list of arcs.
    ///
    /// The number of nodes is the maximum between `num_nodes` (if any) and
    /// one plus the largest node appearing in an arc, so isolated nodes at the
    /// end of the graph can be specified by passing a hint.
    ///
    /// Arcs are sorted in parallel using the current Rayon thread pool.
    ///
    /// # Panics
    ///
    /// This method will panic if an arc contains the node [`usize::MAX`], as
    /// the number of nodes would not be representable.
    pub fn from_arcs(
        num_nodes: Option<usize>,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut arcs = arcs.into_iter().collect::<Vec<_>>();
        let num_nodes = arcs
            .iter()
            .map(|&(u, v)| {
                u.max(v)
                    .checked_add(1)
                    .unwrap_or_else(|| panic!("Node {} is too large", usize::MAX))
            })
            .max()
            .unwrap_or(0)
            .max(num_nodes.unwrap_or(0));

        arcs.par_sort_unstable();
        arcs.dedup();
        let (out_dcf, successors) = compress(num_nodes, &arcs);

        for arc in arcs.iter_mut() {
            *arc = (arc.1, arc.0);
        }
        arcs.par_sort_unstable();
        let (in_dcf, predecessors) = compress(num_nodes, &arcs);

        log::debug!(
            "Built a bidirectional CSR graph with {} nodes and {} arcs",
            num_nodes,
            successors.len()
        );

        Self {
            out_dcf,
            successors,
            in_dcf,
            predecessors,
        }
    }

    /// Creates a new graph with the same nodes and arcs of the given graph.
    pub fn from_graph(graph: &impl RandomAccessGraph) -> Self {
        let num_nodes = graph.num_nodes();
        Self::from_arcs(
            Some(num_nodes),
            (0..num_nodes).flat_map(|u| graph.successors(u).iter().map(move |&v| (u, v))),
        )
    }

    /// Returns the graph with all arcs reversed.
    pub fn transpose(self) -> Self {
        Self {
            out_dcf: self.in_dcf,
            successors: self.predecessors,
            in_dcf: self.out_dcf,
            predecessors: self.successors,
        }
    }

    /// Returns the degree-cumulative function of the successor lists.
    pub fn out_dcf(&self) -> &[usize] {
        &self.out_dcf
    }
}

impl RandomAccessGraph for BidiCsrGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.out_dcf.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.successors.len() as u64
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> &[usize] {
        &self.successors[self.out_dcf[node_id]..self.out_dcf[node_id + 1]]
    }

    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        self.out_dcf[node_id + 1] - self.out_dcf[node_id]
    }
}

impl BidiGraph for BidiCsrGraph {
    #[inline(always)]
    fn predecessors(&self, node_id: usize) -> &[usize] {
        &self.predecessors[self.in_dcf[node_id]..self.in_dcf[node_id + 1]]
    }

    #[inline(always)]
    fn indegree(&self, node_id: usize) -> usize {
        self.in_dcf[node_id + 1] - self.in_dcf[node_id]
    }
}
