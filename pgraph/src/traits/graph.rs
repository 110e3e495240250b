/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Basic traits to access graphs.
//!
//! A [`RandomAccessGraph`] gives constant-time access to the successors of
//! each node as a slice; a [`BidiGraph`] additionally gives access to the
//! predecessors. In both cases neighbor lists are returned in strictly
//! increasing order: algorithms such as triangle counting rely on this
//! property and do not check it.

use impl_tools::autoimpl;

/// A graph providing random access to the (sorted) successors of its nodes.
///
/// Nodes are identified by integers in the interval [0 . . *n*), where *n* is
/// the [number of nodes](RandomAccessGraph::num_nodes).
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, std::rc::Rc<S>, std::sync::Arc<S>)]
pub trait RandomAccessGraph {
    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node in strictly increasing order.
    fn successors(&self, node_id: usize) -> &[usize];

    /// Returns the outdegree of a node.
    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        self.successors(node_id).len()
    }
}

/// A [`RandomAccessGraph`] that provides also random access to the (sorted)
/// predecessors of its nodes.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, std::rc::Rc<S>, std::sync::Arc<S>)]
pub trait BidiGraph: RandomAccessGraph {
    /// Returns the predecessors of a node in strictly increasing order.
    fn predecessors(&self, node_id: usize) -> &[usize];

    /// Returns the indegree of a node.
    #[inline(always)]
    fn indegree(&self, node_id: usize) -> usize {
        self.predecessors(node_id).len()
    }
}

/// Returns true if the successor lists of the given graph are strictly
/// increasing.
pub fn successors_sorted(graph: &impl RandomAccessGraph) -> bool {
    (0..graph.num_nodes()).all(|node| graph.successors(node).is_sorted_by(|a, b| a < b))
}

/// Returns true if both the successor and predecessor lists of the given
/// graph are strictly increasing.
pub fn neighbors_sorted(graph: &impl BidiGraph) -> bool {
    successors_sorted(graph)
        && (0..graph.num_nodes()).all(|node| graph.predecessors(node).is_sorted_by(|a, b| a < b))
}

/// Returns true if the two graphs have the same nodes and arcs.
pub fn eq(first: &impl RandomAccessGraph, second: &impl RandomAccessGraph) -> bool {
    first.num_nodes() == second.num_nodes()
        && first.num_arcs() == second.num_arcs()
        && (0..first.num_nodes()).all(|node| first.successors(node) == second.successors(node))
}
