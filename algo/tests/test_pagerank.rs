/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use pgraph::prelude::*;
use pgraph_algo::rank::{PageRank, Rank, RankState};

/// Sequential push PageRank, used as a reference.
fn reference<R: Rank>(graph: &impl RandomAccessGraph, iterations: usize) -> Vec<R> {
    let n = graph.num_nodes();
    let mut curr = vec![R::INIT; n];
    for _ in 0..iterations {
        let mut next = vec![R::ZERO; n];
        for u in 0..n {
            let d = graph.outdegree(u);
            if d == 0 {
                continue;
            }
            let share = curr[u].share(d);
            for &v in graph.successors(u) {
                next[v] = next[v] + share;
            }
        }
        curr = next.into_iter().map(R::page_rank).collect();
    }
    curr
}

#[test]
fn test_self_loop_fixed_point() {
    let graph = BidiCsrGraph::from_arcs(None, [(0, 0)]);

    let mut pr = PageRank::<_, i64>::new(&graph);
    pr.num_threads(1).max_iter(5);
    pr.run();
    // 15000 + 5 * 100000 / 6 = 98333, then the rank decays towards 90000
    let mut expected = i64::INIT;
    for _ in 0..5 {
        expected = i64::page_rank(expected);
    }
    assert_eq!(pr.rank(), &[expected]);

    let mut pr = PageRank::<_, f64>::new(&graph);
    pr.num_threads(1).max_iter(50);
    pr.run();
    // 1 is the fixed point of 0.15 + 0.85 x
    assert!((pr.rank()[0] - 1.0).abs() < 1E-12);
}

#[test]
fn test_two_nodes_one_iteration() {
    let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 0)]);

    let state = RankState::<i64>::new(2);
    state.push(&graph, 0..2);
    assert_eq!(state.next(), vec![i64::INIT, i64::INIT]);
    state.finalize(0..2);
    assert_eq!(state.curr(), vec![i64::page_rank(i64::INIT); 2]);
    assert_eq!(state.next(), vec![0, 0]);

    let mut pr = PageRank::<_, i64>::new(&graph);
    pr.num_threads(2).max_iter(1);
    pr.run();
    assert_eq!(pr.rank(), &[i64::page_rank(i64::INIT); 2]);
    assert_eq!(pr.iterations(), 1);
}

#[test]
fn test_partial_phases() {
    // The two halves of a push phase can be run separately
    let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (0, 2), (1, 2), (2, 0)]);
    let state = RankState::<f64>::new(3);
    state.push(&graph, 0..1);
    assert_eq!(state.next(), vec![0.0, 0.5, 0.5]);
    state.push(&graph, 1..3);
    assert_eq!(state.next(), vec![1.0, 0.5, 1.5]);
    state.finalize(0..3);
    assert!((state.sum() - 3.0).abs() < 1E-12);
    assert_eq!(state.len(), 3);
}

#[test]
fn test_dangling_nodes_push_nothing() {
    // Node 2 is dangling: after one iteration it has received a full share
    // of 0 but has sent nothing, so node 0 gets only the base rank
    let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 2)]);
    let mut pr = PageRank::<_, i64>::new(&graph);
    pr.num_threads(3).max_iter(1);
    pr.run();
    assert_eq!(pr.rank()[0], 15000);
    assert_eq!(pr.rank()[1], i64::page_rank(i64::INIT));
    assert_eq!(pr.rank()[2], i64::page_rank(i64::INIT));
}

#[test]
fn test_single_precision_base_rank() {
    // Node 0 has no predecessors, so its rank is exactly the base rank
    let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 2)]);
    let mut pr = PageRank::<_, f32>::new(&graph);
    pr.num_threads(2).max_iter(1);
    pr.run();
    assert_eq!(pr.rank()[0], 0.15_f32);
    assert_eq!(pr.rank()[1], 1.0_f32);
    assert_eq!(pr.rank()[2], 1.0_f32);
}

#[test]
fn test_fixed_point_is_thread_independent() {
    let graph = ErdosRenyi::new(300, 0.02, 0).to_bidi_csr();
    let expected = reference::<i64>(&graph, 10);
    for num_threads in [1, 2, 4, 7] {
        let mut pr = PageRank::<_, i64>::new(&graph);
        pr.num_threads(num_threads).max_iter(10);
        pr.run();
        // Integer addition is associative, so the result is exact
        assert_eq!(pr.rank(), expected.as_slice(), "{num_threads} threads");
        assert_eq!(pr.workers().len(), num_threads);
        assert_eq!(pr.rank_sum(), expected.iter().sum::<i64>());
    }
}

#[test]
fn test_float_matches_reference() {
    let graph = ErdosRenyi::new(200, 0.05, 1).to_bidi_csr();
    let expected = reference::<f64>(&graph, 15);
    let expected_sum: f64 = expected.iter().sum();
    for num_threads in [1, 3, 8] {
        let mut pr = PageRank::<_, f64>::new(&graph);
        pr.num_threads(num_threads).max_iter(15);
        pr.run();
        for (node, (&rank, &exp)) in pr.rank().iter().zip(&expected).enumerate() {
            assert!((rank - exp).abs() < 1E-9, "node {node}: {rank} != {exp}");
        }
        assert!((pr.rank_sum() - expected_sum).abs() < 1E-6);
    }

    let mut pr = PageRank::<_, f32>::new(&graph);
    pr.num_threads(4).max_iter(15);
    pr.run();
    assert!((pr.rank_sum() as f64 - expected_sum).abs() < 1E-2);
}

#[test]
fn test_workers_cover_nodes() {
    let graph = ErdosRenyi::new(50, 0.1, 3).to_bidi_csr();
    let mut pr = PageRank::<_, f32>::new(&graph);
    pr.num_threads(4).max_iter(3);
    pr.run();
    let workers = pr.workers();
    assert_eq!(workers.first().map(|w| w.range.start), Some(0));
    assert_eq!(workers.last().map(|w| w.range.end), Some(50));
    for (id, w) in workers.iter().enumerate() {
        assert_eq!(w.id, id);
    }
    for pair in workers.windows(2) {
        assert_eq!(pair[0].range.end, pair[1].range.start);
    }
}

#[test]
fn test_more_threads_than_nodes() {
    let graph = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 0)]);
    let mut pr = PageRank::<_, i64>::new(&graph);
    pr.num_threads(8).max_iter(4);
    pr.run();
    assert_eq!(pr.rank(), reference::<i64>(&graph, 4).as_slice());
}

#[test]
fn test_empty_and_zero_iterations() {
    let graph = BidiCsrGraph::new();
    let mut pr = PageRank::<_, f64>::new(&graph);
    pr.num_threads(2);
    pr.run();
    assert!(pr.rank().is_empty());
    assert_eq!(pr.rank_sum(), 0.0);

    let graph = BidiCsrGraph::from_arcs(None, [(0, 1)]);
    let mut pr = PageRank::<_, i64>::new(&graph);
    pr.num_threads(2).max_iter(0);
    pr.run();
    assert_eq!(pr.rank(), &[i64::INIT, i64::INIT]);
}

#[test]
#[should_panic]
fn test_zero_threads() {
    let graph = BidiCsrGraph::new();
    PageRank::<_, f64>::new(&graph).num_threads(0);
}
