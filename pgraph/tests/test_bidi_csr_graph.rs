/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use pgraph::prelude::*;
use std::io::{BufReader, Write};

#[test]
fn test_empty() {
    let g = BidiCsrGraph::new();
    assert_eq!(g.num_nodes(), 0);
    assert_eq!(g.num_arcs(), 0);

    let g = BidiCsrGraph::from_arcs(Some(3), []);
    assert_eq!(g.num_nodes(), 3);
    for node in 0..3 {
        assert!(g.successors(node).is_empty());
        assert!(g.predecessors(node).is_empty());
    }
}

#[test]
fn test_both_directions() {
    let arcs = [(3, 0), (0, 1), (0, 3), (1, 1), (2, 1), (0, 1), (3, 2)];
    let g = BidiCsrGraph::from_arcs(None, arcs);
    assert_eq!(g.num_nodes(), 4);
    // The duplicate (0, 1) is removed, the loop (1, 1) is kept
    assert_eq!(g.num_arcs(), 6);

    assert_eq!(g.successors(0), &[1, 3]);
    assert_eq!(g.successors(1), &[1]);
    assert_eq!(g.successors(2), &[1]);
    assert_eq!(g.successors(3), &[0, 2]);

    assert_eq!(g.predecessors(0), &[3]);
    assert_eq!(g.predecessors(1), &[0, 1, 2]);
    assert_eq!(g.predecessors(2), &[3]);
    assert_eq!(g.predecessors(3), &[0]);

    assert_eq!(g.outdegree(3), 2);
    assert_eq!(g.indegree(1), 3);
    assert_eq!(g.out_dcf(), &[0, 2, 3, 4, 6]);
    assert!(neighbors_sorted(&g));
}

#[test]
fn test_isolated_tail_nodes() {
    let g = BidiCsrGraph::from_arcs(Some(10), [(0, 1)]);
    assert_eq!(g.num_nodes(), 10);
    assert_eq!(g.outdegree(9), 0);

    // The hint never shrinks the graph
    let g = BidiCsrGraph::from_arcs(Some(1), [(0, 4)]);
    assert_eq!(g.num_nodes(), 5);
}

#[test]
#[should_panic(expected = "is too large")]
fn test_largest_node_rejected() {
    BidiCsrGraph::from_arcs(None, [(0, usize::MAX)]);
}

#[test]
fn test_read_graph_rejects_largest_node() {
    let text = format!("0\t1\n{}\t0\n", usize::MAX);
    let err = ArcListReader::default()
        .read_graph(text.as_bytes(), None)
        .unwrap_err();
    assert!(matches!(err, ArcParseError::NodeTooLarge { line: 2, .. }));
}

#[test]
fn test_transpose() {
    let g = BidiCsrGraph::from_arcs(None, [(0, 1), (1, 2), (0, 2)]);
    let t = g.clone().transpose();
    for node in 0..g.num_nodes() {
        assert_eq!(g.successors(node), t.predecessors(node));
        assert_eq!(g.predecessors(node), t.successors(node));
    }
    assert_eq!(t.transpose(), g);
}

#[test]
fn test_from_graph() {
    let v = VecGraph::from_arcs([(0, 4), (4, 0), (2, 3), (3, 3)]);
    let g = BidiCsrGraph::from_graph(&v);
    assert!(eq(&v, &g));
    assert_eq!(g.predecessors(3), &[2, 3]);
}

#[test]
fn test_er_predecessors_match() {
    let g = ErdosRenyi::new(100, 0.05, 42).to_bidi_csr();
    let mut indegree = vec![0; g.num_nodes()];
    for u in 0..g.num_nodes() {
        for &v in g.successors(u) {
            indegree[v] += 1;
            assert!(g.predecessors(v).binary_search(&u).is_ok());
        }
    }
    for (v, &d) in indegree.iter().enumerate() {
        assert_eq!(g.indegree(v), d);
    }
    assert!(neighbors_sorted(&g));
}

#[test]
fn test_read_graph_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("arcs.tsv");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "# source\ttarget")?;
    writeln!(file, "0\t1")?;
    writeln!(file, "1\t2")?;
    writeln!(file, "2\t0")?;
    drop(file);

    let file = BufReader::new(std::fs::File::open(&path)?);
    let g = ArcListReader::default().read_graph(file, Some(4))?;
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_arcs(), 3);
    assert_eq!(g.predecessors(0), &[2]);
    Ok(())
}
