/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use edgerank::graphs::edge_list::{ParseError, read_edge_list};

#[test]
fn test_three_cycle() {
    let g = read_edge_list("0:1\n1:2\n2:0\n".as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.successors(0), &[0, 1]);
    assert_eq!(g.successors(1), &[1, 2]);
    assert_eq!(g.successors(2), &[2, 0]);
}

#[test]
fn test_neighbor_implies_nodes() {
    // Node 5 appears only as a neighbor: nodes 0..=5 all exist, and the
    // ones never declared keep just their seeded self-loop.
    let g = read_edge_list("0:5\n".as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 6);
    assert_eq!(g.successors(0), &[0, 5]);
    for node in 1..6 {
        assert_eq!(g.successors(node), &[node]);
    }
}

#[test]
fn test_vertex_field_implies_nodes() {
    let g = read_edge_list("9:0\n".as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 10);
    assert_eq!(g.successors(9), &[9, 0]);
    assert_eq!(g.successors(4), &[4]);
}

#[test]
fn test_outdegree_floor() {
    let g = read_edge_list("2:7\n".as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 8);
    for node in 0..g.num_nodes() {
        assert!(g.outdegree(node) >= 1);
        assert_eq!(g.successors(node)[0], node);
    }
}

#[test]
fn test_repeated_vertex_lines_append() {
    let g = read_edge_list("0:1\n0:2\n".as_bytes()).unwrap();
    assert_eq!(g.successors(0), &[0, 1, 2]);
}

#[test]
fn test_duplicate_neighbors_kept() {
    let g = read_edge_list("0:1,1\n".as_bytes()).unwrap();
    assert_eq!(g.successors(0), &[0, 1, 1]);
    assert_eq!(g.outdegree(0), 3);
}

#[test]
fn test_explicit_self_edge_appended() {
    // The explicit self-edge is kept after the seeded self-loop, so the
    // outdegree is inflated to 2.
    let g = read_edge_list("0:0\n".as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 1);
    assert_eq!(g.successors(0), &[0, 0]);
}

#[test]
fn test_empty_input_yields_single_node() {
    let g = read_edge_list("".as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 1);
    assert_eq!(g.successors(0), &[0]);
}

#[test]
fn test_tokens_are_trimmed() {
    let g = read_edge_list("0:1 \n".as_bytes()).unwrap();
    assert_eq!(g.successors(0), &[0, 1]);
}

#[test]
fn test_line_order_does_not_matter() {
    let a = read_edge_list("0:1\n2:0\n".as_bytes()).unwrap();
    let b = read_edge_list("2:0\n0:1\n".as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_error_reports_line_number() {
    match read_edge_list("0:1\nbad\n".as_bytes()) {
        Err(ParseError::MissingSeparator { line }) => assert_eq!(line, 2),
        r => panic!("Unexpected result: {r:?}"),
    }
    match read_edge_list("0:1\n1:2\n2:oops\n".as_bytes()) {
        Err(ParseError::InvalidNeighbor { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "oops");
        }
        r => panic!("Unexpected result: {r:?}"),
    }
}

#[test]
fn test_negative_id_rejected() {
    match read_edge_list("-1:0\n".as_bytes()) {
        Err(ParseError::InvalidVertex { line: 1, token }) => assert_eq!(token, "-1"),
        r => panic!("Unexpected result: {r:?}"),
    }
}
