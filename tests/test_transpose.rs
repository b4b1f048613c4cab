/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use edgerank::graphs::edge_list::read_edge_list;
use edgerank::graphs::vec_graph::VecGraph;
use edgerank::transform::transpose;

/// Returns the number of occurrences of `target` among the successors of
/// `node`, ignoring the seeded self term.
fn count_arcs(g: &VecGraph, node: usize, target: usize) -> usize {
    g.successors(node)
        .iter()
        .skip(1)
        .filter(|&&v| v == target)
        .count()
}

#[test]
fn test_three_cycle() {
    let g = read_edge_list("0:1\n1:2\n2:0\n".as_bytes()).unwrap();
    let t = transpose(&g);
    assert_eq!(t.successors(0), &[0, 2]);
    assert_eq!(t.successors(1), &[1, 0]);
    assert_eq!(t.successors(2), &[2, 1]);
}

#[test]
fn test_self_term_on_both_sides() {
    let g = read_edge_list("0:1,3\n1:2\n3:1\n".as_bytes()).unwrap();
    let t = transpose(&g);
    assert_eq!(g.num_nodes(), t.num_nodes());
    for node in 0..g.num_nodes() {
        assert_eq!(g.successors(node)[0], node);
        assert_eq!(t.successors(node)[0], node);
    }
}

#[test]
fn test_in_out_consistency() {
    let g = read_edge_list("0:1,2,1\n1:3\n2:0,3\n3:3\n".as_bytes()).unwrap();
    let t = transpose(&g);
    let n = g.num_nodes();
    // Every arc l -> v with v != l appears in the transpose with the same
    // multiplicity, and vice versa.
    for l in 0..n {
        for v in 0..n {
            if v != l {
                assert_eq!(
                    count_arcs(&g, l, v),
                    count_arcs(&t, v, l),
                    "arc ({l}, {v})"
                );
            }
        }
    }
}

#[test]
fn test_explicit_self_edge_not_mirrored() {
    // The explicit self-edge of node 3 inflates its outdegree but adds
    // nothing to its in-list, which carries the self term exactly once.
    let g = read_edge_list("3:3\n".as_bytes()).unwrap();
    let t = transpose(&g);
    assert_eq!(g.successors(3), &[3, 3]);
    assert_eq!(t.successors(3), &[3]);
}

#[test]
fn test_in_lists_ordered_by_source() {
    let g = read_edge_list("2:0\n1:0\n3:0\n".as_bytes()).unwrap();
    let t = transpose(&g);
    assert_eq!(t.successors(0), &[0, 1, 2, 3]);
}

#[test]
fn test_transpose_of_transpose_preserves_arcs() {
    let g = read_edge_list("0:1,2\n1:2\n2:0\n".as_bytes()).unwrap();
    let tt = transpose(&transpose(&g));
    let n = g.num_nodes();
    for l in 0..n {
        for v in 0..n {
            if v != l {
                assert_eq!(count_arcs(&g, l, v), count_arcs(&tt, l, v));
            }
        }
    }
}
