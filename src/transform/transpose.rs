/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;

/// Returns the transpose of the provided graph, keeping the self-loop
/// convention.
///
/// The result seeds every node's successor list with the node itself, then
/// appends, for every arc `l → v` of the input with `v ≠ l`, the arc
/// `v → l`. Sources are scanned in ascending order, so each successor list
/// of the transpose is ordered by contributing node (and, for multi-edges,
/// by their order in the source list). Arcs of the form `l → l` — the
/// seeded self-loop of the input, as well as any explicit self-edge — are
/// skipped, since the self term is already seeded on this side.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use edgerank::graphs::edge_list::read_edge_list;
/// use edgerank::transform::transpose;
///
/// let graph = read_edge_list("0:1\n1:2\n2:0\n".as_bytes())?;
/// let t = transpose(&graph);
/// assert_eq!(t.successors(0), &[0, 2]);
/// assert_eq!(t.successors(1), &[1, 0]);
/// assert_eq!(t.successors(2), &[2, 1]);
/// #     Ok(())
/// # }
/// ```
pub fn transpose(graph: &VecGraph) -> VecGraph {
    let n = graph.num_nodes();
    let mut t = VecGraph::with_self_loops(n);
    for l in 0..n {
        for &v in graph.successors(l) {
            if v != l {
                t.add_arc(v, l);
            }
        }
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_seeds_self_loops() {
        let g = VecGraph::with_self_loops(3);
        let t = transpose(&g);
        for node in 0..3 {
            assert_eq!(t.successors(node), &[node]);
        }
    }

    #[test]
    fn test_transpose_orders_by_source() {
        // Arcs into node 0 from 2 and 1: the transpose lists them in
        // ascending source order, after the seeded self term.
        let mut g = VecGraph::with_self_loops(3);
        g.add_arc(2, 0);
        g.add_arc(1, 0);
        let t = transpose(&g);
        assert_eq!(t.successors(0), &[0, 1, 2]);
    }
}
