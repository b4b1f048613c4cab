/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A mutable directed graph implementation based on a vector of vectors.
///
/// Successor lists are kept in insertion order and may contain duplicates:
/// a multi-edge contributes once per occurrence to the rank update, exactly
/// as it appears in the input. The [self-loop
/// constructor](VecGraph::with_self_loops) seeds every node's successor list
/// with the node itself, which is the convention both adjacency directions
/// of the ranking pipeline rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
}

impl core::default::Default for VecGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_arcs: 0,
            succ: vec![],
        }
    }

    /// Creates a new empty graph with `n` nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Creates a new graph with `n` nodes, each with a single arc pointing
    /// at itself.
    ///
    /// This is the starting point for both adjacency directions of the
    /// ranking pipeline: the seeded self-loop guarantees that every node has
    /// degree at least one.
    pub fn with_self_loops(n: usize) -> Self {
        Self {
            num_arcs: n as u64,
            succ: Vec::from_iter((0..n).map(|node| vec![node])),
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of arcs in the graph, seeded self-loops included.
    pub fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    /// Returns the successors of a node, in insertion order.
    ///
    /// # Panics
    ///
    /// This method will panic if the node does not exist.
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }

    /// Returns the outdegree of a node, that is, the length of its
    /// successor list, duplicates included.
    ///
    /// # Panics
    ///
    /// This method will panic if the node does not exist.
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    /// Adds an arc to the graph.
    ///
    /// Arcs are appended to the successor list of the source node; adding
    /// the same arc twice yields a multi-edge.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        self.succ[u].push(v);
        self.num_arcs += 1;
    }

    /// Adds a sequence of arcs to the graph.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in arcs {
            self.add_arc(u, v);
        }
    }
}
