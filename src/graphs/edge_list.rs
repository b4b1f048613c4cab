/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parsing of textual edge lists.
//!
//! The input format is one record per line, `<vertex>:<n1>,<n2>,...,<nk>`,
//! where all identifiers are nonnegative decimal integers. The number of
//! nodes is the maximum identifier appearing anywhere in the input, plus
//! one: identifiers need not be declared, and every node below the maximum
//! exists even if no line mentions it.
//!
//! Parsing is two-pass: the first pass checks every line and tracks the
//! maximum identifier, the second pass builds the graph, seeding one
//! self-loop per node before appending the explicit out-edges in file
//! order. A malformed line aborts the whole parse with a [`ParseError`]
//! carrying the 1-based line number, before any graph is built.

use crate::graphs::vec_graph::VecGraph;
use std::io::BufRead;
use thiserror::Error;

/// Errors raised while parsing an edge list.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line without the `:` separator between the vertex and its
    /// neighbor list.
    #[error("line {line}: missing ':' separator")]
    MissingSeparator {
        /// The 1-based number of the offending line.
        line: usize,
    },
    /// A left-hand vertex field that does not parse as a nonnegative
    /// integer.
    #[error("line {line}: invalid vertex id {token:?}")]
    InvalidVertex {
        /// The 1-based number of the offending line.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A neighbor-list token that does not parse as a nonnegative integer.
    #[error("line {line}: invalid neighbor id {token:?}")]
    InvalidNeighbor {
        /// The 1-based number of the offending line.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// An I/O error while reading the input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads an edge list, returning the out-adjacency graph.
///
/// Every node of the result carries a seeded self-loop ahead of its
/// explicit out-edges, so its outdegree is at least one. A node may appear
/// on several lines; each line appends to its successor list. Note that an
/// input containing no identifiers at all yields a single-node graph, as
/// the maximum-identifier accumulator starts at zero.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use edgerank::graphs::edge_list::read_edge_list;
///
/// let graph = read_edge_list("0:1\n1:2\n2:0\n".as_bytes())?;
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.successors(0), &[0, 1]);
/// assert_eq!(graph.successors(1), &[1, 2]);
/// assert_eq!(graph.successors(2), &[2, 0]);
/// #     Ok(())
/// # }
/// ```
pub fn read_edge_list(reader: impl BufRead) -> Result<VecGraph, ParseError> {
    // Pass 1: parse every line, tracking the maximum id observed anywhere.
    let mut records: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut max_id = 0;
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = line_num + 1;
        let (vertex, neighbors) = line
            .split_once(':')
            .ok_or(ParseError::MissingSeparator { line: line_num })?;
        let vertex: usize = vertex
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidVertex {
                line: line_num,
                token: vertex.to_string(),
            })?;
        max_id = max_id.max(vertex);
        let mut parsed = Vec::new();
        for token in neighbors.split(',') {
            let neighbor: usize = token
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidNeighbor {
                    line: line_num,
                    token: token.to_string(),
                })?;
            max_id = max_id.max(neighbor);
            parsed.push(neighbor);
        }
        records.push((vertex, parsed));
    }

    // Pass 2: seed one self-loop per node, then append the explicit
    // out-edges in file order.
    let mut graph = VecGraph::with_self_loops(max_id + 1);
    for (vertex, neighbors) in records {
        for neighbor in neighbors {
            graph.add_arc(vertex, neighbor);
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_separator() {
        match read_edge_list("01\n".as_bytes()) {
            Err(ParseError::MissingSeparator { line: 1 }) => {}
            r => panic!("Unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_invalid_vertex() {
        match read_edge_list("0:1\nx:2\n".as_bytes()) {
            Err(ParseError::InvalidVertex { line: 2, token }) => assert_eq!(token, "x"),
            r => panic!("Unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_invalid_neighbor() {
        match read_edge_list("0:1,y\n".as_bytes()) {
            Err(ParseError::InvalidNeighbor { line: 1, token }) => assert_eq!(token, "y"),
            r => panic!("Unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_empty_neighbor_list() {
        // "3:" has an empty neighbor token, which is not an integer.
        match read_edge_list("3:\n".as_bytes()) {
            Err(ParseError::InvalidNeighbor { line: 1, token }) => assert_eq!(token, ""),
            r => panic!("Unexpected result: {r:?}"),
        }
    }

    #[test]
    fn test_blank_line() {
        match read_edge_list("0:1\n\n".as_bytes()) {
            Err(ParseError::MissingSeparator { line: 2 }) => {}
            r => panic!("Unexpected result: {r:?}"),
        }
    }
}
