/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod graphs;
pub mod rank;
pub mod transform;
pub mod utils;

pub mod prelude {
    pub use crate::graphs::edge_list::{ParseError, read_edge_list};
    pub use crate::graphs::vec_graph::VecGraph;
    pub use crate::rank::pagerank::{DimensionError, Outcome, PageRank, sup_norm_distance};
    pub use crate::transform::transpose;
    pub use crate::utils::*;
}
