/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel power-iteration PageRank.
//!
//! This implementation iterates the classical damped-teleportation update
//! using two vectors of doubles (the current approximation and the fresh
//! one being computed), so that every update of one round reads only the
//! previous iterate. Within a round the per-node updates are independent,
//! and they are distributed over the Rayon thread pool; the round boundary
//! is a natural barrier.
//!
//! **Warning**: since we need to enumerate the _predecessors_ of a node,
//! you must pass to the [constructor](PageRank::new) both the graph and its
//! **transpose** (see [`transpose`](crate::transform::transpose)).
//!
//! # The formula
//!
//! The graphs produced by the edge-list parser carry a forced self-loop on
//! every node, on both adjacency sides, so the outdegree is at least one
//! and the update never divides by zero. If *N* is the number of nodes, α
//! the damping factor and *d*(*e*) the outdegree of *e*, one iteration
//! computes, for every node *p*,
//!
//! > *x′ₚ* = (1 − α) / *N*  +  α · ∑_(*e* → *p*) *xₑ* / *d*(*e*)
//!
//! where the sum ranges over the predecessors of *p*, including *p* itself
//! through the seeded self term. With probability 1 − α a random surfer
//! teleports to a uniformly chosen node; with probability α it follows a
//! uniformly chosen out-edge of its current node. Per-node sums use Kahan
//! compensation to keep the accumulation error independent of the
//! indegree.
//!
//! # Stopping
//!
//! After each round the engine computes the sup-norm (ℓ∞) distance between
//! the new and the previous iterate ([`sup_norm_distance`]); the iteration
//! stops as soon as the distance is at most the configured
//! [threshold](PageRank::threshold). A [budget](PageRank::max_iter) of
//! iterations may be configured: a run that exhausts it stops reporting
//! [`Outcome::BudgetExceeded`] with the current estimate, rather than
//! looping forever on a graph/threshold combination that never meets the
//! stopping test. Without a budget the loop is unbounded, which is the
//! reference behavior.

use crate::graphs::vec_graph::VecGraph;
use crate::utils::RAYON_MIN_LEN;
use dsi_progress_logger::{ProgressLog, no_logging};
use kahan::KahanSum;
use rayon::iter::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator,
};
use thiserror::Error;

/// Error raised by [`PageRank::new`] when the graph and its transpose
/// disagree in node count.
///
/// Unreachable when the transpose is built by
/// [`transpose`](crate::transform::transpose); observing it means one of
/// the two structures was built or modified independently, which is a
/// defect in the caller, not a retryable condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the graph and its transpose disagree in node count: {graph} != {transpose}")]
pub struct DimensionError {
    /// The number of nodes of the graph.
    pub graph: usize,
    /// The number of nodes of the transpose.
    pub transpose: usize,
}

/// The result of a [run](PageRank::run) of the engine.
///
/// Both variants carry the rank vector: the estimate of a run that
/// exhausted its iteration budget is still the best approximation
/// available, and callers such as the CLI store it anyway after reporting
/// the condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The sup-norm distance between successive iterates fell below the
    /// threshold.
    Converged {
        /// The converged rank vector.
        rank: Vec<f64>,
        /// The number of iterations performed.
        iterations: usize,
    },
    /// The iteration budget was exhausted before convergence.
    BudgetExceeded {
        /// The current (non-converged) rank vector.
        rank: Vec<f64>,
        /// The number of iterations performed.
        iterations: usize,
    },
}

impl Outcome {
    /// Returns the rank vector, converged or not.
    pub fn rank(&self) -> &[f64] {
        match self {
            Outcome::Converged { rank, .. } | Outcome::BudgetExceeded { rank, .. } => rank,
        }
    }

    /// Consumes the outcome, returning the rank vector.
    pub fn into_rank(self) -> Vec<f64> {
        match self {
            Outcome::Converged { rank, .. } | Outcome::BudgetExceeded { rank, .. } => rank,
        }
    }

    /// Returns the number of iterations performed.
    pub fn iterations(&self) -> usize {
        match self {
            Outcome::Converged { iterations, .. } | Outcome::BudgetExceeded { iterations, .. } => {
                *iterations
            }
        }
    }

    /// Returns true if the run converged.
    pub fn converged(&self) -> bool {
        matches!(self, Outcome::Converged { .. })
    }
}

/// Returns the sup-norm (ℓ∞) distance between two vectors, that is, the
/// maximum absolute difference between corresponding entries.
///
/// This is the sole stopping metric of the engine.
///
/// # Panics
///
/// Panics if the two vectors have different lengths.
pub fn sup_norm_distance(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "The vectors have different lengths: {} != {}",
        x.len(),
        y.len()
    );
    x.par_iter()
        .zip(y.par_iter())
        .map(|(a, b)| (a - b).abs())
        .reduce(|| 0.0, f64::max)
}

/// Computes PageRank by parallel power iteration.
///
/// The struct is configured via setters and then executed via
/// [`run`](Self::run), which returns an [`Outcome`] carrying the rank
/// vector. After completion the vector is also available through the
/// [`rank`](Self::rank) accessor, together with the [iteration
/// count](Self::iterations) and the [last sup-norm delta](Self::sup_delta).
///
/// The constructor takes the graph _and_ its transpose: the update rule
/// needs the outdegrees of the former and enumerates the predecessors of
/// each node through the latter.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use edgerank::graphs::edge_list::read_edge_list;
/// use edgerank::rank::pagerank::PageRank;
/// use edgerank::transform::transpose;
///
/// let graph = read_edge_list("0:1\n1:2\n2:0\n".as_bytes())?;
/// let t = transpose(&graph);
///
/// let mut pr = PageRank::new(&graph, &t)?;
/// pr.alpha(0.85);
/// let outcome = pr.run();
///
/// assert!(outcome.converged());
/// assert_eq!(outcome.rank().len(), 3);
/// assert!((outcome.rank().iter().sum::<f64>() - 1.0).abs() < 1E-9);
/// #     Ok(())
/// # }
/// ```
pub struct PageRank<'a> {
    graph: &'a VecGraph,
    transpose: &'a VecGraph,
    alpha: f64,
    threshold: f64,
    max_iter: Option<usize>,

    rank: Box<[f64]>,
    sup_delta: f64,
    iteration: usize,
}

impl std::fmt::Debug for PageRank<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRank")
            .field("alpha", &self.alpha)
            .field("threshold", &self.threshold)
            .field("max_iter", &self.max_iter)
            .field("sup_delta", &self.sup_delta)
            .field("iteration", &self.iteration)
            .finish_non_exhaustive()
    }
}

impl<'a> PageRank<'a> {
    /// Creates a new PageRank computation over the given graph and its
    /// transpose.
    ///
    /// The damping factor defaults to 0.85 and the threshold to 10⁻¹⁰; no
    /// iteration budget is set.
    pub fn new(graph: &'a VecGraph, transpose: &'a VecGraph) -> Result<Self, DimensionError> {
        if graph.num_nodes() != transpose.num_nodes() {
            return Err(DimensionError {
                graph: graph.num_nodes(),
                transpose: transpose.num_nodes(),
            });
        }
        let n = graph.num_nodes();
        Ok(Self {
            graph,
            transpose,
            alpha: 0.85,
            threshold: 1E-10,
            max_iter: None,
            rank: vec![0.0; n].into_boxed_slice(),
            sup_delta: f64::INFINITY,
            iteration: 0,
        })
    }

    /// Sets the damping factor α.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in the open interval (0 . . 1).
    pub fn alpha(&mut self, alpha: f64) -> &mut Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "The damping factor must be in (0 . . 1), got {alpha}"
        );
        self.alpha = alpha;
        self
    }

    /// Sets the stopping threshold: the iteration stops as soon as the
    /// sup-norm distance between successive iterates is at most this value.
    ///
    /// A threshold of zero stops exactly at a fixed point of the update.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is negative or NaN.
    pub fn threshold(&mut self, threshold: f64) -> &mut Self {
        assert!(
            threshold >= 0.0,
            "The threshold must be nonnegative, got {threshold}"
        );
        self.threshold = threshold;
        self
    }

    /// Sets the iteration budget, or removes it with `None`.
    pub fn max_iter(&mut self, max_iter: Option<usize>) -> &mut Self {
        self.max_iter = max_iter;
        self
    }

    /// Returns the rank vector.
    ///
    /// After calling [`run`](Self::run), this contains the computed
    /// PageRank values.
    pub fn rank(&self) -> &[f64] {
        &self.rank
    }

    /// Returns the number of iterations performed by the last call to
    /// [`run`](Self::run).
    pub fn iterations(&self) -> usize {
        self.iteration
    }

    /// Returns the sup-norm distance between the last two iterates.
    pub fn sup_delta(&self) -> f64 {
        self.sup_delta
    }

    /// Runs the computation until convergence or budget exhaustion.
    pub fn run(&mut self) -> Outcome {
        self.run_with_logging(no_logging![])
    }

    /// Runs the computation until convergence or budget exhaustion, logging
    /// the progress of the iteration loop through `pl`.
    ///
    /// The options of `pl` are preserved, making it possible to customize
    /// the log; pass [`no_logging![]`](dsi_progress_logger::no_logging) to
    /// disable it.
    pub fn run_with_logging(&mut self, pl: &mut impl ProgressLog) -> Outcome {
        let n = self.graph.num_nodes();
        if n == 0 {
            self.sup_delta = 0.0;
            self.iteration = 0;
            return Outcome::Converged {
                rank: Vec::new(),
                iterations: 0,
            };
        }

        log::info!("Alpha: {}", self.alpha);
        log::info!("Threshold: {}", self.threshold);
        match self.max_iter {
            Some(max_iter) => log::info!("Iteration budget: {}", max_iter),
            None => log::info!("Iteration budget: none"),
        }

        let inv_n = 1.0 / n as f64;
        self.iteration = 0;
        self.rank.fill(inv_n);

        // The seeded self-loops guarantee outdegree >= 1 on every node.
        let graph = self.graph;
        let inv_outdegrees: Box<[f64]> = (0..n)
            .map(|node| {
                let d = graph.outdegree(node);
                debug_assert!(d > 0, "Node {node} has outdegree zero");
                1.0 / d as f64
            })
            .collect();

        let teleport = (1.0 - self.alpha) * inv_n;
        let mut next = vec![0.0; n].into_boxed_slice();

        pl.item_name("iteration");
        pl.expected_updates(self.max_iter);
        pl.start(format!("Computing PageRank (alpha={})...", self.alpha));

        loop {
            if let Some(max_iter) = self.max_iter {
                if self.iteration >= max_iter {
                    pl.done();
                    return Outcome::BudgetExceeded {
                        rank: self.rank.to_vec(),
                        iterations: self.iteration,
                    };
                }
            }

            {
                let rank = &self.rank;
                let transpose = self.transpose;
                let alpha = self.alpha;
                let inv_outdegrees = &inv_outdegrees;
                next.par_iter_mut()
                    .enumerate()
                    .with_min_len(RAYON_MIN_LEN)
                    .for_each(|(node, x)| {
                        let mut sigma: KahanSum<f64> = KahanSum::new();
                        for &pred in transpose.successors(node) {
                            sigma += rank[pred] * inv_outdegrees[pred];
                        }
                        *x = teleport + alpha * sigma.sum();
                    });
            }

            self.sup_delta = sup_norm_distance(&self.rank, &next);
            std::mem::swap(&mut self.rank, &mut next);
            self.iteration += 1;

            log::info!(
                "Iteration {}: sup-norm delta = {}",
                self.iteration,
                self.sup_delta
            );
            pl.update_and_display();

            if self.sup_delta <= self.threshold {
                pl.done();
                return Outcome::Converged {
                    rank: self.rank.to_vec(),
                    iterations: self.iteration,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sup_norm_distance() {
        assert_eq!(sup_norm_distance(&[], &[]), 0.0);
        assert_eq!(sup_norm_distance(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
        assert_eq!(sup_norm_distance(&[1.0, 2.0], &[1.5, 1.0]), 1.0);
        assert_eq!(sup_norm_distance(&[0.0, -2.0], &[0.25, 2.0]), 4.0);
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn test_sup_norm_distance_mismatched() {
        sup_norm_distance(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_dimension_error() {
        let g = VecGraph::with_self_loops(3);
        let t = VecGraph::with_self_loops(2);
        match PageRank::new(&g, &t) {
            Err(DimensionError {
                graph: 3,
                transpose: 2,
            }) => {}
            r => panic!("Unexpected result: {r:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "damping factor")]
    fn test_alpha_out_of_range() {
        let g = VecGraph::with_self_loops(1);
        let t = VecGraph::with_self_loops(1);
        PageRank::new(&g, &t).unwrap().alpha(1.0);
    }

    #[test]
    #[should_panic(expected = "threshold")]
    fn test_negative_threshold() {
        let g = VecGraph::with_self_loops(1);
        let t = VecGraph::with_self_loops(1);
        PageRank::new(&g, &t).unwrap().threshold(-1E-10);
    }

    #[test]
    fn test_empty_graph() {
        let g = VecGraph::new();
        let t = VecGraph::new();
        let mut pr = PageRank::new(&g, &t).unwrap();
        let outcome = pr.run();
        assert!(outcome.converged());
        assert_eq!(outcome.iterations(), 0);
        assert!(outcome.rank().is_empty());
        assert!(pr.rank().is_empty());
    }
}
