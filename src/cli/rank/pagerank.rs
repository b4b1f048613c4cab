/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::cli::{GlobalArgs, NumThreadsArg, get_thread_pool};
use crate::graphs::edge_list::read_edge_list;
use crate::rank::pagerank::{Outcome, PageRank};
use crate::transform::transpose;
use crate::utils::FloatVectorFormat;
use anyhow::{Context, Result, ensure};
use clap::Parser;
use dsi_progress_logger::{ProgressLog, progress_logger};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pagerank",
    about = "Compute PageRank by damped power iteration.",
    long_about = None
)]
pub struct CliArgs {
    /// The path of the edge-list file describing the graph.
    pub graph: PathBuf,

    #[arg(short, long)]
    /// Where to store the rank vector.
    pub output: PathBuf,

    #[arg(short, long)]
    /// The damping factor α (must be in the interval (0 . . 1)).
    pub alpha: f64,

    #[arg(long)]
    /// Maximum number of iterations; without it, iteration continues until
    /// convergence.
    pub max_iter: Option<usize>,

    #[arg(short, long, default_value_t = 1E-10)]
    /// The sup-norm distance between successive iterates below which to
    /// stop.
    pub threshold: f64,

    #[arg(long, value_enum, default_value_t = FloatVectorFormat::Ascii)]
    /// The output format for the rank vector.
    pub fmt: FloatVectorFormat,

    #[arg(long, default_value_t = 10)]
    /// Fractional digits of the scientific-notation output.
    pub precision: usize,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(
        args.alpha > 0.0 && args.alpha < 1.0,
        "The damping factor must be in (0 . . 1), got {}",
        args.alpha
    );
    ensure!(
        args.threshold >= 0.0,
        "The threshold must be nonnegative, got {}",
        args.threshold
    );

    let mut pl = progress_logger![];
    pl.display_memory(true);
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let thread_pool = get_thread_pool(args.num_threads.num_threads);

    log::info!("Loading the edge list from {}", args.graph.display());
    let file = File::open(&args.graph)
        .with_context(|| format!("Could not open {}", args.graph.display()))?;
    let graph = read_edge_list(BufReader::new(file))
        .with_context(|| format!("Could not parse {}", args.graph.display()))?;
    log::info!("{} nodes, {} arcs", graph.num_nodes(), graph.num_arcs());

    log::info!("Computing the transpose...");
    let t = transpose(&graph);

    let mut pr = PageRank::new(&graph, &t)?;
    pr.alpha(args.alpha)
        .threshold(args.threshold)
        .max_iter(args.max_iter);

    let outcome = thread_pool.install(|| pr.run_with_logging(&mut pl));

    match &outcome {
        Outcome::Converged { iterations, .. } => {
            log::info!(
                "Converged after {} iteration(s), sup-norm delta = {}",
                iterations,
                pr.sup_delta()
            );
        }
        Outcome::BudgetExceeded { iterations, .. } => {
            log::warn!(
                "Did not converge within {} iteration(s); storing the current estimate (sup-norm delta = {})",
                iterations,
                pr.sup_delta()
            );
        }
    }

    args.fmt.store(&args.output, outcome.rank(), args.precision)?;

    Ok(())
}
