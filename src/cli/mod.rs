/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The command-line interface.
//!
//! The binary exposes subcommand groups (currently just `rank`); shared
//! argument structures and helpers live in this module. Logging goes
//! through [`env_logger`], initialized by [`init_env_logger`] with a
//! format showing the time elapsed since startup, the log level, the
//! thread and the target.

use anyhow::{Result, anyhow, bail, ensure};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::time::Duration;

pub mod rank;

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global = true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes
    /// "s" for seconds, "m" for minutes, "h" for hours, and "d" for days.
    /// If no suffix is provided it is assumed to be in milliseconds.
    pub log_interval: Option<Duration>,
}

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(..., value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use.
    pub num_threads: usize,
}

/// Creates a [`ThreadPool`](rayon::ThreadPool) with the given number of
/// threads.
pub fn get_thread_pool(num_threads: usize) -> rayon::ThreadPool {
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .expect("Failed to create thread pool");
    log::info!("Using {} threads", thread_pool.current_num_threads());
    thread_pool
}

/// Parses a duration from a string.
///
/// If no suffix is given, the value is assumed to be in milliseconds. The
/// available suffixes are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` is parsed as 1 day, 2 hours, 3 minutes, 4
/// seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including the
/// time elapsed since initialization.
pub fn init_env_logger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(
            buf,
            "{:>12.3}s {style}{}{style:#} [{:?}] {} - {}",
            start.elapsed().as_secs_f64(),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.init();
    Ok(())
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(subcommand)]
    Rank(rank::SubCommands),
}

#[derive(Parser, Debug)]
#[command(name = "edgerank", version)]
/// Tools to rank the nodes of a graph given as a textual edge list.
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// The entry point of the command-line interface.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Rank(args) => {
            rank::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {:.3}s",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
