/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use super::GlobalArgs;
use anyhow::Result;
use clap::Subcommand;

pub mod pagerank;

#[derive(Subcommand, Debug)]
#[command(name = "rank")]
pub enum SubCommands {
    #[clap(name = "pagerank", visible_alias = "pr")]
    PageRank(pagerank::CliArgs),
}

pub fn main(global_args: GlobalArgs, args: SubCommands) -> Result<()> {
    match args {
        SubCommands::PageRank(args) => pagerank::main(global_args, args),
    }
}
