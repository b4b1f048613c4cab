/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use anyhow::Result;
use edgerank::cli;

pub fn main() -> Result<()> {
    // Initialize the logger
    cli::init_env_logger()?;
    // Call the main function of the CLI with cli args
    cli::main(std::env::args_os())
}
