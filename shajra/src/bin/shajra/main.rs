// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `shajra`: lay out, inspect and export family trees from the command line.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo { output } => cli::write_demo(output)?,
        Commands::Layout { file } => cli::print_layout(&file)?,
        Commands::Render {
            file,
            output,
            dark,
            select,
        } => cli::render(&file, &output, dark, select.as_deref())?,
        Commands::Stats { file } => cli::print_stats(&file)?,
        Commands::Search { file, query } => cli::search(&file, &query)?,
        Commands::Show { file, id } => cli::show(&file, &id)?,
    }

    Ok(())
}
