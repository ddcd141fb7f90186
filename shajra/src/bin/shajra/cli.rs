// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command definitions and handlers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kurbo::Rect;
use serde_json::json;
use shajra::{Session, ThemeMode, render_svg};
use shajra_family::{
    FamilyMember, demo_tree, export_file_name, read_json_file, search_members, write_json_file,
};
use tracing::info;

/// View size used when a command needs a session but draws nothing on screen.
const HEADLESS_VIEW: Rect = Rect::new(0.0, 0.0, 1200.0, 800.0);

#[derive(Parser, Debug)]
#[command(name = "shajra")]
#[command(author, version, about = "Lay out, inspect and export genealogical trees")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Write the bundled demo family as JSON
    Demo {
        /// Output file (default: shajra-family-tree-<today>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every member's computed position as JSON
    Layout {
        /// Family tree JSON file
        file: PathBuf,
    },

    /// Export the whole tree as an SVG image
    Render {
        /// Family tree JSON file
        file: PathBuf,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        /// Use the dark palette
        #[arg(long)]
        dark: bool,

        /// Highlight the member with this id
        #[arg(long, value_name = "ID")]
        select: Option<String>,
    },

    /// Show member and generation counts
    Stats {
        /// Family tree JSON file
        file: PathBuf,
    },

    /// Find members by English or Arabic name
    Search {
        /// Family tree JSON file
        file: PathBuf,

        /// Case-insensitive substring
        query: String,
    },

    /// Show the detail panel for one member
    Show {
        /// Family tree JSON file
        file: PathBuf,

        /// Member id
        id: String,
    },
}

fn load(file: &Path) -> Result<FamilyMember> {
    read_json_file(file).with_context(|| format!("could not import {}", file.display()))
}

fn open(file: &Path) -> Result<Session> {
    let tree = load(file)?;
    Session::new(tree, HEADLESS_VIEW)
        .with_context(|| format!("could not lay out {}", file.display()))
}

pub(crate) fn write_demo(output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        PathBuf::from(export_file_name(&today))
    });
    write_json_file(&path, &demo_tree())
        .with_context(|| format!("could not write {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

pub(crate) fn print_layout(file: &Path) -> Result<()> {
    let session = open(file)?;
    let nodes: Vec<_> = session
        .layout()
        .iter()
        .map(|p| {
            json!({
                "id": p.id,
                "generation": p.generation,
                "x": p.point.x,
                "y": p.point.y,
                "radius": p.radius,
                "band": [p.band.start, p.band.end],
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&nodes)?);
    Ok(())
}

pub(crate) fn render(file: &Path, output: &Path, dark: bool, select: Option<&str>) -> Result<()> {
    let mut session = open(file)?;
    if dark {
        session.set_theme(ThemeMode::Dark);
    }
    if let Some(id) = select {
        session.select(id)?;
    }
    let svg = render_svg(&session.frame());
    fs::write(output, svg).with_context(|| format!("could not write {}", output.display()))?;
    info!(path = %output.display(), "rendered family tree");
    Ok(())
}

pub(crate) fn print_stats(file: &Path) -> Result<()> {
    let stats = open(file)?.stats();
    println!("Total members: {}", stats.total_members);
    println!("Leaf members:  {}", stats.leaf_count);
    for (generation, count) in stats.generations.iter().enumerate() {
        println!("Generation {generation}: {count}");
    }
    Ok(())
}

pub(crate) fn search(file: &Path, query: &str) -> Result<()> {
    let tree = load(file)?;
    let hits = search_members(&tree, query);
    if hits.is_empty() {
        println!("No members match {query:?}");
    }
    for member in hits {
        match &member.name.arabic {
            Some(arabic) => println!("{}\t{} ({arabic})", member.id, member.name.english),
            None => println!("{}\t{}", member.id, member.name.english),
        }
    }
    Ok(())
}

pub(crate) fn show(file: &Path, id: &str) -> Result<()> {
    let mut session = open(file)?;
    let selected = session.select(id)?;
    println!("Generation {}", selected.generation);
    print!("{}", selected.detail_panel());
    Ok(())
}
