// ABOUTME: Command-line replay of a recorded pose session through one drill analyzer
// ABOUTME: Reads JSON Lines frames from a file or stdin and prints the drill result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score a recorded squat session
//! drillsense-replay --drill squat --input session.jsonl
//!
//! # Pipe frames from another tool, with debug logging
//! pose-export | drillsense-replay --drill tennis_serve --input - --verbose
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use drillsense::create_analyzer;
use drillsense::logging::LoggingConfig;
use drillsense::replay::replay;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "drillsense-replay",
    about = "Replay a recorded pose session and print its drill scores",
    long_about = None
)]
struct Cli {
    /// Drill to analyze (squat, pushup, basketball_free_throw, tennis_serve,
    /// cricket_bowling, soccer_penalty)
    #[arg(long, short = 'd')]
    drill: String,

    /// JSON Lines recording (`-` reads stdin)
    #[arg(long, short = 'i', default_value = "-")]
    input: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut analyzer = create_analyzer(&cli.drill)?;

    let result = if cli.input.as_os_str() == "-" {
        info!(drill = %cli.drill, "Replaying from stdin");
        replay(io::stdin().lock(), &mut analyzer)?
    } else {
        info!(drill = %cli.drill, input = %cli.input.display(), "Replaying recording");
        let file = File::open(&cli.input)
            .with_context(|| format!("Failed to open {}", cli.input.display()))?;
        replay(BufReader::new(file), &mut analyzer)?
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
