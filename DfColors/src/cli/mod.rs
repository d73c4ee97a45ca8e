//! dfcolors CLI - Command-line interface for color scheme conversion
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod convert;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dfcolors", version)]
#[command(about = "Convert a color list file to a Dwarf Fortress colors.txt file", long_about = None)]
pub struct Cli {
    /// Path to the color list file
    #[arg(value_name = "COLOR_FILE")]
    pub color_file: PathBuf,

    /// colors.txt file path (appended to if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl Cli {
    /// Execute the conversion.
    ///
    /// # Errors
    /// Returns an error if the conversion fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        convert::execute(&self.color_file, &self.output)
    }
}

/// Run the dfcolors CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.execute()?;

    Ok(())
}
