//! dfcolors command-line entry point
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

fn main() -> anyhow::Result<()> {
    dfcolors::cli::run_cli()
}
