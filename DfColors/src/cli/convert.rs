//! CLI interface for color scheme conversion
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::Path;

use anyhow::Context;

use crate::converter::{ConvertPhase, ConvertProgress};

pub fn execute(source: &Path, destination: &Path) -> anyhow::Result<()> {
    println!("Converting {} -> {}", source.display(), destination.display());

    let report = |progress: &ConvertProgress| {
        if progress.phase != ConvertPhase::Complete {
            println!(
                "[{}/{}] {}",
                progress.current,
                progress.total,
                progress
                    .message
                    .as_deref()
                    .unwrap_or_else(|| progress.phase.as_str())
            );
        }
    };

    crate::converter::convert_color_list_with_progress(source, destination, &report)
        .with_context(|| {
            format!(
                "Failed to convert {} into {}",
                source.display(),
                destination.display()
            )
        })?;

    println!("Conversion complete");
    Ok(())
}
