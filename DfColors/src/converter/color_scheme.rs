//! Color list to color scheme conversion
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::Path;

use super::types::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::Result;
use crate::formats::color::parse_color;
use crate::formats::color_list::{ColorMapping, read_color_list};
use crate::formats::scheme::{RgbMapping, append_scheme};

/// Convert a color list file and append the result to a color scheme file
///
/// # Errors
/// Returns an error if reading, parsing or writing fails.
pub fn convert_color_list<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    convert_color_list_with_progress(source, dest, &|_| {})
}

/// Convert a color list file with progress callback
///
/// Nothing is written unless every color parses. A failure while writing may
/// leave a partial scheme in `dest`.
///
/// # Errors
/// Returns an error if reading, parsing or writing fails.
pub fn convert_color_list_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    progress: ConvertProgressCallback,
) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    tracing::info!("Converting color list: {source:?} → {dest:?}");

    progress(&ConvertProgress::with_message(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading color list...",
    ));
    let colors = read_color_list(source)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::Converting,
        2,
        3,
        format!("Converting {} colors...", colors.len()),
    ));
    let rgb = to_rgb_mapping(&colors)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingOutput,
        3,
        3,
        "Writing color scheme...",
    ));
    append_scheme(dest, &rgb)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}

/// Parse every value of a color list, keeping its order
///
/// # Errors
/// Returns the first color parse error.
pub fn to_rgb_mapping(colors: &ColorMapping) -> Result<RgbMapping> {
    let mut rgb = RgbMapping::with_capacity(colors.len());
    for (name, value) in colors {
        let color = parse_color(value)?;
        tracing::trace!("{name}: {value} -> {color}");
        rgb.insert(name.clone(), color);
    }
    Ok(rgb)
}
