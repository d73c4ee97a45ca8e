//! Dwarf Fortress color scheme (`colors.txt`) writer
//!
//! Output is a fixed header followed by one line of bracket tags per color:
//!
//! ```text
//! Dwarf Fortress color scheme file (You can edit this line)[BLACK_R:0][BLACK_G:0][BLACK_B:0]
//! [BLUE_R:0][BLUE_G:0][BLUE_B:128]
//! ```
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use super::color::RgbColor;
use crate::error::{Error, Result};

/// Color names mapped to parsed colors, in output order.
pub type RgbMapping = IndexMap<String, RgbColor>;

/// First line of every color scheme file. The game ignores its content.
pub const HEADER: &str = "Dwarf Fortress color scheme file (You can edit this line)";

/// Append a color scheme to `path`, creating the file if needed.
///
/// Existing content is kept, so converting twice into the same file leaves two
/// complete schemes in it.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] if the file cannot be opened or written.
///
/// [`Error::OutputWrite`]: crate::Error::OutputWrite
pub fn append_scheme<P: AsRef<Path>>(path: P, colors: &RgbMapping) -> Result<()> {
    let path = path.as_ref();
    let output_error = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(output_error)?;

    let mut writer = BufWriter::new(file);
    write_scheme(&mut writer, colors).map_err(output_error)?;
    writer.flush().map_err(output_error)?;

    tracing::debug!("Wrote {} colors to {}", colors.len(), path.display());
    Ok(())
}

/// One color's three bracket tags followed by a newline
struct TagLine<'a> {
    name: &'a str,
    color: RgbColor,
}

impl fmt::Display for TagLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.to_uppercase();
        for (component, value) in self.color.components() {
            write!(f, "[{name}_{}:{value}]", component.as_str().to_uppercase())?;
        }
        f.write_str("\n")
    }
}

fn tag_lines(colors: &RgbMapping) -> impl Iterator<Item = TagLine<'_>> {
    colors.iter().map(|(name, color)| TagLine {
        name,
        color: *color,
    })
}

/// Write the header and one tag line per color.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_scheme<W: Write>(writer: &mut W, colors: &RgbMapping) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())?;
    for line in tag_lines(colors) {
        write!(writer, "{line}")?;
    }
    Ok(())
}

/// Render a color scheme to a string
#[must_use]
pub fn to_scheme_string(colors: &RgbMapping) -> String {
    let mut output = String::from(HEADER);
    for line in tag_lines(colors) {
        output.push_str(&line.to_string());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, RgbColor)]) -> RgbMapping {
        entries
            .iter()
            .map(|(name, color)| ((*name).to_string(), *color))
            .collect()
    }

    #[test]
    fn test_scheme_layout() {
        let colors = mapping(&[
            ("fg", RgbColor::new(255, 255, 255)),
            ("bg", RgbColor::new(0, 0, 0)),
        ]);
        assert_eq!(
            to_scheme_string(&colors),
            format!("{HEADER}[FG_R:255][FG_G:255][FG_B:255]\n[BG_R:0][BG_G:0][BG_B:0]\n")
        );
    }

    #[test]
    fn test_names_are_uppercased() {
        let colors = mapping(&[("lGray", RgbColor::new(1, 2, 3))]);
        assert!(to_scheme_string(&colors).ends_with("[LGRAY_R:1][LGRAY_G:2][LGRAY_B:3]\n"));
    }

    #[test]
    fn test_string_matches_written_bytes() {
        let colors = mapping(&[
            ("black", RgbColor::new(0, 0, 0)),
            ("lred", RgbColor::new(255, 85, 85)),
        ]);
        let mut written = Vec::new();
        write_scheme(&mut written, &colors).unwrap();
        assert_eq!(to_scheme_string(&colors).into_bytes(), written);
    }

    #[test]
    fn test_empty_mapping_writes_header_only() {
        assert_eq!(to_scheme_string(&RgbMapping::new()), HEADER);
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.txt");
        let colors = mapping(&[("red", RgbColor::new(255, 0, 0))]);

        append_scheme(&path, &colors).unwrap();
        append_scheme(&path, &colors).unwrap();

        let once = to_scheme_string(&colors);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), once.repeat(2));
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("colors.txt");
        match append_scheme(&path, &RgbMapping::new()) {
            Err(Error::OutputWrite { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected OutputWrite, got {other:?}"),
        }
    }
}
