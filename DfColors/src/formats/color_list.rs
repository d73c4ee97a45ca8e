//! Color list file reading
//!
//! A color list is plain text with one `name = value` pair per line:
//!
//! ```text
//! ; comments start with a semicolon
//! black = #000000
//! lgray = rgb(192, 192, 192)
//! ```
//!
//! Values are kept as raw strings here; [`crate::formats::color`] turns them
//! into channels.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Color names mapped to their raw values, in file order.
pub type ColorMapping = IndexMap<String, String>;

/// Marks a whole-line comment
pub const COMMENT_PREFIX: char = ';';

/// Separator between a color name and its value
pub const SEPARATOR: char = '=';

/// Read a color list from disk
///
/// # Errors
///
/// Returns [`Error::FileAccess`] if the file cannot be opened or read.
/// Returns [`Error::MalformedLine`] if a line is not a single `name = value` pair.
///
/// [`Error::FileAccess`]: crate::Error::FileAccess
/// [`Error::MalformedLine`]: crate::Error::MalformedLine
pub fn read_color_list<P: AsRef<Path>>(path: P) -> Result<ColorMapping> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    parse_color_list(&content)
}

/// Parse color list text.
///
/// Blank lines and lines starting with `;` are skipped. A repeated name keeps
/// its first position but takes the last value.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] on the first line that does not contain
/// exactly one `=`.
///
/// [`Error::MalformedLine`]: crate::Error::MalformedLine
pub fn parse_color_list(content: &str) -> Result<ColorMapping> {
    let mut colors = ColorMapping::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let (name, value) = parse_line(index + 1, line)?;
        if let Some(previous) = colors.insert(name, value) {
            tracing::debug!("Line {}: overriding earlier value {previous:?}", index + 1);
        }
    }

    tracing::debug!("Parsed {} colors", colors.len());
    Ok(colors)
}

fn parse_line(line_number: usize, line: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();

    match parts.as_slice() {
        [name, value] => Ok(((*name).to_string(), (*value).to_string())),
        _ => Err(Error::MalformedLine {
            line: line_number,
            parts: parts.iter().map(|part| (*part).to_string()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_file_order() {
        let colors = parse_color_list("fg = #ffffff\nbg = rgb(0, 0, 0)\n").unwrap();
        let entries: Vec<_> = colors.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, [("fg", "#ffffff"), ("bg", "rgb(0, 0, 0)")]);
    }

    #[test]
    fn test_whitespace_is_trimmed_and_case_kept() {
        let colors = parse_color_list("  LightBlue\t=   rgb(1, 2, 3)   ").unwrap();
        assert_eq!(colors.get("LightBlue").map(String::as_str), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let colors = parse_color_list("a = #000000\nb = #111111\na = #222222").unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get_index(0), Some((&"a".to_string(), &"#222222".to_string())));
        assert_eq!(colors["b"], "#111111");
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let content = "\n; palette\n  \nred = #ff0000\r\n   ; trailing note\n\n";
        let colors = parse_color_list(content).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors["red"], "#ff0000");
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_color_list("").unwrap().is_empty());
    }

    #[test]
    fn test_too_many_separators() {
        match parse_color_list("ok = #000000\na = b = c") {
            Err(Error::MalformedLine { line, parts }) => {
                assert_eq!(line, 2);
                assert_eq!(parts, ["a", "b", "c"]);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_separator() {
        match parse_color_list("just a name") {
            Err(Error::MalformedLine { line, parts }) => {
                assert_eq!(line, 1);
                assert_eq!(parts, ["just a name"]);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_value_is_not_validated_here() {
        let colors = parse_color_list("odd = not a color").unwrap();
        assert_eq!(colors["odd"], "not a color");
    }

    #[test]
    fn test_missing_file() {
        let path = std::path::PathBuf::from("definitely/not/here/colors.list");
        match read_color_list(&path) {
            Err(Error::FileAccess { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }
}
