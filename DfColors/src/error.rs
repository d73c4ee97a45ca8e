//! Error types for `dfcolors`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::color::Component;

/// The error type for `dfcolors` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// The color list file does not exist or could not be read.
    #[error("cannot read color file {path}: {source}")]
    FileAccess {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The color scheme file could not be opened or written.
    #[error("cannot write color scheme file {path}: {source}")]
    OutputWrite {
        /// The destination path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Color List Errors ====================
    /// A line did not split into exactly one name and one value.
    #[error("invalid color file format at line {line}: parsed line content: {}", .parts.join(", "))]
    MalformedLine {
        /// 1-based line number in the color list.
        line: usize,
        /// The trimmed `=`-separated parts of the line.
        parts: Vec<String>,
    },

    // ==================== Color Value Errors ====================
    /// The value matched neither the hex nor the `rgb()` notation.
    #[error("not a valid color value format: {0:?}")]
    InvalidColorFormat(String),

    /// An `rgb()` component does not fit in 0-255.
    #[error("{component} component {value} out of range (0-255) in {color:?}")]
    ColorComponentOutOfRange {
        /// The full color string.
        color: String,
        /// The offending channel.
        component: Component,
        /// The parsed value.
        value: u32,
    },
}

/// A specialized Result type for `dfcolors` operations.
pub type Result<T> = std::result::Result<T, Error>;
