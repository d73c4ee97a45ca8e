//! # dfcolors
//!
//! Converts a simple color list into a Dwarf Fortress `colors.txt` color scheme.
//!
//! ## Formats
//!
//! - **Color list** - `name = value` lines, values as `#rrggbb`, `rrggbb` or `rgb(r, g, b)`
//! - **Color scheme** - header line plus `[NAME_R:r][NAME_G:g][NAME_B:b]` tags per color
//!
//! ## Quick Start
//!
//! ```no_run
//! use dfcolors::converter::convert_color_list;
//!
//! // Appends to colors.txt, creating it if needed
//! convert_color_list("palette.list", "colors.txt")?;
//! # Ok::<(), dfcolors::Error>(())
//! ```
//!
//! ### Working with the Pieces
//!
//! ```
//! use dfcolors::prelude::*;
//!
//! let colors = parse_color_list("fg = #ffffff\nbg = rgb(0, 0, 0)\n")?;
//! let rgb = to_rgb_mapping(&colors)?;
//! assert_eq!(rgb["fg"], RgbColor::new(255, 255, 255));
//! assert!(to_scheme_string(&rgb).ends_with("[BG_R:0][BG_G:0][BG_B:0]\n"));
//! # Ok::<(), dfcolors::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `dfcolors` command-line binary
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        ConvertPhase, ConvertProgress, convert_color_list, convert_color_list_with_progress,
        to_rgb_mapping,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::{
        ColorMapping, ColorNotation, Component, HEADER, RgbColor, RgbMapping, append_scheme,
        parse_color, parse_color_list, read_color_list, to_scheme_string, write_scheme,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
