//! File format handlers
//!
//! - `color_list` - `name = value` color list input
//! - `color` - hex / `rgb()` color values
//! - `scheme` - Dwarf Fortress `colors.txt` output
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod color;
pub mod color_list;
pub mod scheme;

// Re-export main types
pub use color::{ColorNotation, Component, RgbColor, parse_color};
pub use color_list::{ColorMapping, parse_color_list, read_color_list};
pub use scheme::{HEADER, RgbMapping, append_scheme, to_scheme_string, write_scheme};
