//! Format conversion utilities
//!
//! Color list (`name = #rrggbb` / `name = rgb(r, g, b)`) → Dwarf Fortress
//! `colors.txt` color scheme.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod color_scheme;
mod types;

pub use color_scheme::{convert_color_list, convert_color_list_with_progress, to_rgb_mapping};
pub use types::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
