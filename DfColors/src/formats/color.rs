//! Color value parsing
//!
//! Two notations are accepted, tried in this order:
//! - Hex: `#rrggbb` or `rrggbb`, lowercase digits only
//! - RGB: `rgb(r, g, b)` with exactly one space after each comma
//!
//! Both resolve to the same [`RgbColor`], so `#ff8000` and `rgb(255, 128, 0)`
//! are interchangeable.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::{Error, Result};

// ============================================================================
// Types
// ============================================================================

/// A single color channel, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    R,
    G,
    B,
}

impl Component {
    /// All channels in the order they are parsed and written.
    pub const ALL: [Component; 3] = [Self::R, Self::G, Self::B];

    /// Lowercase channel name (`r`, `g`, `b`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::G => "g",
            Self::B => "b",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels paired with their values, in r, g, b order
    #[must_use]
    pub fn components(self) -> [(Component, u8); 3] {
        [
            (Component::R, self.r),
            (Component::G, self.g),
            (Component::B, self.b),
        ]
    }

    fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Formats as lowercase `#rrggbb`, which [`parse_color`] accepts back.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Textual notation a color value was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorNotation {
    /// `#rrggbb` / `rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
}

// ============================================================================
// Grammar registry
// ============================================================================

struct Grammar {
    notation: ColorNotation,
    pattern: Regex,
}

lazy_static! {
    /// Compiled grammars, one per entry of [`ColorNotation::ALL`] and in the same order.
    static ref GRAMMARS: [Grammar; 2] = ColorNotation::ALL.map(|notation| Grammar {
        notation,
        pattern: Regex::new(notation.pattern()).expect("built-in color pattern is valid"),
    });
}

impl ColorNotation {
    /// Notations in match priority order
    pub const ALL: [ColorNotation; 2] = [Self::Hex, Self::Rgb];

    /// Human-readable name of the notation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
        }
    }

    /// Full-match pattern for the notation, capturing the r, g and b digits
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Hex => r"^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$",
            Self::Rgb => r"^rgb\(([0-9]{1,3}), ([0-9]{1,3}), ([0-9]{1,3})\)$",
        }
    }

    /// Numeric base of the captured channel digits
    #[must_use]
    pub fn radix(self) -> u32 {
        match self {
            Self::Hex => 16,
            Self::Rgb => 10,
        }
    }

    /// Classify a color string without converting it.
    ///
    /// Surrounding whitespace is ignored; the rest must match a notation in full.
    #[must_use]
    pub fn detect(color: &str) -> Option<Self> {
        let color = color.trim();
        GRAMMARS
            .iter()
            .find(|grammar| grammar.pattern.is_match(color))
            .map(|grammar| grammar.notation)
    }

    fn extract(self, color: &str, captures: &Captures<'_>) -> Result<RgbColor> {
        let mut channels = [0u8; 3];
        for (index, component) in Component::ALL.into_iter().enumerate() {
            let digits = &captures[index + 1];
            let value = u32::from_str_radix(digits, self.radix())
                .map_err(|_| Error::InvalidColorFormat(color.to_string()))?;
            channels[index] =
                u8::try_from(value).map_err(|_| Error::ColorComponentOutOfRange {
                    color: color.to_string(),
                    component,
                    value,
                })?;
        }
        Ok(RgbColor::from_channels(channels))
    }
}

impl fmt::Display for ColorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a color value in hex or `rgb()` notation.
///
/// # Errors
///
/// Returns [`Error::InvalidColorFormat`] if the trimmed value matches neither
/// notation in full.
/// Returns [`Error::ColorComponentOutOfRange`] if an `rgb()` channel exceeds 255.
///
/// [`Error::InvalidColorFormat`]: crate::Error::InvalidColorFormat
/// [`Error::ColorComponentOutOfRange`]: crate::Error::ColorComponentOutOfRange
pub fn parse_color(color: &str) -> Result<RgbColor> {
    let color = color.trim();

    for grammar in GRAMMARS.iter() {
        if let Some(captures) = grammar.pattern.captures(color) {
            return grammar.notation.extract(color, &captures);
        }
    }

    Err(Error::InvalidColorFormat(color.to_string()))
}
