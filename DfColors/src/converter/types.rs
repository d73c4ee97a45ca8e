//! Types for conversion progress tracking
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for conversion operations
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);

/// Progress information during a conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current operation phase
    pub phase: ConvertPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Status message for the current step (if any)
    pub message: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            message: None,
        }
    }

    /// Create a progress update with a status message
    #[must_use]
    pub fn with_message(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            message: Some(message.into()),
        }
    }
}

/// Phase of a color list conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading the color list
    ReadingSource,
    /// Parsing color values
    Converting,
    /// Appending to the color scheme file
    WritingOutput,
    /// Operation complete
    Complete,
}

impl ConvertPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingSource => "Reading color list",
            Self::Converting => "Converting",
            Self::WritingOutput => "Writing color scheme",
            Self::Complete => "Complete",
        }
    }
}
