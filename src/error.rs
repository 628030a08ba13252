// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for music theory derivations.

use thiserror::Error;

use crate::music::Interval;

/// Errors raised while building or deriving notes, scales and chords
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The name is in neither the sharp nor the flat note table
    #[error("Invalid note name: {0:?}")]
    InvalidNoteName(String),

    /// `replace_interval`/`remove_interval` was given an interval the set lacks
    #[error("Interval not found: {0}")]
    IntervalNotFound(Interval),

    /// A scale needs at least one interval for degree addressing
    #[error("Scale has no intervals")]
    DegenerateIntervalSet,

    /// No scale factory is registered under this name
    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    /// No chord factory is registered under this name
    #[error("Unknown chord: {0}")]
    UnknownChord(String),
}

/// Result alias for theory operations
pub type Result<T> = std::result::Result<T, TheoryError>;
