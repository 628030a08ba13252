// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives.
//!
//! This module provides pitch values, the interval catalog, notes, and the
//! scales and chords derived from them.

pub mod chord;
pub mod interval;
pub mod note;
pub mod pitch;
pub mod registry;
pub mod rooted;
pub mod scale;

pub use chord::{Chord, ChordType};
pub use interval::Interval;
pub use note::Note;
pub use pitch::PitchValue;
pub use registry::{CustomDefinition, Harmony, HarmonyRegistry};
pub use rooted::RootedIntervals;
pub use scale::{Scale, ScaleType};
