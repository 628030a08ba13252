// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmony - a small algebra of notes, intervals, scales and chords.
//!
//! Notes are absolute semitone values (MIDI convention, C4 = 60). Scales and
//! chords are a root note plus a collection of intervals, and every derivation
//! returns a new value.

pub mod config;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
pub use music::{
    Chord, ChordType, Harmony, HarmonyRegistry, Interval, Note, PitchValue, RootedIntervals,
    Scale, ScaleType,
};
