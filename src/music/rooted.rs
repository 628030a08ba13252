// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Behavior shared by scales and chords: a root note plus intervals.
//!
//! All edits return a new value. The original is never touched, so callers
//! can chain derivations off a shared base chord or scale.

use tracing::trace;

use super::interval::Interval;
use super::note::Note;
use super::pitch::PitchValue;
use crate::error::{Result, TheoryError};

/// A root note with a collection of intervals above it
pub trait RootedIntervals: Sized {
    /// The root note
    fn root(&self) -> Note;

    /// The stored intervals, in their stored order
    fn intervals(&self) -> &[Interval];

    /// Build a value of the same kind with the same root and new intervals.
    ///
    /// Implementations apply their own collection rules here (chords
    /// collapse duplicates). The collection passed in is never empty.
    fn with_intervals(&self, intervals: Vec<Interval>) -> Self;

    /// Return a new value with `interval` added
    fn add_interval(&self, interval: Interval) -> Self {
        let mut intervals = self.intervals().to_vec();
        intervals.push(interval);
        self.with_intervals(intervals)
    }

    /// Return a new value with the first occurrence of `old` replaced by `new`
    fn replace_interval(&self, old: Interval, new: Interval) -> Result<Self> {
        let position = self.position_of(old)?;
        trace!(%old, %new, "replacing interval");
        let mut intervals = self.intervals().to_vec();
        intervals[position] = new;
        Ok(self.with_intervals(intervals))
    }

    /// Return a new value without the first occurrence of `interval`
    fn remove_interval(&self, interval: Interval) -> Result<Self> {
        let position = self.position_of(interval)?;
        let mut intervals = self.intervals().to_vec();
        intervals.remove(position);
        if intervals.is_empty() {
            return Err(TheoryError::DegenerateIntervalSet);
        }
        Ok(self.with_intervals(intervals))
    }

    /// True if the interval is stored in this set
    fn contains_interval(&self, interval: Interval) -> bool {
        self.intervals().contains(&interval)
    }

    /// Notes sounding at `root + interval`, in stored order
    fn notes(&self) -> Vec<Note> {
        let root = self.root();
        self.intervals()
            .iter()
            .map(|&interval| root.plus_interval(interval))
            .collect()
    }

    #[doc(hidden)]
    fn position_of(&self, interval: Interval) -> Result<usize> {
        self.intervals()
            .iter()
            .position(|&i| i == interval)
            .ok_or(TheoryError::IntervalNotFound(interval))
    }
}
