// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Shared behavior of integer pitch values.
//!
//! Both [`Note`](super::Note) (an absolute semitone number) and
//! [`Interval`](super::Interval) (a signed semitone delta) are a single
//! integer underneath. This trait gives them the arithmetic they share.

use super::Interval;

/// Semitone value type
pub type Semitones = i32;

/// A value backed by one integer semitone count
pub trait PitchValue: Copy + Sized {
    /// The underlying semitone value
    fn value(self) -> Semitones;

    /// Build a value of the same kind from a semitone count
    fn from_value(value: Semitones) -> Self;

    /// Shift this value by an interval, returning a new value
    fn plus_interval(self, interval: Interval) -> Self {
        Self::from_value(self.value() + interval.value())
    }

    /// Signed semitone difference `other - self`
    fn distance(self, other: Self) -> Semitones {
        other.value() - self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Note;

    #[test]
    fn test_plus_interval_on_note_and_interval() {
        let c4 = Note::new(60);
        assert_eq!(c4.plus_interval(Interval::PERFECT_5).value(), 67);
        assert_eq!(
            Interval::MAJOR_3.plus_interval(Interval::MINOR_3),
            Interval::PERFECT_5
        );
    }

    #[test]
    fn test_distance_is_signed() {
        assert_eq!(Interval::MAJOR_7.distance(Interval::MAJOR_2), -9);
        assert_eq!(Note::new(48).distance(Note::new(72)), 24);
    }
}
