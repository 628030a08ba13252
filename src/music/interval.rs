// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals and the standard interval catalog.
//!
//! An interval is a signed semitone distance. It carries no root; it may be
//! negative or span more than an octave (compound intervals). The catalog
//! below names the standard distances used to build chords, and the `*_SET`
//! arrays are the ordered interval collections used to build scales.

use std::fmt;
use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

use super::pitch::{PitchValue, Semitones};

/// Semitones per octave
pub const OCTAVE_SEMITONES: Semitones = 12;

/// A signed semitone distance
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Interval(Semitones);

impl Interval {
    pub const UNISON: Interval = Interval(0);
    pub const MINOR_2: Interval = Interval(1);
    pub const MAJOR_2: Interval = Interval(2);
    pub const MINOR_3: Interval = Interval(3);
    pub const MAJOR_3: Interval = Interval(4);
    pub const PERFECT_4: Interval = Interval(5);
    pub const DIMINISHED_5: Interval = Interval(6);
    /// Same distance as the diminished fifth, named for altered chords
    pub const FLAT_5: Interval = Interval(6);
    pub const PERFECT_5: Interval = Interval(7);
    pub const SHARP_5: Interval = Interval(8);
    pub const MINOR_6: Interval = Interval(8);
    pub const MAJOR_6: Interval = Interval(9);
    /// Double-flat seventh, one semitone below the minor seventh
    pub const DIMINISHED_7: Interval = Interval(9);
    pub const MINOR_7: Interval = Interval(10);
    pub const MAJOR_7: Interval = Interval(11);
    pub const OCTAVE: Interval = Interval(OCTAVE_SEMITONES);
    pub const FLAT_9: Interval = Interval(13);
    pub const MAJOR_9: Interval = Interval(14);
    pub const SHARP_9: Interval = Interval(15);
    pub const PERFECT_11: Interval = Interval(17);
    pub const MAJOR_13: Interval = Interval(21);

    /// Create an interval of the given number of semitones
    pub const fn new(semitones: Semitones) -> Self {
        Interval(semitones)
    }

    /// An interval spanning `n` octaves (negative spans downward)
    pub const fn octaves(n: Semitones) -> Self {
        Interval(n * OCTAVE_SEMITONES)
    }

    /// Semitone count of this interval
    pub const fn semitones(self) -> Semitones {
        self.0
    }

    /// True when this interval spans more than an octave
    pub fn is_compound(self) -> bool {
        self.0.abs() > OCTAVE_SEMITONES
    }

    /// Reduce to the equivalent distance within one ascending octave (0-11)
    pub fn simple(self) -> Self {
        Interval(self.0.rem_euclid(OCTAVE_SEMITONES))
    }

    /// Standard name for this distance, if it is in the catalog
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "unison",
            1 => "minor 2nd",
            2 => "major 2nd",
            3 => "minor 3rd",
            4 => "major 3rd",
            5 => "perfect 4th",
            6 => "diminished 5th",
            7 => "perfect 5th",
            8 => "minor 6th",
            9 => "major 6th",
            10 => "minor 7th",
            11 => "major 7th",
            12 => "octave",
            13 => "flat 9th",
            14 => "major 9th",
            15 => "sharp 9th",
            17 => "perfect 11th",
            21 => "major 13th",
            _ => return None,
        };
        Some(name)
    }
}

impl PitchValue for Interval {
    fn value(self) -> Semitones {
        self.0
    }

    fn from_value(value: Semitones) -> Self {
        Interval(value)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        self.plus_interval(rhs)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval(-self.0)
    }
}

impl From<Semitones> for Interval {
    fn from(semitones: Semitones) -> Self {
        Interval(semitones)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{} semitones", self.0),
        }
    }
}

const fn set<const N: usize>(semitones: [Semitones; N]) -> [Interval; N] {
    let mut out = [Interval::UNISON; N];
    let mut i = 0;
    while i < N {
        out[i] = Interval(semitones[i]);
        i += 1;
    }
    out
}

// Ordered interval collections for scales. Each starts at the unison.
pub const CHROMATIC_SET: [Interval; 12] = set([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
pub const IONIAN_SET: [Interval; 7] = set([0, 2, 4, 5, 7, 9, 11]);
pub const DORIAN_SET: [Interval; 7] = set([0, 2, 3, 5, 7, 9, 10]);
pub const PHRYGIAN_SET: [Interval; 7] = set([0, 1, 3, 5, 7, 8, 10]);
pub const LYDIAN_SET: [Interval; 7] = set([0, 2, 4, 6, 7, 9, 11]);
pub const MIXOLYDIAN_SET: [Interval; 7] = set([0, 2, 4, 5, 7, 9, 10]);
pub const AEOLIAN_SET: [Interval; 7] = set([0, 2, 3, 5, 7, 8, 10]);
pub const LOCRIAN_SET: [Interval; 7] = set([0, 1, 3, 5, 6, 8, 10]);
pub const HARMONIC_MINOR_SET: [Interval; 7] = set([0, 2, 3, 5, 7, 8, 11]);
// Ascending form
pub const MELODIC_MINOR_SET: [Interval; 7] = set([0, 2, 3, 5, 7, 9, 11]);
pub const WHOLE_TONE_SET: [Interval; 6] = set([0, 2, 4, 6, 8, 10]);
// Whole-half octatonic
pub const DIMINISHED_SET: [Interval; 8] = set([0, 2, 3, 5, 6, 8, 9, 11]);
pub const MAJOR_PENTATONIC_SET: [Interval; 5] = set([0, 2, 4, 7, 9]);
pub const MINOR_PENTATONIC_SET: [Interval; 5] = set([0, 3, 5, 7, 10]);
// Minor third with major sixth (minor sixth pentatonic)
pub const MINOR_MAJOR_PENTATONIC_SET: [Interval; 5] = set([0, 3, 5, 7, 9]);
pub const ENIGMATIC_SET: [Interval; 7] = set([0, 1, 4, 6, 8, 10, 11]);
pub const MAJOR_NEAPOLITAN_SET: [Interval; 7] = set([0, 1, 3, 5, 7, 9, 11]);
pub const MINOR_NEAPOLITAN_SET: [Interval; 7] = set([0, 1, 3, 5, 7, 8, 11]);
pub const HUNGARIAN_MINOR_SET: [Interval; 7] = set([0, 2, 3, 6, 7, 8, 11]);

#[cfg(test)]
mod tests {
    use super::*;

    fn semitones(set: &[Interval]) -> Vec<Semitones> {
        set.iter().map(|i| i.semitones()).collect()
    }

    #[test]
    fn test_catalog_values() {
        assert_eq!(Interval::UNISON.semitones(), 0);
        assert_eq!(Interval::MINOR_2.semitones(), 1);
        assert_eq!(Interval::MAJOR_2.semitones(), 2);
        assert_eq!(Interval::MINOR_3.semitones(), 3);
        assert_eq!(Interval::MAJOR_3.semitones(), 4);
        assert_eq!(Interval::PERFECT_4.semitones(), 5);
        assert_eq!(Interval::DIMINISHED_5.semitones(), 6);
        assert_eq!(Interval::FLAT_5.semitones(), 6);
        assert_eq!(Interval::PERFECT_5.semitones(), 7);
        assert_eq!(Interval::SHARP_5.semitones(), 8);
        assert_eq!(Interval::MINOR_6.semitones(), 8);
        assert_eq!(Interval::MAJOR_6.semitones(), 9);
        assert_eq!(Interval::DIMINISHED_7.semitones(), 9);
        assert_eq!(Interval::MINOR_7.semitones(), 10);
        assert_eq!(Interval::MAJOR_7.semitones(), 11);
        assert_eq!(Interval::OCTAVE.semitones(), 12);
        assert_eq!(Interval::FLAT_9.semitones(), 13);
        assert_eq!(Interval::MAJOR_9.semitones(), 14);
        assert_eq!(Interval::SHARP_9.semitones(), 15);
        assert_eq!(Interval::PERFECT_11.semitones(), 17);
        assert_eq!(Interval::MAJOR_13.semitones(), 21);
    }

    #[test]
    fn test_compound_intervals_are_an_octave_above_simple() {
        assert_eq!(Interval::MAJOR_9, Interval::OCTAVE + Interval::MAJOR_2);
        assert_eq!(Interval::PERFECT_11, Interval::OCTAVE + Interval::PERFECT_4);
        assert_eq!(Interval::MAJOR_13, Interval::OCTAVE + Interval::MAJOR_6);
        assert_eq!(Interval::FLAT_9.simple(), Interval::MINOR_2);
        assert!(Interval::MAJOR_9.is_compound());
        assert!(!Interval::OCTAVE.is_compound());
    }

    #[test]
    fn test_plus_interval_is_commutative_and_associative() {
        let (a, b, c) = (Interval::MAJOR_3, Interval::MINOR_3, Interval::new(-12));
        assert_eq!(a.plus_interval(b), b.plus_interval(a));
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a + b + c).semitones(), -5);
    }

    #[test]
    fn test_negative_and_octave_intervals() {
        assert_eq!(-Interval::PERFECT_5, Interval::new(-7));
        assert_eq!(Interval::octaves(-2).semitones(), -24);
        assert_eq!(Interval::new(-1).simple(), Interval::MAJOR_7);
    }

    #[test]
    fn test_scale_sets() {
        assert_eq!(semitones(&CHROMATIC_SET), (0..12).collect::<Vec<_>>());
        assert_eq!(semitones(&IONIAN_SET), vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(semitones(&DORIAN_SET), vec![0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(semitones(&PHRYGIAN_SET), vec![0, 1, 3, 5, 7, 8, 10]);
        assert_eq!(semitones(&LYDIAN_SET), vec![0, 2, 4, 6, 7, 9, 11]);
        assert_eq!(semitones(&MIXOLYDIAN_SET), vec![0, 2, 4, 5, 7, 9, 10]);
        assert_eq!(semitones(&AEOLIAN_SET), vec![0, 2, 3, 5, 7, 8, 10]);
        assert_eq!(semitones(&LOCRIAN_SET), vec![0, 1, 3, 5, 6, 8, 10]);
        assert_eq!(semitones(&HARMONIC_MINOR_SET), vec![0, 2, 3, 5, 7, 8, 11]);
        assert_eq!(semitones(&MELODIC_MINOR_SET), vec![0, 2, 3, 5, 7, 9, 11]);
        assert_eq!(semitones(&WHOLE_TONE_SET), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(semitones(&DIMINISHED_SET), vec![0, 2, 3, 5, 6, 8, 9, 11]);
        assert_eq!(semitones(&MAJOR_PENTATONIC_SET), vec![0, 2, 4, 7, 9]);
        assert_eq!(semitones(&MINOR_PENTATONIC_SET), vec![0, 3, 5, 7, 10]);
        assert_eq!(semitones(&MINOR_MAJOR_PENTATONIC_SET), vec![0, 3, 5, 7, 9]);
        assert_eq!(semitones(&ENIGMATIC_SET), vec![0, 1, 4, 6, 8, 10, 11]);
        assert_eq!(semitones(&MAJOR_NEAPOLITAN_SET), vec![0, 1, 3, 5, 7, 9, 11]);
        assert_eq!(semitones(&MINOR_NEAPOLITAN_SET), vec![0, 1, 3, 5, 7, 8, 11]);
        assert_eq!(semitones(&HUNGARIAN_MINOR_SET), vec![0, 2, 3, 6, 7, 8, 11]);
    }

    #[test]
    fn test_every_set_starts_at_unison_and_ascends() {
        let sets: [&[Interval]; 19] = [
            &CHROMATIC_SET,
            &IONIAN_SET,
            &DORIAN_SET,
            &PHRYGIAN_SET,
            &LYDIAN_SET,
            &MIXOLYDIAN_SET,
            &AEOLIAN_SET,
            &LOCRIAN_SET,
            &HARMONIC_MINOR_SET,
            &MELODIC_MINOR_SET,
            &WHOLE_TONE_SET,
            &DIMINISHED_SET,
            &MAJOR_PENTATONIC_SET,
            &MINOR_PENTATONIC_SET,
            &MINOR_MAJOR_PENTATONIC_SET,
            &ENIGMATIC_SET,
            &MAJOR_NEAPOLITAN_SET,
            &MINOR_NEAPOLITAN_SET,
            &HUNGARIAN_MINOR_SET,
        ];
        for set in sets {
            assert_eq!(set[0], Interval::UNISON);
            assert!(set.windows(2).all(|w| w[0] < w[1]));
            assert!(set.iter().all(|i| i.semitones() < OCTAVE_SEMITONES));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::PERFECT_5.to_string(), "perfect 5th");
        assert_eq!(Interval::new(30).to_string(), "30 semitones");
    }
}
