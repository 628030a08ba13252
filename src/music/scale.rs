// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales and scale-degree arithmetic.
//!
//! A scale is a root note plus an ordered interval collection; position in
//! the collection is the scale degree. Degrees are 1-based and unbounded:
//! they wrap into higher (or lower) octaves past either end.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::chord::Chord;
use super::interval::{self, Interval, OCTAVE_SEMITONES};
use super::note::Note;
use super::pitch::{PitchValue, Semitones};
use super::rooted::RootedIntervals;
use crate::error::{Result, TheoryError};

/// Number of triads in a full degree cycle
pub const TRIAD_CYCLE_DEGREES: Semitones = 7;

/// Built-in scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Chromatic,

    // Major scale and modes
    Major, // Ionian
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian, // Natural minor
    Locrian,

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Symmetric scales
    WholeTone,
    Diminished, // Whole-half

    // Pentatonic
    MajorPentatonic,
    MinorPentatonic,
    MinorMajorPentatonic,

    // Exotic
    Enigmatic,
    MajorNeapolitan,
    MinorNeapolitan,
    HungarianMinor,
}

impl ScaleType {
    /// All built-in scale types, in registry order
    pub const ALL: [ScaleType; 19] = [
        ScaleType::Chromatic,
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::WholeTone,
        ScaleType::Diminished,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::MinorMajorPentatonic,
        ScaleType::Enigmatic,
        ScaleType::MajorNeapolitan,
        ScaleType::MinorNeapolitan,
        ScaleType::HungarianMinor,
    ];

    /// The ordered intervals for this scale type
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ScaleType::Chromatic => &interval::CHROMATIC_SET,
            ScaleType::Major => &interval::IONIAN_SET,
            ScaleType::Dorian => &interval::DORIAN_SET,
            ScaleType::Phrygian => &interval::PHRYGIAN_SET,
            ScaleType::Lydian => &interval::LYDIAN_SET,
            ScaleType::Mixolydian => &interval::MIXOLYDIAN_SET,
            ScaleType::Aeolian => &interval::AEOLIAN_SET,
            ScaleType::Locrian => &interval::LOCRIAN_SET,
            ScaleType::HarmonicMinor => &interval::HARMONIC_MINOR_SET,
            ScaleType::MelodicMinor => &interval::MELODIC_MINOR_SET,
            ScaleType::WholeTone => &interval::WHOLE_TONE_SET,
            ScaleType::Diminished => &interval::DIMINISHED_SET,
            ScaleType::MajorPentatonic => &interval::MAJOR_PENTATONIC_SET,
            ScaleType::MinorPentatonic => &interval::MINOR_PENTATONIC_SET,
            ScaleType::MinorMajorPentatonic => &interval::MINOR_MAJOR_PENTATONIC_SET,
            ScaleType::Enigmatic => &interval::ENIGMATIC_SET,
            ScaleType::MajorNeapolitan => &interval::MAJOR_NEAPOLITAN_SET,
            ScaleType::MinorNeapolitan => &interval::MINOR_NEAPOLITAN_SET,
            ScaleType::HungarianMinor => &interval::HUNGARIAN_MINOR_SET,
        }
    }

    /// Factory name, as listed by the registry
    pub fn method_name(self) -> &'static str {
        match self {
            ScaleType::Chromatic => "chromatic_scale",
            ScaleType::Major => "major_scale",
            ScaleType::Dorian => "dorian_scale",
            ScaleType::Phrygian => "phrygian_scale",
            ScaleType::Lydian => "lydian_scale",
            ScaleType::Mixolydian => "mixolydian_scale",
            ScaleType::Aeolian => "aeolian_scale",
            ScaleType::Locrian => "locrian_scale",
            ScaleType::HarmonicMinor => "harmonic_minor_scale",
            ScaleType::MelodicMinor => "melodic_minor_scale",
            ScaleType::WholeTone => "whole_tone_scale",
            ScaleType::Diminished => "diminished_scale",
            ScaleType::MajorPentatonic => "major_pentatonic_scale",
            ScaleType::MinorPentatonic => "minor_pentatonic_scale",
            ScaleType::MinorMajorPentatonic => "minor_major_pentatonic_scale",
            ScaleType::Enigmatic => "enigmatic_scale",
            ScaleType::MajorNeapolitan => "major_neapolitan_scale",
            ScaleType::MinorNeapolitan => "minor_neapolitan_scale",
            ScaleType::HungarianMinor => "hungarian_minor_scale",
        }
    }

    /// Synonym factory names resolving to this scale type
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ScaleType::Major => &["ionian_scale"],
            ScaleType::Aeolian => &["natural_minor_scale", "minor_scale"],
            ScaleType::Diminished => &["octatonic_scale"],
            ScaleType::HungarianMinor => &["minor_hungarian_scale"],
            _ => &[],
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Chromatic => "Chromatic",
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Aeolian => "Aeolian",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Diminished => "Diminished",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::MinorMajorPentatonic => "Minor-Major Pentatonic",
            ScaleType::Enigmatic => "Enigmatic",
            ScaleType::MajorNeapolitan => "Major Neapolitan",
            ScaleType::MinorNeapolitan => "Minor Neapolitan",
            ScaleType::HungarianMinor => "Hungarian Minor",
        }
    }

    /// Build the scale of this type rooted at `root`
    pub fn build(self, root: Note) -> Scale {
        Scale {
            root,
            scale_type: Some(self),
            intervals: self.intervals().to_vec(),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A root note with an ordered, non-empty interval collection.
///
/// Equality and hashing cover the root and the ordered intervals; the
/// catalog tag does not take part.
#[derive(Debug, Clone)]
pub struct Scale {
    root: Note,
    /// `None` for custom or edited interval collections
    scale_type: Option<ScaleType>,
    intervals: Vec<Interval>,
}

impl Scale {
    /// Create a custom scale from root and ordered intervals
    pub fn new(root: Note, intervals: Vec<Interval>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(TheoryError::DegenerateIntervalSet);
        }
        Ok(Self {
            root,
            scale_type: None,
            intervals,
        })
    }

    /// The major scale rooted at `root`
    pub fn major(root: Note) -> Self {
        ScaleType::Major.build(root)
    }

    /// The built-in type, if the intervals are still a catalog set
    pub fn scale_type(&self) -> Option<ScaleType> {
        self.scale_type
    }

    /// Number of degrees per octave
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false for a constructed scale
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Check if a note's pitch class is in this scale
    pub fn contains(&self, note: Note) -> bool {
        self.degree_of(note).is_some()
    }

    /// Get the scale degree (1-based) of a note's pitch class, if present
    pub fn degree_of(&self, note: Note) -> Option<usize> {
        let target = Interval::new(self.root.distance_to(note)).simple();
        self.intervals
            .iter()
            .position(|i| i.simple() == target)
            .map(|i| i + 1)
    }

    /// Interval from the root to degree `pos`.
    ///
    /// Degree 1 is the first stored interval. Each full pass through the
    /// collection adds an octave, so for a seven-note scale degree 8 is the
    /// root an octave up and degree 0 is the seventh an octave down.
    /// Degrees whose distance does not fit in `Semitones` saturate at its
    /// bounds.
    pub fn interval_for_degree(&self, pos: Semitones) -> Interval {
        Interval::new(saturate(self.degree_span(pos)))
    }

    /// The note at degree `pos`, saturating like [`Scale::interval_for_degree`]
    pub fn degree(&self, pos: Semitones) -> Note {
        Note::new(saturate(i64::from(self.root.value()) + self.degree_span(pos)))
    }

    /// Triad rooted on degree `deg`, stacking degrees `deg+2` and `deg+4`.
    ///
    /// The chord intervals are the measured distances between those degrees,
    /// so the quality (major, minor, diminished...) falls out of the scale.
    pub fn degree_triad(&self, deg: Semitones) -> Chord {
        let root = self.degree(deg);
        let intervals = [deg, deg.saturating_add(2), deg.saturating_add(4)]
            .iter()
            .map(|&d| {
                let distance = i64::from(self.degree(d).value()) - i64::from(root.value());
                Interval::new(saturate(distance))
            })
            .collect();
        Chord::new(root, intervals)
    }

    /// Unbounded semitone span from the root to degree `pos`
    fn degree_span(&self, pos: Semitones) -> i64 {
        let n = self.intervals.len() as i64;
        let offset = i64::from(pos) - 1;
        let octaves = offset.div_euclid(n);
        let index = offset.rem_euclid(n) as usize;
        octaves * i64::from(OCTAVE_SEMITONES) + i64::from(self.intervals[index].semitones())
    }

    /// Triads on degrees 1 through 7, in ascending order
    pub fn degree_triads(&self) -> impl Iterator<Item = Chord> + '_ {
        (1..=TRIAD_CYCLE_DEGREES).map(move |d| self.degree_triad(d))
    }

    /// Collected triads on degrees 1 through 7
    pub fn all_degree_triads(&self) -> Vec<Chord> {
        self.degree_triads().collect()
    }
}

impl RootedIntervals for Scale {
    fn root(&self) -> Note {
        self.root
    }

    fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    fn with_intervals(&self, intervals: Vec<Interval>) -> Self {
        Self {
            root: self.root,
            scale_type: None,
            intervals,
        }
    }
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.intervals == other.intervals
    }
}

impl Eq for Scale {}

impl Hash for Scale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
        self.intervals.hash(state);
    }
}

fn saturate(semitones: i64) -> Semitones {
    semitones.clamp(i64::from(Semitones::MIN), i64::from(Semitones::MAX)) as Semitones
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scale_type {
            Some(scale_type) => write!(f, "{} {}", self.root, scale_type),
            None => write!(f, "{} Custom", self.root),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn c4() -> Note {
        Note::new(60)
    }

    fn values(notes: impl IntoIterator<Item = Note>) -> Vec<Semitones> {
        notes.into_iter().map(|n| n.value()).collect()
    }

    #[test]
    fn test_major_scale_degrees() {
        let c_major = Scale::major(c4());
        let degrees: Vec<Semitones> = (1..=7).map(|d| c_major.degree(d).value()).collect();
        assert_eq!(degrees, vec![60, 62, 64, 65, 67, 69, 71]);
        assert_eq!(c_major.degree(8), c_major.degree(1).transpose(12));
    }

    #[test]
    fn test_degree_wraparound() {
        let c_major = Scale::major(c4());
        assert_eq!(c_major.interval_for_degree(7), Interval::MAJOR_7);
        assert_eq!(c_major.interval_for_degree(8), Interval::OCTAVE);
        assert_eq!(c_major.interval_for_degree(9), Interval::MAJOR_9);
        assert_eq!(c_major.interval_for_degree(15).semitones(), 24);
        // Degree 0 is the leading tone an octave down
        assert_eq!(c_major.degree(0).value(), 59);
        assert_eq!(c_major.degree(-6).value(), 48);
    }

    #[test]
    fn test_pentatonic_degrees_wrap_on_scale_length() {
        let pentatonic = c4().major_pentatonic_scale();
        assert_eq!(pentatonic.degree(5).value(), 69);
        assert_eq!(pentatonic.degree(6).value(), 72);
        assert_eq!(pentatonic.degree(7).value(), 74);

        let whole_tone = c4().whole_tone_scale();
        assert_eq!(whole_tone.degree(7).value(), 72);
    }

    #[test]
    fn test_degree_triad_qualities() {
        let c_major = Scale::major(c4());
        assert_eq!(c_major.degree_triad(1), c4().major_chord());
        assert_eq!(c_major.degree_triad(2), Note::new(62).minor_chord());
        assert_eq!(c_major.degree_triad(5), Note::new(67).major_chord());
        assert_eq!(c_major.degree_triad(7), Note::new(71).diminished_chord());
    }

    #[test]
    fn test_degree_triad_crosses_octave() {
        let triad = Scale::major(c4()).degree_triad(6);
        assert_eq!(values(triad.members()), vec![69, 72, 76]);
    }

    #[test]
    fn test_all_degree_triads() {
        let triads = Scale::major(c4()).all_degree_triads();
        assert_eq!(triads.len(), 7);
        let roots: Vec<&str> = triads.iter().map(|t| t.root().name()).collect();
        assert_eq!(roots, vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(triads[0].members(), c4().major_chord().members());
    }

    #[test]
    fn test_degree_triads_restartable() {
        let scale = c4().harmonic_minor_scale();
        let first: Vec<Chord> = scale.degree_triads().collect();
        let second: Vec<Chord> = scale.degree_triads().collect();
        assert_eq!(first, second);
        // Harmonic minor: III is augmented
        assert_eq!(first[2], Note::new(63).augmented_chord());
    }

    #[test]
    fn test_empty_scale_is_rejected() {
        assert_eq!(
            Scale::new(c4(), Vec::new()),
            Err(TheoryError::DegenerateIntervalSet)
        );
    }

    #[test]
    fn test_custom_scale() {
        let custom = Scale::new(c4(), vec![Interval::UNISON, Interval::MINOR_3, Interval::PERFECT_5])
            .unwrap();
        assert_eq!(custom.scale_type(), None);
        assert_eq!(custom.degree(4).value(), 72);
        assert_eq!(custom.degree(6).value(), 79);
    }

    #[test]
    fn test_scale_edits_keep_order_and_original() {
        let major = Scale::major(c4());
        let lydian = major
            .replace_interval(Interval::PERFECT_4, Interval::DIMINISHED_5)
            .unwrap();
        assert_eq!(lydian, c4().lydian_scale());
        assert_eq!(major.degree(4).value(), 65);
        assert_eq!(lydian.degree(4).value(), 66);
        assert_eq!(major.scale_type(), Some(ScaleType::Major));
        assert_eq!(lydian.scale_type(), None);

        let extended = major.add_interval(Interval::OCTAVE);
        assert_eq!(extended.len(), 8);
        assert_eq!(extended.degree(8).value(), 72);
    }

    #[test]
    fn test_scale_edit_errors() {
        let major = Scale::major(c4());
        assert_eq!(
            major.replace_interval(Interval::MINOR_3, Interval::MAJOR_3),
            Err(TheoryError::IntervalNotFound(Interval::MINOR_3))
        );
        let single = Scale::new(c4(), vec![Interval::UNISON]).unwrap();
        assert_eq!(
            single.remove_interval(Interval::UNISON),
            Err(TheoryError::DegenerateIntervalSet)
        );
    }

    #[test]
    fn test_scale_contains() {
        let c_major = Scale::major(c4());
        assert!(c_major.contains(Note::new(48)));
        assert!(c_major.contains(Note::new(79)));
        assert!(!c_major.contains(Note::new(61)));
        assert_eq!(c_major.degree_of(Note::new(71)), Some(7));
        assert_eq!(c_major.degree_of(Note::new(66)), None);
    }

    #[test]
    fn test_equality_ignores_catalog_tag() {
        let major = c4().major_scale();
        let custom = Scale::new(c4(), interval::IONIAN_SET.to_vec()).unwrap();
        assert_eq!(custom, major);

        let round_trip = major
            .replace_interval(Interval::MAJOR_7, Interval::MINOR_7)
            .unwrap()
            .replace_interval(Interval::MINOR_7, Interval::MAJOR_7)
            .unwrap();
        assert_eq!(round_trip.scale_type(), None);
        assert_eq!(round_trip, major);

        let set: HashSet<Scale> = [major.clone(), custom, round_trip].into_iter().collect();
        assert_eq!(set.len(), 1);

        // Order and root still count
        let mut reversed = interval::IONIAN_SET.to_vec();
        reversed.reverse();
        assert_ne!(Scale::new(c4(), reversed).unwrap(), major);
        assert_ne!(Note::new(62).major_scale(), major);
    }

    #[test]
    fn test_extreme_degrees_saturate() {
        let c_major = Scale::major(c4());
        assert_eq!(c_major.interval_for_degree(7 * 1000 + 1).semitones(), 12_000);
        assert_eq!(c_major.degree(Semitones::MAX).value(), Semitones::MAX);
        assert_eq!(c_major.degree(Semitones::MIN).value(), Semitones::MIN);
        assert_eq!(
            c4().minor_pentatonic_scale().interval_for_degree(Semitones::MAX).semitones(),
            Semitones::MAX
        );
        assert!(c_major.degree_triad(Semitones::MAX).contains(Note::new(Semitones::MAX)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Scale::major(c4()).to_string(), "C4 Major");
    }
}
