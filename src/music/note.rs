// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Absolute notes and the scale/chord factories anchored on them.
//!
//! A note is an absolute semitone number in MIDI convention: pitch class 0
//! ("C") at octave 4 is 60. Names are resolved against a sharp-spelled and a
//! flat-spelled twelve-tone table; a bare pitch-class name always lands in
//! octave 4. Names are always reported back with sharp spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::chord::{Chord, ChordType};
use super::interval::{Interval, OCTAVE_SEMITONES};
use super::pitch::{PitchValue, Semitones};
use super::scale::{Scale, ScaleType};
use crate::error::{Result, TheoryError};

/// Sharp-preferred pitch-class names, indexed by pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferred pitch-class names, indexed by pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Octave assumed when a note is named without one
pub const DEFAULT_OCTAVE: Semitones = 4;

/// An absolute pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note {
    value: Semitones,
}

impl Note {
    /// Create a note from an absolute semitone value
    pub const fn new(value: Semitones) -> Self {
        Self { value }
    }

    /// Parse a pitch-class name ("C", "F#", "Bb") as a note in octave 4
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_name_in_octave(name, DEFAULT_OCTAVE)
    }

    /// Parse a pitch-class name as a note in the given octave
    pub fn from_name_in_octave(name: &str, octave: Semitones) -> Result<Self> {
        let pitch_class = Self::pitch_class_of(name)?;
        Ok(Self::new((octave + 1) * OCTAVE_SEMITONES + pitch_class))
    }

    /// Look a name up in the sharp table, then the flat table
    pub fn pitch_class_of(name: &str) -> Result<Semitones> {
        SHARP_NAMES
            .iter()
            .position(|&n| n == name)
            .or_else(|| FLAT_NAMES.iter().position(|&n| n == name))
            .map(|pc| pc as Semitones)
            .ok_or_else(|| TheoryError::InvalidNoteName(name.to_string()))
    }

    /// Pitch class (0-11)
    pub fn pitch_class(self) -> Semitones {
        self.value.rem_euclid(OCTAVE_SEMITONES)
    }

    /// Sharp-spelled pitch-class name, regardless of how the note was built
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.pitch_class() as usize]
    }

    /// Flat-spelled pitch-class name
    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.pitch_class() as usize]
    }

    /// MIDI octave number (C4 = 60)
    pub fn octave(self) -> Semitones {
        self.value.div_euclid(OCTAVE_SEMITONES) - 1
    }

    /// Signed semitone distance `other - self`
    pub fn distance_to(self, other: Note) -> Semitones {
        self.distance(other)
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        self.plus_interval(Interval::new(semitones))
    }

    /// Build the scale of the given type rooted here
    pub fn scale(self, scale_type: ScaleType) -> Scale {
        scale_type.build(self)
    }

    /// Build the chord of the given type rooted here
    pub fn chord(self, chord_type: ChordType) -> Chord {
        chord_type.build(self)
    }

    pub fn chromatic_scale(self) -> Scale {
        self.scale(ScaleType::Chromatic)
    }

    pub fn major_scale(self) -> Scale {
        self.scale(ScaleType::Major)
    }

    pub fn dorian_scale(self) -> Scale {
        self.scale(ScaleType::Dorian)
    }

    pub fn phrygian_scale(self) -> Scale {
        self.scale(ScaleType::Phrygian)
    }

    pub fn lydian_scale(self) -> Scale {
        self.scale(ScaleType::Lydian)
    }

    pub fn mixolydian_scale(self) -> Scale {
        self.scale(ScaleType::Mixolydian)
    }

    /// Aeolian scale; registered as "natural_minor_scale" too
    pub fn aeolian_scale(self) -> Scale {
        self.scale(ScaleType::Aeolian)
    }

    pub fn locrian_scale(self) -> Scale {
        self.scale(ScaleType::Locrian)
    }

    pub fn harmonic_minor_scale(self) -> Scale {
        self.scale(ScaleType::HarmonicMinor)
    }

    pub fn melodic_minor_scale(self) -> Scale {
        self.scale(ScaleType::MelodicMinor)
    }

    pub fn whole_tone_scale(self) -> Scale {
        self.scale(ScaleType::WholeTone)
    }

    pub fn diminished_scale(self) -> Scale {
        self.scale(ScaleType::Diminished)
    }

    pub fn major_pentatonic_scale(self) -> Scale {
        self.scale(ScaleType::MajorPentatonic)
    }

    pub fn minor_pentatonic_scale(self) -> Scale {
        self.scale(ScaleType::MinorPentatonic)
    }

    pub fn minor_major_pentatonic_scale(self) -> Scale {
        self.scale(ScaleType::MinorMajorPentatonic)
    }

    pub fn enigmatic_scale(self) -> Scale {
        self.scale(ScaleType::Enigmatic)
    }

    pub fn major_neapolitan_scale(self) -> Scale {
        self.scale(ScaleType::MajorNeapolitan)
    }

    pub fn minor_neapolitan_scale(self) -> Scale {
        self.scale(ScaleType::MinorNeapolitan)
    }

    pub fn hungarian_minor_scale(self) -> Scale {
        self.scale(ScaleType::HungarianMinor)
    }

    pub fn major_chord(self) -> Chord {
        self.chord(ChordType::Major)
    }

    pub fn minor_chord(self) -> Chord {
        self.chord(ChordType::Minor)
    }

    pub fn diminished_chord(self) -> Chord {
        self.chord(ChordType::Diminished)
    }

    pub fn augmented_chord(self) -> Chord {
        self.chord(ChordType::Augmented)
    }

    /// Power chord: root and fifth
    pub fn fifth_chord(self) -> Chord {
        self.chord(ChordType::Fifth)
    }

    pub fn sus2_chord(self) -> Chord {
        self.chord(ChordType::Sus2)
    }

    pub fn sus4_chord(self) -> Chord {
        self.chord(ChordType::Sus4)
    }

    pub fn dim7_chord(self) -> Chord {
        self.chord(ChordType::Dim7)
    }

    pub fn half_diminished_chord(self) -> Chord {
        self.chord(ChordType::HalfDiminished)
    }

    /// Dominant seventh; registered as "seventh_chord" and "dom7_chord" too
    pub fn dominant7_chord(self) -> Chord {
        self.chord(ChordType::Dominant7)
    }

    pub fn minor7_chord(self) -> Chord {
        self.chord(ChordType::Minor7)
    }

    pub fn major7_chord(self) -> Chord {
        self.chord(ChordType::Major7)
    }

    pub fn minor_major7_chord(self) -> Chord {
        self.chord(ChordType::MinorMajor7)
    }

    pub fn seventh_sus2_chord(self) -> Chord {
        self.chord(ChordType::SeventhSus2)
    }

    pub fn seventh_sus4_chord(self) -> Chord {
        self.chord(ChordType::SeventhSus4)
    }

    pub fn add2_chord(self) -> Chord {
        self.chord(ChordType::Add2)
    }

    pub fn add9_chord(self) -> Chord {
        self.chord(ChordType::Add9)
    }

    pub fn add4_chord(self) -> Chord {
        self.chord(ChordType::Add4)
    }

    pub fn sixth_chord(self) -> Chord {
        self.chord(ChordType::Sixth)
    }

    pub fn minor6_chord(self) -> Chord {
        self.chord(ChordType::Minor6)
    }

    pub fn six_nine_chord(self) -> Chord {
        self.chord(ChordType::SixNine)
    }

    pub fn ninth_chord(self) -> Chord {
        self.chord(ChordType::Ninth)
    }

    pub fn minor9_chord(self) -> Chord {
        self.chord(ChordType::Minor9)
    }

    pub fn major9_chord(self) -> Chord {
        self.chord(ChordType::Major9)
    }

    pub fn eleventh_chord(self) -> Chord {
        self.chord(ChordType::Eleventh)
    }

    pub fn minor11_chord(self) -> Chord {
        self.chord(ChordType::Minor11)
    }

    pub fn major11_chord(self) -> Chord {
        self.chord(ChordType::Major11)
    }

    pub fn thirteenth_chord(self) -> Chord {
        self.chord(ChordType::Thirteenth)
    }

    pub fn minor13_chord(self) -> Chord {
        self.chord(ChordType::Minor13)
    }

    pub fn major13_chord(self) -> Chord {
        self.chord(ChordType::Major13)
    }

    pub fn dominant7_sharp9_chord(self) -> Chord {
        self.chord(ChordType::Dominant7Sharp9)
    }

    pub fn dominant7_flat9_chord(self) -> Chord {
        self.chord(ChordType::Dominant7Flat9)
    }

    pub fn dominant7_sharp5_chord(self) -> Chord {
        self.chord(ChordType::Dominant7Sharp5)
    }

    pub fn dominant7_flat5_chord(self) -> Chord {
        self.chord(ChordType::Dominant7Flat5)
    }
}

impl PitchValue for Note {
    fn value(self) -> Semitones {
        self.value
    }

    fn from_value(value: Semitones) -> Self {
        Self::new(value)
    }
}

impl From<Semitones> for Note {
    fn from(value: Semitones) -> Self {
        Self::new(value)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.octave())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::RootedIntervals;

    fn values(notes: impl IntoIterator<Item = Note>) -> Vec<Semitones> {
        notes.into_iter().map(|n| n.value()).collect()
    }

    #[test]
    fn test_note_from_name() {
        assert_eq!(Note::from_name("C").unwrap().value(), 60);
        assert_eq!(Note::from_name("C#").unwrap().value(), 61);
        assert_eq!(Note::from_name("Db").unwrap().value(), 61);
        assert_eq!(Note::from_name("Bb").unwrap().value(), 70);
        assert_eq!(Note::from_name("B").unwrap().value(), 71);
    }

    #[test]
    fn test_invalid_note_name() {
        assert_eq!(
            Note::from_name("H"),
            Err(TheoryError::InvalidNoteName("H".to_string()))
        );
        assert!(Note::from_name("").is_err());
        assert_eq!(
            Note::from_name(" C "),
            Err(TheoryError::InvalidNoteName(" C ".to_string()))
        );
        assert!("c".parse::<Note>().is_err());
    }

    #[test]
    fn test_name_is_sharp_canonical() {
        for name in SHARP_NAMES.iter().chain(FLAT_NAMES.iter()) {
            let note = Note::from_name(name).unwrap();
            assert_eq!(note.name(), Note::new(note.value()).name());
        }
        assert_eq!(Note::from_name("Eb").unwrap().name(), "D#");
        assert_eq!(Note::from_name("D#").unwrap().flat_name(), "Eb");
    }

    #[test]
    fn test_octave() {
        assert_eq!(Note::new(60).octave(), 4);
        assert_eq!(Note::new(59).octave(), 3);
        assert_eq!(Note::new(0).octave(), -1);
        assert_eq!(Note::new(-1).octave(), -2);
        assert_eq!(Note::new(-1).name(), "B");
    }

    #[test]
    fn test_from_name_in_octave() {
        assert_eq!(Note::from_name_in_octave("A", 4).unwrap().value(), 69);
        assert_eq!(Note::from_name_in_octave("C", -1).unwrap().value(), 0);
        assert_eq!(Note::from_name_in_octave("Gb", 2).unwrap().to_string(), "F#2");
    }

    #[test]
    fn test_distance_to_transpose() {
        let n = Note::new(64);
        for k in [-30, -12, -1, 0, 1, 7, 12, 25] {
            assert_eq!(n.distance_to(n.transpose(k)), k);
        }
        assert_eq!(Note::new(67).distance_to(Note::new(60)), -7);
    }

    #[test]
    fn test_scale_factories() {
        let c = Note::from_name("C").unwrap();
        assert_eq!(values(c.major_scale().notes()), vec![60, 62, 64, 65, 67, 69, 71]);
        assert_eq!(values(c.aeolian_scale().notes()), vec![60, 62, 63, 65, 67, 68, 70]);
        assert_eq!(c.chromatic_scale().len(), 12);
        assert_eq!(c.whole_tone_scale().len(), 6);
        assert_eq!(c.minor_pentatonic_scale().len(), 5);
    }

    #[test]
    fn test_chord_factories() {
        let c = Note::from_name("C").unwrap();
        assert_eq!(values(c.major_chord().members()), vec![60, 64, 67]);
        assert_eq!(values(c.dominant7_chord().members()), vec![60, 64, 67, 70]);
        assert_eq!(values(c.diminished_chord().members()), vec![60, 63, 66]);
        assert_eq!(values(c.dim7_chord().members()), vec![60, 63, 66, 69]);
        assert_eq!(values(c.augmented_chord().members()), vec![60, 64, 68]);
        assert_eq!(values(c.fifth_chord().members()), vec![60, 67]);
        assert_eq!(
            values(c.thirteenth_chord().members()),
            vec![60, 64, 67, 70, 74, 77, 81]
        );
        assert_eq!(values(c.dominant7_flat5_chord().members()), vec![60, 64, 66, 70]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(61).to_string(), "C#4");
        assert_eq!(Note::new(21).to_string(), "A0");
    }
}
