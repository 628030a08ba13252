// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords: simultaneous pitch sets over a root note.
//!
//! A chord keeps its intervals in the order they were added, but that order
//! carries no meaning. Duplicates collapse, the unison is always present, and
//! two chords are equal when they sound the same absolute notes.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::note::Note;
use super::pitch::{PitchValue, Semitones};
use super::rooted::RootedIntervals;

/// How a chord type is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// A fixed interval set
    Base(&'static [Interval]),
    /// Another chord type plus one interval
    Add(ChordType, Interval),
    /// Another chord type with one interval substituted
    Replace(ChordType, Interval, Interval),
}

/// Built-in chord types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    // Triads
    Major,
    Minor,
    Diminished,
    Augmented,
    Fifth, // Power chord

    // Suspended
    Sus2,
    Sus4,

    // Sevenths
    Dim7,
    HalfDiminished,
    Dominant7,
    Minor7,
    Major7,
    MinorMajor7,
    SeventhSus2,
    SeventhSus4,

    // Added tones
    Add2,
    Add9,
    Add4,
    Sixth,
    Minor6,
    SixNine,

    // Extended
    Ninth,
    Minor9,
    Major9,
    Eleventh,
    Minor11,
    Major11,
    Thirteenth,
    Minor13,
    Major13,

    // Altered dominants
    Dominant7Sharp9,
    Dominant7Flat9,
    Dominant7Sharp5,
    Dominant7Flat5,
}

impl ChordType {
    /// All chord types, in registry order
    pub const ALL: [ChordType; 34] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Fifth,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Dim7,
        ChordType::HalfDiminished,
        ChordType::Dominant7,
        ChordType::Minor7,
        ChordType::Major7,
        ChordType::MinorMajor7,
        ChordType::SeventhSus2,
        ChordType::SeventhSus4,
        ChordType::Add2,
        ChordType::Add9,
        ChordType::Add4,
        ChordType::Sixth,
        ChordType::Minor6,
        ChordType::SixNine,
        ChordType::Ninth,
        ChordType::Minor9,
        ChordType::Major9,
        ChordType::Eleventh,
        ChordType::Minor11,
        ChordType::Major11,
        ChordType::Thirteenth,
        ChordType::Minor13,
        ChordType::Major13,
        ChordType::Dominant7Sharp9,
        ChordType::Dominant7Flat9,
        ChordType::Dominant7Sharp5,
        ChordType::Dominant7Flat5,
    ];

    /// Derivation of this chord type from simpler ones
    pub fn recipe(self) -> Recipe {
        use ChordType::*;
        use Recipe::{Add, Base, Replace};

        match self {
            Major => Base(&[Interval::UNISON, Interval::MAJOR_3, Interval::PERFECT_5]),
            Minor => Base(&[Interval::UNISON, Interval::MINOR_3, Interval::PERFECT_5]),
            Diminished => Base(&[Interval::UNISON, Interval::MINOR_3, Interval::DIMINISHED_5]),
            Augmented => Base(&[Interval::UNISON, Interval::MAJOR_3, Interval::SHARP_5]),
            Fifth => Base(&[Interval::UNISON, Interval::PERFECT_5]),

            Sus2 => Add(Fifth, Interval::MAJOR_2),
            Sus4 => Add(Fifth, Interval::PERFECT_4),

            Dim7 => Add(Diminished, Interval::DIMINISHED_7),
            HalfDiminished => Add(Diminished, Interval::MINOR_7),
            Dominant7 => Add(Major, Interval::MINOR_7),
            Minor7 => Add(Minor, Interval::MINOR_7),
            Major7 => Add(Major, Interval::MAJOR_7),
            MinorMajor7 => Add(Minor, Interval::MAJOR_7),
            SeventhSus2 => Add(Sus2, Interval::MINOR_7),
            SeventhSus4 => Add(Sus4, Interval::MINOR_7),

            Add2 => Add(Major, Interval::MAJOR_2),
            Add9 => Add(Major, Interval::MAJOR_9),
            Add4 => Add(Major, Interval::PERFECT_4),
            Sixth => Add(Major, Interval::MAJOR_6),
            Minor6 => Add(Minor, Interval::MAJOR_6),
            SixNine => Add(Sixth, Interval::MAJOR_9),

            Ninth => Add(Dominant7, Interval::MAJOR_9),
            Minor9 => Add(Minor7, Interval::MAJOR_9),
            Major9 => Add(Major7, Interval::MAJOR_9),
            Eleventh => Add(Ninth, Interval::PERFECT_11),
            Minor11 => Add(Minor9, Interval::PERFECT_11),
            Major11 => Add(Major9, Interval::PERFECT_11),
            Thirteenth => Add(Eleventh, Interval::MAJOR_13),
            Minor13 => Add(Minor11, Interval::MAJOR_13),
            Major13 => Add(Major11, Interval::MAJOR_13),

            Dominant7Sharp9 => Add(Dominant7, Interval::SHARP_9),
            Dominant7Flat9 => Add(Dominant7, Interval::FLAT_9),
            Dominant7Sharp5 => Replace(Dominant7, Interval::PERFECT_5, Interval::SHARP_5),
            Dominant7Flat5 => Replace(Dominant7, Interval::PERFECT_5, Interval::FLAT_5),
        }
    }

    /// Build the chord of this type rooted at `root`, following its recipe
    pub fn build(self, root: Note) -> Chord {
        let chord = match self.recipe() {
            Recipe::Base(intervals) => Chord::new(root, intervals.to_vec()),
            Recipe::Add(base, interval) => base.build(root).add_interval(interval),
            Recipe::Replace(base, old, new) => {
                let base_chord = base.build(root);
                debug_assert!(
                    base_chord.contains_interval(old),
                    "{} has no {} to replace",
                    base.method_name(),
                    old
                );
                let intervals = base_chord
                    .intervals()
                    .iter()
                    .map(|&i| if i == old { new } else { i })
                    .collect();
                Chord::new(root, intervals)
            }
        };
        chord.with_type(self)
    }

    /// Factory name, as listed by the registry
    pub fn method_name(self) -> &'static str {
        match self {
            ChordType::Major => "major_chord",
            ChordType::Minor => "minor_chord",
            ChordType::Diminished => "diminished_chord",
            ChordType::Augmented => "augmented_chord",
            ChordType::Fifth => "fifth_chord",
            ChordType::Sus2 => "sus2_chord",
            ChordType::Sus4 => "sus4_chord",
            ChordType::Dim7 => "dim7_chord",
            ChordType::HalfDiminished => "half_diminished_chord",
            ChordType::Dominant7 => "dominant7_chord",
            ChordType::Minor7 => "minor7_chord",
            ChordType::Major7 => "major7_chord",
            ChordType::MinorMajor7 => "minor_major7_chord",
            ChordType::SeventhSus2 => "seventh_sus2_chord",
            ChordType::SeventhSus4 => "seventh_sus4_chord",
            ChordType::Add2 => "add2_chord",
            ChordType::Add9 => "add9_chord",
            ChordType::Add4 => "add4_chord",
            ChordType::Sixth => "sixth_chord",
            ChordType::Minor6 => "minor6_chord",
            ChordType::SixNine => "six_nine_chord",
            ChordType::Ninth => "ninth_chord",
            ChordType::Minor9 => "minor9_chord",
            ChordType::Major9 => "major9_chord",
            ChordType::Eleventh => "eleventh_chord",
            ChordType::Minor11 => "minor11_chord",
            ChordType::Major11 => "major11_chord",
            ChordType::Thirteenth => "thirteenth_chord",
            ChordType::Minor13 => "minor13_chord",
            ChordType::Major13 => "major13_chord",
            ChordType::Dominant7Sharp9 => "dominant7_sharp9_chord",
            ChordType::Dominant7Flat9 => "dominant7_flat9_chord",
            ChordType::Dominant7Sharp5 => "dominant7_sharp5_chord",
            ChordType::Dominant7Flat5 => "dominant7_flat5_chord",
        }
    }

    /// Synonym factory names resolving to this chord type
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ChordType::Diminished => &["dim_chord"],
            ChordType::Augmented => &["aug_chord"],
            ChordType::Fifth => &["power_chord"],
            ChordType::HalfDiminished => &["half_dim_chord"],
            ChordType::Dominant7 => &["seventh_chord", "dom7_chord"],
            ChordType::Minor7 => &["min7_chord"],
            ChordType::Major7 => &["maj7_chord"],
            ChordType::MinorMajor7 => &["minmaj7_chord"],
            ChordType::Minor6 => &["min6_chord"],
            ChordType::Minor9 => &["min9_chord"],
            ChordType::Major9 => &["maj9_chord"],
            ChordType::Minor11 => &["min11_chord"],
            ChordType::Major11 => &["maj11_chord"],
            ChordType::Minor13 => &["min13_chord"],
            ChordType::Major13 => &["maj13_chord"],
            ChordType::Dominant7Sharp9 => &["seventh_sharp9_chord"],
            ChordType::Dominant7Flat9 => &["seventh_b9_chord"],
            ChordType::Dominant7Sharp5 => &["seventh_sharp5_chord"],
            ChordType::Dominant7Flat5 => &["seventh_b5_chord"],
            _ => &[],
        }
    }

    /// Chord symbol suffix ("m7", "maj9", ...)
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Fifth => "5",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Dim7 => "dim7",
            ChordType::HalfDiminished => "m7b5",
            ChordType::Dominant7 => "7",
            ChordType::Minor7 => "m7",
            ChordType::Major7 => "maj7",
            ChordType::MinorMajor7 => "m(maj7)",
            ChordType::SeventhSus2 => "7sus2",
            ChordType::SeventhSus4 => "7sus4",
            ChordType::Add2 => "add2",
            ChordType::Add9 => "add9",
            ChordType::Add4 => "add4",
            ChordType::Sixth => "6",
            ChordType::Minor6 => "m6",
            ChordType::SixNine => "6/9",
            ChordType::Ninth => "9",
            ChordType::Minor9 => "m9",
            ChordType::Major9 => "maj9",
            ChordType::Eleventh => "11",
            ChordType::Minor11 => "m11",
            ChordType::Major11 => "maj11",
            ChordType::Thirteenth => "13",
            ChordType::Minor13 => "m13",
            ChordType::Major13 => "maj13",
            ChordType::Dominant7Sharp9 => "7#9",
            ChordType::Dominant7Flat9 => "7b9",
            ChordType::Dominant7Sharp5 => "7#5",
            ChordType::Dominant7Flat5 => "7b5",
        }
    }
}

/// A root note with a duplicate-free set of intervals sounding together
#[derive(Debug, Clone)]
pub struct Chord {
    root: Note,
    /// Set by catalog factories, cleared by edits
    chord_type: Option<ChordType>,
    /// Insertion order; always contains the unison exactly once
    intervals: Vec<Interval>,
}

impl Chord {
    /// Create a chord; duplicates collapse and a missing unison is added
    pub fn new(root: Note, intervals: Vec<Interval>) -> Self {
        let mut unique: Vec<Interval> = Vec::with_capacity(intervals.len() + 1);
        if !intervals.contains(&Interval::UNISON) {
            unique.push(Interval::UNISON);
        }
        for interval in intervals {
            if !unique.contains(&interval) {
                unique.push(interval);
            }
        }
        Self {
            root,
            chord_type: None,
            intervals: unique,
        }
    }

    fn with_type(mut self, chord_type: ChordType) -> Self {
        self.chord_type = Some(chord_type);
        self
    }

    /// The catalog type, if this chord came straight from a factory
    pub fn chord_type(&self) -> Option<ChordType> {
        self.chord_type
    }

    /// Absolute sounding notes, deduplicated and ascending
    pub fn members(&self) -> BTreeSet<Note> {
        self.intervals
            .iter()
            .map(|&interval| self.root.plus_interval(interval))
            .collect()
    }

    /// Number of distinct sounding notes
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false: the root sounds in every chord
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Check whether an absolute note sounds in this chord
    pub fn contains(&self, note: Note) -> bool {
        self.intervals
            .contains(&Interval::new(self.root.distance_to(note)))
    }

    /// The same chord shape over a transposed root
    pub fn transpose(&self, semitones: Semitones) -> Self {
        Self {
            root: self.root.transpose(semitones),
            chord_type: self.chord_type,
            intervals: self.intervals.clone(),
        }
    }
}

impl RootedIntervals for Chord {
    fn root(&self) -> Note {
        self.root
    }

    fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    fn with_intervals(&self, intervals: Vec<Interval>) -> Self {
        Self::new(self.root, intervals)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.members() == other.members()
    }
}

impl Eq for Chord {}

impl Hash for Chord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.members().hash(state);
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chord_type {
            Some(chord_type) => write!(f, "{}{}", self.root.name(), chord_type.symbol()),
            None => {
                let names: Vec<String> = self.members().iter().map(|n| n.to_string()).collect();
                write!(f, "{}", names.join(" "))
            }
        }
    }
}
