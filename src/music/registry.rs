// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Name-to-factory registries for scales and chords.
//!
//! Every built-in factory is registered once under its canonical name
//! (`major_scale`, `dominant7_chord`, ...) and synonyms resolve through an
//! alias table. Custom interval sets loaded from config can be registered
//! alongside the built-ins. Random selection takes the caller's RNG so picks
//! are reproducible under a seed.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::chord::{Chord, ChordType};
use super::interval::Interval;
use super::note::Note;
use super::rooted::RootedIntervals;
use super::scale::{Scale, ScaleType};
use crate::error::{Result, TheoryError};

const SCALE_SUFFIX: &str = "_scale";
const CHORD_SUFFIX: &str = "_chord";

/// Left out of random scale picks
const RANDOM_SCALE_EXCLUDED: &str = "chromatic_scale";

/// A named interval collection loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDefinition {
    /// Factory name; the `_scale`/`_chord` suffix is added if missing
    pub name: String,
    /// Intervals from root (semitones)
    pub intervals: Vec<Interval>,
}

#[derive(Debug, Clone, PartialEq)]
enum ScaleFactory {
    Builtin(ScaleType),
    Custom(Vec<Interval>),
}

#[derive(Debug, Clone, PartialEq)]
enum ChordFactory {
    Builtin(ChordType),
    Custom(Vec<Interval>),
}

/// Either kind of derived pitch collection
#[derive(Debug, Clone, PartialEq)]
pub enum Harmony {
    Scale(Scale),
    Chord(Chord),
}

impl Harmony {
    /// Notes in stored order
    pub fn notes(&self) -> Vec<Note> {
        match self {
            Harmony::Scale(scale) => scale.notes(),
            Harmony::Chord(chord) => chord.members().into_iter().collect(),
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Harmony::Scale(scale) => write!(f, "{}", scale),
            Harmony::Chord(chord) => write!(f, "{}", chord),
        }
    }
}

/// Registry of scale and chord factories
#[derive(Debug, Clone, Default)]
pub struct HarmonyRegistry {
    scales: BTreeMap<String, ScaleFactory>,
    chords: BTreeMap<String, ChordFactory>,
    aliases: HashMap<String, String>,
}

impl HarmonyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in scale and chord registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for scale_type in ScaleType::ALL {
            let name = scale_type.method_name();
            registry
                .scales
                .insert(name.to_string(), ScaleFactory::Builtin(scale_type));
            for alias in scale_type.aliases() {
                registry.aliases.insert(alias.to_string(), name.to_string());
            }
        }
        for chord_type in ChordType::ALL {
            let name = chord_type.method_name();
            registry
                .chords
                .insert(name.to_string(), ChordFactory::Builtin(chord_type));
            for alias in chord_type.aliases() {
                registry.aliases.insert(alias.to_string(), name.to_string());
            }
        }
        registry
    }

    /// Register a custom scale, replacing any scale of the same name
    pub fn register_scale(&mut self, def: CustomDefinition) -> Result<()> {
        if def.intervals.is_empty() {
            return Err(TheoryError::DegenerateIntervalSet);
        }
        let name = normalize(&def.name, SCALE_SUFFIX);
        debug!(%name, intervals = def.intervals.len(), "registering custom scale");
        self.aliases.remove(&name);
        self.scales.insert(name, ScaleFactory::Custom(def.intervals));
        Ok(())
    }

    /// Register a custom chord, replacing any chord of the same name
    pub fn register_chord(&mut self, def: CustomDefinition) {
        let name = normalize(&def.name, CHORD_SUFFIX);
        debug!(%name, intervals = def.intervals.len(), "registering custom chord");
        self.aliases.remove(&name);
        self.chords.insert(name, ChordFactory::Custom(def.intervals));
    }

    /// Canonical scale factory names, sorted
    pub fn scale_method_names(&self) -> Vec<&str> {
        self.scales.keys().map(String::as_str).collect()
    }

    /// Canonical chord factory names, sorted
    pub fn chord_method_names(&self) -> Vec<&str> {
        self.chords.keys().map(String::as_str).collect()
    }

    /// Synonyms registered for a canonical name
    pub fn aliases_of(&self, canonical: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == canonical)
            .map(|(alias, _)| alias.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Resolve a scale name (canonical, alias, or loose form like "Natural Minor")
    pub fn resolve_scale(&self, name: &str) -> Result<String> {
        let key = self.canonical(normalize(name, SCALE_SUFFIX));
        if self.scales.contains_key(&key) {
            Ok(key)
        } else {
            Err(TheoryError::UnknownScale(name.to_string()))
        }
    }

    /// Resolve a chord name (canonical, alias, or loose form like "dom7")
    pub fn resolve_chord(&self, name: &str) -> Result<String> {
        let key = self.canonical(normalize(name, CHORD_SUFFIX));
        if self.chords.contains_key(&key) {
            Ok(key)
        } else {
            Err(TheoryError::UnknownChord(name.to_string()))
        }
    }

    /// Build a named scale rooted at `root`
    pub fn scale(&self, name: &str, root: Note) -> Result<Scale> {
        let key = self.resolve_scale(name)?;
        trace!(%key, %root, "building scale");
        match &self.scales[&key] {
            ScaleFactory::Builtin(scale_type) => Ok(scale_type.build(root)),
            ScaleFactory::Custom(intervals) => Scale::new(root, intervals.clone()),
        }
    }

    /// Build a named chord rooted at `root`
    pub fn chord(&self, name: &str, root: Note) -> Result<Chord> {
        let key = self.resolve_chord(name)?;
        trace!(%key, %root, "building chord");
        match &self.chords[&key] {
            ChordFactory::Builtin(chord_type) => Ok(chord_type.build(root)),
            ChordFactory::Custom(intervals) => Ok(Chord::new(root, intervals.clone())),
        }
    }

    /// Build a scale or chord by factory name.
    ///
    /// Names ending in `_chord` or `_scale` go straight to that table; any
    /// other name is tried as a scale first, then as a chord.
    pub fn build(&self, name: &str, root: Note) -> Result<Harmony> {
        let lowered = name.trim().to_lowercase();
        if lowered.ends_with(CHORD_SUFFIX) {
            return self.chord(name, root).map(Harmony::Chord);
        }
        if lowered.ends_with(SCALE_SUFFIX) {
            return self.scale(name, root).map(Harmony::Scale);
        }
        match self.scale(name, root) {
            Ok(scale) => Ok(Harmony::Scale(scale)),
            Err(_) => self.chord(name, root).map(Harmony::Chord),
        }
    }

    /// Pick a scale factory name at random (the chromatic scale is never picked)
    pub fn random_scale_name<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        let candidates: Vec<&str> = self
            .scale_method_names()
            .into_iter()
            .filter(|name| *name != RANDOM_SCALE_EXCLUDED)
            .collect();
        let pick = candidates.choose(rng).copied();
        debug!(?pick, "random scale");
        pick
    }

    /// Pick a chord factory name at random
    pub fn random_chord_name<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        let pick = self.chord_method_names().choose(rng).copied();
        debug!(?pick, "random chord");
        pick
    }

    /// Pick a chord or a scale with even odds, then a name of that kind
    pub fn random_chord_or_scale_name<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        if rng.gen_bool(0.5) {
            self.random_chord_name(rng)
                .or_else(|| self.random_scale_name(rng))
        } else {
            self.random_scale_name(rng)
                .or_else(|| self.random_chord_name(rng))
        }
    }

    fn canonical(&self, key: String) -> String {
        match self.aliases.get(&key) {
            Some(target) => target.clone(),
            None => key,
        }
    }
}

/// Lowercase, join words with underscores, and add the factory suffix
fn normalize(name: &str, suffix: &str) -> String {
    let mut key = name
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_");
    if !key.ends_with(suffix) {
        key.push_str(suffix);
    }
    key
}
