// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for harmony sessions.
//!
//! A harmony file names a root note, the default scale and chord factories,
//! an optional seed for random picks, and any custom interval sets to
//! register next to the built-ins.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::music::{CustomDefinition, HarmonyRegistry, Note};

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HarmonyFile {
    /// Session settings
    #[serde(default)]
    pub harmony: HarmonyConfig,
    /// Extra scales, registered by name
    #[serde(default)]
    pub custom_scales: Vec<CustomDefinition>,
    /// Extra chords, registered by name
    #[serde(default)]
    pub custom_chords: Vec<CustomDefinition>,
}

impl HarmonyFile {
    /// Load a harmony configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = ?path.as_ref(), "loading harmony file");
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a harmony configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// The configured root note
    pub fn root_note(&self) -> Result<Note> {
        Note::from_name_in_octave(self.harmony.root.trim(), self.harmony.octave)
            .with_context(|| format!("Invalid root note: {:?}", self.harmony.root))
    }

    /// Built-in registry with this file's custom definitions added
    pub fn registry(&self) -> Result<HarmonyRegistry> {
        let mut registry = HarmonyRegistry::with_builtins();
        for def in &self.custom_scales {
            registry
                .register_scale(def.clone())
                .with_context(|| format!("Invalid custom scale: {:?}", def.name))?;
        }
        for def in &self.custom_chords {
            registry.register_chord(def.clone());
        }
        debug!(
            scales = self.custom_scales.len(),
            chords = self.custom_chords.len(),
            "registered custom definitions"
        );
        Ok(registry)
    }

    /// Check that the root and both default factory names resolve
    pub fn validate(&self) -> Result<()> {
        self.root_note()?;
        let registry = self.registry()?;
        registry
            .resolve_scale(&self.harmony.scale)
            .context("Invalid default scale")?;
        registry
            .resolve_chord(&self.harmony.chord)
            .context("Invalid default chord")?;
        Ok(())
    }
}

/// Session-level settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarmonyConfig {
    /// Root pitch-class name (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub root: String,
    /// MIDI octave of the root (C4 = 60)
    #[serde(default = "default_octave")]
    pub octave: i32,
    /// Default scale factory name
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Default chord factory name
    #[serde(default = "default_chord")]
    pub chord: String,
    /// Seed for random picks; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_root() -> String {
    "C".to_string()
}
fn default_octave() -> i32 {
    4
}
fn default_scale() -> String {
    "major_scale".to_string()
}
fn default_chord() -> String {
    "major_chord".to_string()
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            octave: default_octave(),
            scale: default_scale(),
            chord: default_chord(),
            seed: None,
        }
    }
}

/// Load and validate a harmony file
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<HarmonyFile> {
    let file = HarmonyFile::load(path)?;
    file.validate()?;
    Ok(file)
}
