//! Save-record serialization and the on-disk save manager
//!
//! The record carries everything the simulation needs to resume after a gap
//! in wall-clock time: stats, mood, timestamps, and the fractional decay
//! accumulators. Records written before the accumulators existed load with
//! them defaulted to zero.

use crate::core::error::{PetError, Result};
use crate::core::types::Species;
use crate::pet::mood::{Mood, MoodKind};
use crate::pet::stats::Stats;
use crate::pet::Pet;
use crate::simulation::decay::DecayAccumulators;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Flat, versionless snapshot of a pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub name: String,
    pub species: Species,
    pub stats: Stats,
    pub mood: MoodKind,
    pub position: i32,
    pub direction: i32,
    /// Seconds since the Unix epoch
    pub created_at: f64,
    pub last_update: f64,
    pub eating_started_at: Option<f64>,
    #[serde(default)]
    pub accumulated_hunger_decay: f64,
    #[serde(default)]
    pub accumulated_happiness_decay: f64,
    #[serde(default)]
    pub accumulated_energy_decay: f64,
    #[serde(default)]
    pub accumulated_damage: f64,
}

impl Pet {
    /// Snapshot every observable field into a record
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            name: self.name.clone(),
            species: self.species,
            stats: self.stats.clone(),
            mood: self.mood_kind(),
            position: self.position,
            direction: self.direction,
            created_at: self.created_at,
            last_update: self.last_update,
            eating_started_at: self.eating_started_at(),
            accumulated_hunger_decay: self.accumulators.hunger,
            accumulated_happiness_decay: self.accumulators.happiness,
            accumulated_energy_decay: self.accumulators.energy,
            accumulated_damage: self.accumulators.damage,
        }
    }

    /// Rebuild a pet from a record; the exact inverse of `to_record`
    pub fn from_record(record: SaveRecord) -> Result<Pet> {
        if record.name.is_empty() {
            return Err(PetError::InvalidRecord("empty pet name".into()));
        }

        let mood = match record.mood {
            MoodKind::Idle => Mood::Idle,
            MoodKind::Happy => Mood::Happy,
            MoodKind::Hungry => Mood::Hungry,
            // A missing timestamp is allowed here; the next update treats
            // the meal as already finished.
            MoodKind::Eating => Mood::Eating {
                started_at: record.eating_started_at,
            },
            MoodKind::Sleeping => Mood::Sleeping,
            MoodKind::Sad => Mood::Sad,
            MoodKind::Sick => Mood::Sick,
            MoodKind::Dead => Mood::Dead,
        };

        let mut stats = record.stats;
        stats.clamp();

        Ok(Pet {
            name: record.name,
            species: record.species,
            stats,
            mood,
            position: record.position,
            direction: record.direction,
            created_at: record.created_at,
            last_update: record.last_update,
            accumulators: DecayAccumulators {
                hunger: record.accumulated_hunger_decay,
                happiness: record.accumulated_happiness_decay,
                energy: record.accumulated_energy_decay,
                damage: record.accumulated_damage,
            },
        })
    }
}

/// Manages the single JSON save file
pub struct SaveManager {
    save_file: PathBuf,
}

impl SaveManager {
    /// Save manager rooted at `save_dir`, creating the directory if needed
    pub fn new(save_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = save_dir.as_ref();
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            save_file: dir.join("save.json"),
        })
    }

    /// Default location under the user's home directory
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pocketpet")
    }

    pub fn save_path(&self) -> &Path {
        &self.save_file
    }

    /// Write the pet's record to disk
    pub fn save(&self, pet: &Pet) -> Result<()> {
        let json = serde_json::to_string_pretty(&pet.to_record())?;
        std::fs::write(&self.save_file, json)?;
        tracing::debug!("saved {} to {}", pet.name, self.save_file.display());
        Ok(())
    }

    /// Load the saved pet, if any
    pub fn load(&self) -> Result<Pet> {
        if !self.save_file.exists() {
            return Err(PetError::NoSaveFile);
        }
        let json = std::fs::read_to_string(&self.save_file)?;
        let record: SaveRecord = serde_json::from_str(&json)?;
        Pet::from_record(record)
    }

    pub fn has_save(&self) -> bool {
        self.save_file.exists()
    }

    /// Remove the save file (terminal handling after death)
    pub fn delete(&self) -> Result<()> {
        if self.save_file.exists() {
            std::fs::remove_file(&self.save_file)?;
        }
        Ok(())
    }
}
