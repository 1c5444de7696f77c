//! The pet aggregate and its component models

pub mod mood;
pub mod species;
pub mod stats;

use crate::core::types::{Species, DIRECTION_RIGHT};
use crate::pet::mood::{Mood, MoodKind};
use crate::pet::species::SpeciesTraits;
use crate::pet::stats::Stats;
use crate::simulation::decay::DecayAccumulators;

/// Starting on-screen position, middle of the 0-100 strip
pub const START_POSITION: i32 = 50;

/// A single virtual pet
///
/// All simulation state lives here; the pet is advanced exclusively through
/// `simulation::tick::run_update` and the handlers in `simulation::actions`.
/// Timestamps are seconds since the Unix epoch so a saved pet resumes
/// correctly after arbitrary idle gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub name: String,
    pub species: Species,
    pub stats: Stats,
    pub mood: Mood,
    /// On-screen position in 0-100, presentation-adjacent
    pub position: i32,
    /// -1 facing left, 1 facing right
    pub direction: i32,
    pub created_at: f64,
    pub last_update: f64,
    pub accumulators: DecayAccumulators,
}

impl Pet {
    /// Create a fresh pet with full stats at time `now`
    pub fn new(name: impl Into<String>, species: Species, now: f64) -> Self {
        Self {
            name: name.into(),
            species,
            stats: Stats::default(),
            mood: Mood::Idle,
            position: START_POSITION,
            direction: DIRECTION_RIGHT,
            created_at: now,
            last_update: now,
            accumulators: DecayAccumulators::default(),
        }
    }

    /// A pet is alive while it has any health left; death is irreversible
    pub fn is_alive(&self) -> bool {
        self.stats.health > 0
    }

    /// Trait multipliers for this pet's species
    pub fn traits(&self) -> &'static SpeciesTraits {
        self.species.traits()
    }

    /// Payload-free mood tag, for display and persistence
    pub fn mood_kind(&self) -> MoodKind {
        self.mood.kind()
    }

    /// Timestamp the current meal began at, if the pet is eating
    pub fn eating_started_at(&self) -> Option<f64> {
        match self.mood {
            Mood::Eating { started_at } => started_at,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pet_starts_idle_and_full() {
        let pet = Pet::new("Whiskers", Species::Cat, 1_000.0);
        assert!(pet.is_alive());
        assert_eq!(pet.mood, Mood::Idle);
        assert_eq!(pet.stats, Stats::default());
        assert_eq!(pet.position, START_POSITION);
        assert_eq!(pet.created_at, 1_000.0);
        assert_eq!(pet.last_update, 1_000.0);
        assert_eq!(pet.eating_started_at(), None);
    }

    #[test]
    fn test_zero_health_means_dead() {
        let mut pet = Pet::new("Rex", Species::Dog, 0.0);
        pet.stats.health = 0;
        assert!(!pet.is_alive());
    }
}
