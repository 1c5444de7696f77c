//! Pet statistics, clamped to their display range

use serde::{Deserialize, Serialize};

/// Lower bound for the four condition stats
pub const STAT_MIN: i32 = 0;
/// Upper bound for the four condition stats
pub const STAT_MAX: i32 = 100;

/// Pet statistics
///
/// The four condition stats (hunger, happiness, energy, health) are held in
/// [0, 100]; higher is better for all of them. Age counts seconds since the
/// pet was created. Level is carried along for the caller but never changed
/// by the simulation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub health: i32,
    /// Seconds since creation
    pub age: u64,
    pub level: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hunger: STAT_MAX,
            happiness: STAT_MAX,
            energy: STAT_MAX,
            health: STAT_MAX,
            age: 0,
            level: 1,
        }
    }
}

impl Stats {
    /// Clamp all four condition stats back into [0, 100]
    pub fn clamp(&mut self) {
        self.hunger = self.hunger.clamp(STAT_MIN, STAT_MAX);
        self.happiness = self.happiness.clamp(STAT_MIN, STAT_MAX);
        self.energy = self.energy.clamp(STAT_MIN, STAT_MAX);
        self.health = self.health.clamp(STAT_MIN, STAT_MAX);
    }

    /// True when every condition stat lies within [0, 100]
    pub fn in_bounds(&self) -> bool {
        let ok = |v: i32| (STAT_MIN..=STAT_MAX).contains(&v);
        ok(self.hunger) && ok(self.happiness) && ok(self.energy) && ok(self.health)
    }
}
