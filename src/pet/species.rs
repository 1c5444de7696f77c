//! Species-specific trait multipliers
//!
//! Each species scales the base decay rates and how much a feeding is worth.
//! The table is immutable static data; every pet of a species shares the same
//! entry by reference.

use crate::core::types::Species;

/// Multipliers applied on top of the base rates in `SimConfig`
///
/// Decay multipliers above 1.0 mean the stat drains faster than baseline;
/// `food_efficiency` above 1.0 means feeding restores more hunger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTraits {
    pub hunger_decay: f64,
    pub happiness_decay: f64,
    pub energy_decay: f64,
    pub food_efficiency: f64,
}

/// Independent but needy: drains happiness slowly, converts food well.
const CAT: SpeciesTraits = SpeciesTraits {
    hunger_decay: 1.0,
    happiness_decay: 0.8,
    energy_decay: 0.7,
    food_efficiency: 1.2,
};

/// High-maintenance companion: bores quickly, eats plainly.
const DOG: SpeciesTraits = SpeciesTraits {
    hunger_decay: 1.2,
    happiness_decay: 1.5,
    energy_decay: 1.0,
    food_efficiency: 1.0,
};

/// Huge appetite, poor food conversion.
const DRAGON: SpeciesTraits = SpeciesTraits {
    hunger_decay: 1.5,
    happiness_decay: 0.9,
    energy_decay: 0.8,
    food_efficiency: 0.8,
};

const BUNNY: SpeciesTraits = SpeciesTraits {
    hunger_decay: 0.8,
    happiness_decay: 1.0,
    energy_decay: 0.9,
    food_efficiency: 1.5,
};

/// Barely eats, barely tires, but craves stimulation.
const ALIEN: SpeciesTraits = SpeciesTraits {
    hunger_decay: 0.5,
    happiness_decay: 1.2,
    energy_decay: 0.6,
    food_efficiency: 2.0,
};

impl Species {
    /// Trait multipliers for this species
    pub const fn traits(self) -> &'static SpeciesTraits {
        match self {
            Species::Cat => &CAT,
            Species::Dog => &DOG,
            Species::Dragon => &DRAGON,
            Species::Bunny => &BUNNY,
            Species::Alien => &ALIEN,
        }
    }
}
