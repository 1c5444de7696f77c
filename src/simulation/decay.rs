//! Decay/accrual engine
//!
//! Elapsed wall-clock time is converted into fractional stat deltas which
//! collect in per-stat accumulators. Only whole units are ever applied to the
//! integer stats; the remainder carries over to the next update. This makes
//! the total decay over a span of time independent of how often the caller
//! polls (to within one unit of truncation), and nothing is lost between
//! calls.

use crate::core::config::config;
use crate::pet::species::SpeciesTraits;
use crate::pet::stats::Stats;
use serde::{Deserialize, Serialize};

/// Running fractional remainders for stat decay and health damage
///
/// All values are non-negative and strictly less than 1.0 after an update
/// has drained them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecayAccumulators {
    pub hunger: f64,
    pub happiness: f64,
    pub energy: f64,
    pub damage: f64,
}

/// Whole units applied to the stats by one decay pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayApplied {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub damage: i32,
}

/// Pull the whole-unit part out of an accumulator, truncating toward zero
///
/// Truncation (not rounding) is deliberate: it matches the integer display
/// stats exactly and keeps the remainder in [0, 1).
fn drain_whole_units(acc: &mut f64) -> i32 {
    if *acc >= 1.0 {
        let whole = acc.trunc();
        *acc -= whole;
        whole as i32
    } else {
        0
    }
}

impl DecayAccumulators {
    /// Accrue stat decay for `elapsed` seconds and apply whole units
    ///
    /// Energy does not decay while the pet sleeps. Stats floor at zero here;
    /// the decayed amount beyond the floor is simply lost, matching a pet
    /// that cannot get any hungrier.
    pub fn accrue_decay(
        &mut self,
        stats: &mut Stats,
        traits: &SpeciesTraits,
        elapsed: f64,
        sleeping: bool,
    ) -> DecayApplied {
        let cfg = config();
        let unit = elapsed / cfg.decay_unit_seconds;

        self.hunger += unit * cfg.hunger_rate * traits.hunger_decay;
        self.happiness += unit * cfg.happiness_rate * traits.happiness_decay;
        if !sleeping {
            self.energy += unit * cfg.energy_rate * traits.energy_decay;
        }

        let applied = DecayApplied {
            hunger: drain_whole_units(&mut self.hunger),
            happiness: drain_whole_units(&mut self.happiness),
            energy: drain_whole_units(&mut self.energy),
            damage: 0,
        };

        stats.hunger = (stats.hunger - applied.hunger).max(0);
        stats.happiness = (stats.happiness - applied.happiness).max(0);
        stats.energy = (stats.energy - applied.energy).max(0);

        applied
    }

    /// Accrue neglect damage for `elapsed` seconds and apply whole units
    ///
    /// Three sources feed one shared accumulator: starvation, misery, and
    /// exhaustion. Call after `accrue_decay` so the damage conditions see
    /// this update's stat values.
    pub fn accrue_damage(&mut self, stats: &mut Stats, elapsed: f64) -> i32 {
        let cfg = config();
        let unit = elapsed / cfg.decay_unit_seconds;

        if stats.hunger == 0 {
            self.damage += unit * cfg.starving_damage_rate;
        }
        if stats.happiness <= cfg.misery_threshold {
            self.damage += unit * cfg.misery_damage_rate;
        }
        if stats.energy == 0 {
            self.damage += unit * cfg.exhaustion_damage_rate;
        }

        let damage = drain_whole_units(&mut self.damage);
        stats.health = (stats.health - damage).max(0);
        damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Species;

    fn full_stats() -> Stats {
        Stats::default()
    }

    #[test]
    fn test_sub_unit_decay_accumulates_without_applying() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        // 0.1s at cat rates: hunger accrues 0.5, nothing applies yet
        let applied = acc.accrue_decay(&mut stats, Species::Cat.traits(), 0.1, false);
        assert_eq!(applied.hunger, 0);
        assert_eq!(stats.hunger, 100);
        assert!(acc.hunger > 0.0 && acc.hunger < 1.0);
    }

    #[test]
    fn test_whole_units_apply_and_remainder_carries() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        // 0.5s at cat rates: hunger accrues 2.5 -> apply 2, keep 0.5
        let applied = acc.accrue_decay(&mut stats, Species::Cat.traits(), 0.5, false);
        assert_eq!(applied.hunger, 2);
        assert_eq!(stats.hunger, 98);
        assert!((acc.hunger - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_energy_frozen_while_sleeping() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        acc.accrue_decay(&mut stats, Species::Cat.traits(), 5.0, true);
        assert_eq!(acc.energy, 0.0);
        assert_eq!(stats.energy, 100);
        // Hunger still decays during sleep
        assert!(stats.hunger < 100);
    }

    #[test]
    fn test_split_polling_matches_single_call() {
        let traits = Species::Cat.traits();

        let mut acc_one = DecayAccumulators::default();
        let mut stats_one = full_stats();
        acc_one.accrue_decay(&mut stats_one, traits, 7.3, false);

        let mut acc_many = DecayAccumulators::default();
        let mut stats_many = full_stats();
        for _ in 0..73 {
            acc_many.accrue_decay(&mut stats_many, traits, 0.1, false);
        }

        assert!((stats_one.hunger - stats_many.hunger).abs() <= 1);
        assert!((stats_one.happiness - stats_many.happiness).abs() <= 1);
        assert!((stats_one.energy - stats_many.energy).abs() <= 1);
    }

    #[test]
    fn test_starvation_damage_rate() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        stats.hunger = 0;
        // 3 damage per second while starving
        let damage = acc.accrue_damage(&mut stats, 10.0);
        assert_eq!(damage, 30);
        assert_eq!(stats.health, 70);
    }

    #[test]
    fn test_damage_sources_stack() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        stats.hunger = 0;
        stats.happiness = 20;
        stats.energy = 0;
        // 3 + 1 + 2 damage per second
        let damage = acc.accrue_damage(&mut stats, 1.0);
        assert_eq!(damage, 6);
    }

    #[test]
    fn test_no_damage_when_cared_for() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        let damage = acc.accrue_damage(&mut stats, 60.0);
        assert_eq!(damage, 0);
        assert_eq!(stats.health, 100);
        assert_eq!(acc.damage, 0.0);
    }

    #[test]
    fn test_health_floors_at_zero() {
        let mut acc = DecayAccumulators::default();
        let mut stats = full_stats();
        stats.hunger = 0;
        stats.health = 5;
        acc.accrue_damage(&mut stats, 100.0);
        assert_eq!(stats.health, 0);
    }
}
