//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the pet simulation
///
/// These values reproduce the original game's pacing. Changing them will
/// affect how quickly a neglected pet deteriorates.
#[derive(Debug, Clone)]
pub struct SimConfig {
    // === DECAY ENGINE ===
    /// Elapsed seconds that make up one decay unit
    ///
    /// All accrual rates below are expressed per decay unit, so at the
    /// default of 10.0 a hunger rate of 50 means 5 hunger lost per second.
    pub decay_unit_seconds: f64,

    /// Hunger lost per decay unit, before species scaling
    pub hunger_rate: f64,

    /// Happiness lost per decay unit, before species scaling
    pub happiness_rate: f64,

    /// Energy lost per decay unit, before species scaling
    ///
    /// Suspended entirely while the pet sleeps.
    pub energy_rate: f64,

    // === HEALTH DAMAGE ===
    /// Damage per decay unit while hunger is 0
    pub starving_damage_rate: f64,

    /// Damage per decay unit while happiness is at or below `misery_threshold`
    pub misery_damage_rate: f64,

    /// Damage per decay unit while energy is 0
    pub exhaustion_damage_rate: f64,

    /// Happiness level at or below which misery damage accrues
    pub misery_threshold: i32,

    // === PROTECTED STATES ===
    /// Seconds an eating animation lasts before the pet returns to idle
    pub eating_duration_seconds: f64,

    /// Flat energy gained per update call while sleeping
    ///
    /// Deliberately per-call rather than time-scaled: sleep recovery is a
    /// gameplay pause, not part of the wall-clock decay model. Reaching
    /// full energy wakes the pet automatically.
    pub sleep_energy_regen: i32,

    // === MOOD THRESHOLDS ===
    /// Health below which the pet is sick
    pub sick_health_threshold: i32,

    /// Hunger below which the pet is hungry
    pub hungry_threshold: i32,

    /// Happiness below which the pet is sad
    pub sad_threshold: i32,

    /// Happiness above which the pet can be happy
    pub happy_happiness_threshold: i32,

    /// Energy above which the pet can be happy
    pub happy_energy_threshold: i32,

    // === ACTIONS ===
    /// Hunger at or above which feeding is refused
    pub feed_refusal_threshold: i32,

    /// Energy at or above which sleeping is refused
    pub sleep_refusal_threshold: i32,

    /// Health at or above which healing is refused
    pub heal_refusal_threshold: i32,

    /// Energy below which playing is refused
    pub play_energy_minimum: i32,

    /// Hunger restored by one feeding, before food_efficiency scaling
    pub food_value: i32,

    /// Happiness gained from one feeding
    pub feed_happiness_bonus: i32,

    /// Happiness gained from one play session
    pub play_happiness_bonus: i32,

    /// Energy spent by one play session
    pub play_energy_cost: i32,

    /// Hunger spent by one play session
    pub play_hunger_cost: i32,

    /// Health restored by one healing
    pub heal_amount: i32,

    // === MOVEMENT ===
    /// Leftmost screen position the pet bounces off
    pub bounce_left_edge: i32,

    /// Rightmost screen position the pet bounces off
    pub bounce_right_edge: i32,

    /// Chance per update that a wandering pet turns around
    pub direction_flip_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Decay (per-second rates: hunger 5, happiness 3, energy 2)
            decay_unit_seconds: 10.0,
            hunger_rate: 50.0,
            happiness_rate: 30.0,
            energy_rate: 20.0,

            // Damage (per-second rates: starving 3, misery 1, exhaustion 2)
            starving_damage_rate: 30.0,
            misery_damage_rate: 10.0,
            exhaustion_damage_rate: 20.0,
            misery_threshold: 20,

            eating_duration_seconds: 3.0,
            sleep_energy_regen: 10,

            // Mood thresholds
            sick_health_threshold: 30,
            hungry_threshold: 20,
            sad_threshold: 30,
            happy_happiness_threshold: 80,
            happy_energy_threshold: 60,

            // Actions
            feed_refusal_threshold: 95,
            sleep_refusal_threshold: 95,
            heal_refusal_threshold: 95,
            play_energy_minimum: 20,
            food_value: 30,
            feed_happiness_bonus: 10,
            play_happiness_bonus: 20,
            play_energy_cost: 15,
            play_hunger_cost: 10,
            heal_amount: 30,

            // Movement
            bounce_left_edge: 10,
            bounce_right_edge: 90,
            direction_flip_chance: 0.1,
        }
    }
}

impl SimConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.decay_unit_seconds <= 0.0 {
            return Err("decay_unit_seconds must be positive".into());
        }

        if self.hunger_rate < 0.0 || self.happiness_rate < 0.0 || self.energy_rate < 0.0 {
            return Err("decay rates must be non-negative".into());
        }

        if self.eating_duration_seconds < 0.0 {
            return Err("eating_duration_seconds must be non-negative".into());
        }

        if self.bounce_left_edge >= self.bounce_right_edge {
            return Err(format!(
                "bounce_left_edge ({}) must be < bounce_right_edge ({})",
                self.bounce_left_edge, self.bounce_right_edge
            ));
        }

        if !(0.0..=1.0).contains(&self.direction_flip_chance) {
            return Err("direction_flip_chance must be within [0, 1]".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimConfig {
    CONFIG.get_or_init(SimConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimConfig) -> std::result::Result<(), SimConfig> {
    CONFIG.set(config)
}
