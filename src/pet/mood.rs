//! Mood state machine
//!
//! Most moods are derived fresh from the stats every update. Eating and
//! Sleeping are protected: once entered they suspend derivation and only
//! leave through their own exit conditions (timer elapsed, energy full) or an
//! explicit wake. Dead is terminal.

use crate::core::config::config;
use crate::pet::stats::Stats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavioral state of a pet
///
/// Eating carries the wall-clock timestamp it began at so its exit condition
/// is a total function of the variant. A `None` payload means the state was
/// restored from a record without a timestamp; the next update finishes the
/// meal immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mood {
    Idle,
    Happy,
    Hungry,
    Eating { started_at: Option<f64> },
    Sleeping,
    Sad,
    Sick,
    Dead,
}

impl Mood {
    /// Derive a mood from the stats, in priority order
    ///
    /// Never returns a protected state; those are entered by actions only.
    pub fn from_stats(stats: &Stats) -> Mood {
        let cfg = config();
        if stats.health <= 0 {
            Mood::Dead
        } else if stats.health < cfg.sick_health_threshold {
            Mood::Sick
        } else if stats.hunger < cfg.hungry_threshold {
            Mood::Hungry
        } else if stats.happiness < cfg.sad_threshold {
            Mood::Sad
        } else if stats.happiness > cfg.happy_happiness_threshold
            && stats.energy > cfg.happy_energy_threshold
        {
            Mood::Happy
        } else {
            Mood::Idle
        }
    }

    /// True for states that suspend stat-based mood derivation
    pub fn is_protected(&self) -> bool {
        matches!(self, Mood::Eating { .. } | Mood::Sleeping)
    }

    /// Plain tag for display and serialization
    pub fn kind(&self) -> MoodKind {
        match self {
            Mood::Idle => MoodKind::Idle,
            Mood::Happy => MoodKind::Happy,
            Mood::Hungry => MoodKind::Hungry,
            Mood::Eating { .. } => MoodKind::Eating,
            Mood::Sleeping => MoodKind::Sleeping,
            Mood::Sad => MoodKind::Sad,
            Mood::Sick => MoodKind::Sick,
            Mood::Dead => MoodKind::Dead,
        }
    }
}

/// Payload-free mood tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Idle,
    Happy,
    Hungry,
    Eating,
    Sleeping,
    Sad,
    Sick,
    Dead,
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoodKind::Idle => "idle",
            MoodKind::Happy => "happy",
            MoodKind::Hungry => "hungry",
            MoodKind::Eating => "eating",
            MoodKind::Sleeping => "sleeping",
            MoodKind::Sad => "sad",
            MoodKind::Sick => "sick",
            MoodKind::Dead => "dead",
        };
        write!(f, "{}", name)
    }
}
