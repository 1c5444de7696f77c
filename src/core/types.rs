//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Species enumeration
///
/// Selects the trait multipliers applied to stat decay and feeding
/// (see `crate::pet::species`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
    Dragon,
    Bunny,
    Alien,
}

impl Species {
    /// All species, in selection-menu order
    pub const ALL: [Species; 5] = [
        Species::Cat,
        Species::Dog,
        Species::Dragon,
        Species::Bunny,
        Species::Alien,
    ];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Dragon => "dragon",
            Species::Bunny => "bunny",
            Species::Alien => "alien",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            "dragon" => Ok(Species::Dragon),
            "bunny" => Ok(Species::Bunny),
            "alien" => Ok(Species::Alien),
            other => Err(format!("unknown species: {}", other)),
        }
    }
}

/// Horizontal facing for pet movement. Serialized as -1 (left) / 1 (right).
pub const DIRECTION_LEFT: i32 = -1;
pub const DIRECTION_RIGHT: i32 = 1;
