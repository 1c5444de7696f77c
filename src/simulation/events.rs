//! Events generated during a simulation update
//!
//! These are returned by `run_update` for display in the caller's event log.

use std::fmt;

/// Something noteworthy that happened during one update cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetEvent {
    /// The eating timer elapsed and the pet returned to idle
    FinishedEating { name: String },
    /// Hunger sits at zero and health damage is accruing
    Starving { name: String },
    /// Energy sits at zero and health damage is accruing
    Exhausted { name: String },
    /// Accumulated damage was applied without a more specific cause shown
    Suffering { name: String, damage: i32 },
    /// Energy reached full while sleeping and the pet woke on its own
    WokeUpRefreshed { name: String },
}

impl fmt::Display for PetEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetEvent::FinishedEating { name } => write!(f, "{} finished eating!", name),
            PetEvent::Starving { name } => write!(f, "{} is starving!", name),
            PetEvent::Exhausted { name } => write!(f, "{} is exhausted!", name),
            PetEvent::Suffering { name, damage } => {
                write!(f, "{} is suffering! (-{} HP)", name, damage)
            }
            PetEvent::WokeUpRefreshed { name } => {
                write!(f, "{} woke up feeling refreshed!", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_messages() {
        let name = "Puff".to_string();
        assert_eq!(
            PetEvent::FinishedEating { name: name.clone() }.to_string(),
            "Puff finished eating!"
        );
        assert_eq!(
            PetEvent::Suffering {
                name,
                damage: 4
            }
            .to_string(),
            "Puff is suffering! (-4 HP)"
        );
    }
}
