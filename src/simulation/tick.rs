//! Update orchestration
//!
//! `run_update` is the single entry point that advances a pet, called once
//! per polling interval by the game loop (or a test). The order of steps is
//! load-bearing:
//!
//! 1. Dead pets short-circuit to an empty event list
//! 2. Elapsed time is measured and age advanced
//! 3. The eating timer may expire
//! 4. Stat decay and neglect damage accrue
//! 5. Sleeping pets regain energy and may auto-wake
//! 6. Stats are clamped
//! 7. Mood is re-derived unless a protected state survived
//! 8. The pet wanders
//!
//! All timing comes from the `now` argument; the simulation never reads a
//! clock itself, so callers can replay arbitrary schedules, including
//! multi-hour gaps after loading a save.

use crate::core::config::config;
use crate::pet::mood::Mood;
use crate::pet::stats::STAT_MAX;
use crate::pet::Pet;
use crate::simulation::events::PetEvent;
use crate::simulation::movement::wander;
use rand::Rng;

/// Advance the pet to wall-clock time `now`, returning this cycle's events
pub fn run_update<R: Rng + ?Sized>(pet: &mut Pet, now: f64, rng: &mut R) -> Vec<PetEvent> {
    let mut events = Vec::new();

    if !pet.is_alive() {
        pet.mood = Mood::Dead;
        return events;
    }

    let cfg = config();
    let elapsed = (now - pet.last_update).max(0.0);
    pet.last_update = now;
    pet.stats.age = (now - pet.created_at).max(0.0) as u64;

    // Eating finishes after its fixed duration. A missing start timestamp
    // (stale save record) counts as finished.
    if let Mood::Eating { started_at } = pet.mood {
        let finished = match started_at {
            Some(start) => now - start >= cfg.eating_duration_seconds,
            None => true,
        };
        if finished {
            pet.mood = Mood::Idle;
            events.push(PetEvent::FinishedEating {
                name: pet.name.clone(),
            });
        }
    }

    let sleeping = pet.mood == Mood::Sleeping;
    let traits = pet.traits();
    pet.accumulators
        .accrue_decay(&mut pet.stats, traits, elapsed, sleeping);

    if pet.stats.hunger == 0 {
        events.push(PetEvent::Starving {
            name: pet.name.clone(),
        });
    }
    if pet.stats.energy == 0 {
        events.push(PetEvent::Exhausted {
            name: pet.name.clone(),
        });
    }

    let damage = pet.accumulators.accrue_damage(&mut pet.stats, elapsed);
    if damage > 0 {
        tracing::debug!(
            "{} took {} neglect damage, health now {}",
            pet.name,
            damage,
            pet.stats.health
        );
        let has_specific_cause = events.iter().any(|e| {
            matches!(e, PetEvent::Starving { .. } | PetEvent::Exhausted { .. })
        });
        if !has_specific_cause {
            events.push(PetEvent::Suffering {
                name: pet.name.clone(),
                damage,
            });
        }
    }

    // Sleep recovery is a flat per-call credit, not time-scaled
    if pet.mood == Mood::Sleeping {
        pet.stats.energy = (pet.stats.energy + cfg.sleep_energy_regen).min(STAT_MAX);
        if pet.stats.energy >= STAT_MAX {
            pet.mood = Mood::Idle;
            events.push(PetEvent::WokeUpRefreshed {
                name: pet.name.clone(),
            });
        }
    }

    pet.stats.clamp();

    if !pet.is_alive() {
        tracing::info!("{} has died", pet.name);
        pet.mood = Mood::Dead;
    } else if !pet.mood.is_protected() {
        pet.mood = Mood::from_stats(&pet.stats);
    }

    wander(pet, rng);

    events
}
