//! Pet wandering movement
//!
//! Presentation-adjacent: kept in the simulation because it shares the update
//! cadence. The pet ambles along a 0-100 strip, occasionally turning around,
//! and bounces off the edges.

use crate::core::config::config;
use crate::pet::mood::Mood;
use crate::pet::Pet;
use rand::Rng;

/// Move the pet one wander step; still pets (sleeping, eating, dead) stay put
pub fn wander<R: Rng + ?Sized>(pet: &mut Pet, rng: &mut R) {
    if matches!(pet.mood, Mood::Sleeping | Mood::Dead | Mood::Eating { .. }) {
        return;
    }

    let cfg = config();

    if rng.gen_bool(cfg.direction_flip_chance) {
        pet.direction = -pet.direction;
    }

    pet.position += pet.direction * rng.gen_range(0..=2);

    if pet.position <= cfg.bounce_left_edge {
        pet.position = cfg.bounce_left_edge;
        pet.direction = 1;
    } else if pet.position >= cfg.bounce_right_edge {
        pet.position = cfg.bounce_right_edge;
        pet.direction = -1;
    }
}
