//! User-initiated action handlers
//!
//! Each handler is a guarded transition: preconditions are checked in a fixed
//! order and the first failure returns a descriptive message without touching
//! the pet. Precondition failures are ordinary gameplay outcomes, never
//! errors.
//!
//! Consistency rule: actions that need the pet awake (`feed`, `play`) are
//! refused while it sleeps; passive care (`heal`) is allowed and leaves the
//! pet sleeping.

use crate::core::config::config;
use crate::pet::mood::Mood;
use crate::pet::stats::STAT_MAX;
use crate::pet::Pet;

/// Feed the pet, starting a timed eating state
pub fn feed(pet: &mut Pet, now: f64) -> String {
    let cfg = config();

    if !pet.is_alive() {
        return "Cannot feed a dead pet...".to_string();
    }
    if matches!(pet.mood, Mood::Eating { .. }) {
        return format!("{} is already eating!", pet.name);
    }
    if pet.mood == Mood::Sleeping {
        return format!("{} is sleeping! Zzz...", pet.name);
    }
    if pet.stats.hunger >= cfg.feed_refusal_threshold {
        return format!("{} is not hungry!", pet.name);
    }

    pet.mood = Mood::Eating {
        started_at: Some(now),
    };
    let food_value = (cfg.food_value as f64 * pet.traits().food_efficiency) as i32;
    pet.stats.hunger = (pet.stats.hunger + food_value).min(STAT_MAX);
    pet.stats.happiness = (pet.stats.happiness + cfg.feed_happiness_bonus).min(STAT_MAX);

    format!("Fed {}! Yum yum!", pet.name)
}

/// Play with the pet, trading energy and hunger for happiness
pub fn play(pet: &mut Pet) -> String {
    let cfg = config();

    if !pet.is_alive() {
        return "Cannot play with a dead pet...".to_string();
    }
    if matches!(pet.mood, Mood::Eating { .. }) {
        return format!("{} is busy eating!", pet.name);
    }
    if pet.mood == Mood::Sleeping {
        return format!("{} is sleeping! Zzz...", pet.name);
    }
    if pet.stats.energy < cfg.play_energy_minimum {
        return format!("{} is too tired to play!", pet.name);
    }

    pet.stats.happiness = (pet.stats.happiness + cfg.play_happiness_bonus).min(STAT_MAX);
    pet.stats.energy = (pet.stats.energy - cfg.play_energy_cost).max(0);
    pet.stats.hunger = (pet.stats.hunger - cfg.play_hunger_cost).max(0);
    pet.mood = Mood::Happy;

    format!("Playing with {}! So much fun!", pet.name)
}

/// Put the pet to sleep; it wakes on its own at full energy
pub fn sleep(pet: &mut Pet) -> String {
    let cfg = config();

    if !pet.is_alive() {
        return "Cannot put a dead pet to sleep...".to_string();
    }
    if matches!(pet.mood, Mood::Eating { .. }) {
        return format!("{} is busy eating!", pet.name);
    }
    if pet.stats.energy >= cfg.sleep_refusal_threshold {
        return format!("{} is not tired!", pet.name);
    }

    pet.mood = Mood::Sleeping;
    format!("{} is sleeping... Zzz", pet.name)
}

/// Wake a sleeping pet; a no-op with a message otherwise
pub fn wake_up(pet: &mut Pet) -> String {
    if pet.mood == Mood::Sleeping {
        pet.mood = Mood::Idle;
        format!("{} woke up!", pet.name)
    } else {
        format!("{} is not sleeping!", pet.name)
    }
}

/// Heal the pet; allowed while sleeping, refused near full health
pub fn heal(pet: &mut Pet) -> String {
    let cfg = config();

    if !pet.is_alive() {
        return "Cannot heal a dead pet...".to_string();
    }
    if matches!(pet.mood, Mood::Eating { .. }) {
        return format!("{} is busy eating!", pet.name);
    }
    if pet.stats.health >= cfg.heal_refusal_threshold {
        return format!("{} is healthy!", pet.name);
    }

    pet.stats.health = (pet.stats.health + cfg.heal_amount).min(STAT_MAX);
    format!("Healed {}!", pet.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Species;

    fn pet() -> Pet {
        Pet::new("Whiskers", Species::Cat, 100.0)
    }

    #[test]
    fn test_feed_starts_eating_with_timestamp() {
        let mut pet = pet();
        pet.stats.hunger = 50;

        let msg = feed(&mut pet, 100.0);

        assert!(msg.contains("Yum yum"));
        assert_eq!(pet.mood, Mood::Eating {
            started_at: Some(100.0)
        });
        // Cat food efficiency 1.2: 30 * 1.2 = 36
        assert_eq!(pet.stats.hunger, 86);
        assert_eq!(pet.stats.happiness, 100);
    }

    #[test]
    fn test_feed_refused_while_eating() {
        let mut pet = pet();
        pet.stats.hunger = 50;
        feed(&mut pet, 100.0);
        let hunger_after_first = pet.stats.hunger;

        let msg = feed(&mut pet, 101.0);

        assert!(msg.contains("already eating"));
        assert_eq!(pet.stats.hunger, hunger_after_first);
    }

    #[test]
    fn test_feed_refused_when_full() {
        let mut pet = pet();
        pet.stats.hunger = 96;
        let msg = feed(&mut pet, 100.0);
        assert!(msg.contains("not hungry"));
        assert_eq!(pet.mood, Mood::Idle);
    }

    #[test]
    fn test_feed_refused_while_sleeping() {
        let mut pet = pet();
        pet.stats.hunger = 50;
        pet.mood = Mood::Sleeping;
        let msg = feed(&mut pet, 100.0);
        assert!(msg.contains("sleeping"));
        assert_eq!(pet.mood, Mood::Sleeping);
        assert_eq!(pet.stats.hunger, 50);
    }

    #[test]
    fn test_feed_caps_at_full_hunger() {
        let mut pet = pet();
        pet.stats.hunger = 90;
        feed(&mut pet, 100.0);
        assert_eq!(pet.stats.hunger, 100);
    }

    #[test]
    fn test_dragon_gets_less_from_food() {
        let mut dragon = Pet::new("Puff", Species::Dragon, 0.0);
        dragon.stats.hunger = 50;
        feed(&mut dragon, 0.0);
        // 30 * 0.8 = 24
        assert_eq!(dragon.stats.hunger, 74);
    }

    #[test]
    fn test_play_trades_stats_and_sets_happy() {
        let mut pet = pet();
        pet.stats.happiness = 50;

        let msg = play(&mut pet);

        assert!(msg.contains("fun"));
        assert_eq!(pet.stats.happiness, 70);
        assert_eq!(pet.stats.energy, 85);
        assert_eq!(pet.stats.hunger, 90);
        assert_eq!(pet.mood, Mood::Happy);
    }

    #[test]
    fn test_play_refused_when_tired() {
        let mut pet = pet();
        pet.stats.energy = 15;
        let happiness = pet.stats.happiness;

        let msg = play(&mut pet);

        assert!(msg.contains("too tired"));
        assert_eq!(pet.stats.happiness, happiness);
    }

    #[test]
    fn test_play_never_drives_hunger_negative() {
        let mut pet = pet();
        pet.stats.hunger = 4;
        play(&mut pet);
        assert_eq!(pet.stats.hunger, 0);
    }

    #[test]
    fn test_sleep_and_wake() {
        let mut pet = pet();
        pet.stats.energy = 50;

        let msg = sleep(&mut pet);
        assert!(msg.contains("Zzz"));
        assert_eq!(pet.mood, Mood::Sleeping);

        let msg = wake_up(&mut pet);
        assert!(msg.contains("woke up"));
        assert_eq!(pet.mood, Mood::Idle);
    }

    #[test]
    fn test_sleep_refused_at_full_energy() {
        let mut pet = pet();
        pet.stats.energy = 98;
        let msg = sleep(&mut pet);
        assert!(msg.contains("not tired"));
        assert_ne!(pet.mood, Mood::Sleeping);
    }

    #[test]
    fn test_wake_refused_when_awake() {
        let mut pet = pet();
        let msg = wake_up(&mut pet);
        assert!(msg.contains("not sleeping"));
        assert_eq!(pet.mood, Mood::Idle);
    }

    #[test]
    fn test_heal_restores_health() {
        let mut pet = pet();
        pet.stats.health = 40;
        let msg = heal(&mut pet);
        assert!(msg.contains("Healed"));
        assert_eq!(pet.stats.health, 70);
    }

    #[test]
    fn test_heal_refused_when_healthy() {
        let mut pet = pet();
        pet.stats.health = 95;
        let msg = heal(&mut pet);
        assert!(msg.contains("healthy"));
        assert_eq!(pet.stats.health, 95);
    }

    #[test]
    fn test_heal_allowed_while_sleeping() {
        let mut pet = pet();
        pet.stats.health = 40;
        pet.mood = Mood::Sleeping;
        heal(&mut pet);
        assert_eq!(pet.stats.health, 70);
        assert_eq!(pet.mood, Mood::Sleeping);
    }

    #[test]
    fn test_dead_pet_refuses_everything() {
        let mut pet = pet();
        pet.stats.health = 0;
        pet.mood = Mood::Dead;
        let before = pet.clone();

        assert!(feed(&mut pet, 100.0).contains("dead"));
        assert!(play(&mut pet).contains("dead"));
        assert!(sleep(&mut pet).contains("dead"));
        assert!(heal(&mut pet).contains("dead"));
        assert!(wake_up(&mut pet).contains("not sleeping"));

        assert_eq!(pet, before);
    }
}
