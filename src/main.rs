//! Pocketpet - Entry Point
//!
//! Headless driver: creates or resumes a pet, polls the simulation once per
//! second, prints events, and autosaves. Rendering and interactive input
//! belong to other frontends; this binary only exercises the core loop.

use clap::Parser;
use pocketpet::core::clock::{Clock, SystemClock};
use pocketpet::core::error::{PetError, Result};
use pocketpet::core::types::Species;
use pocketpet::persistence::SaveManager;
use pocketpet::pet::Pet;
use pocketpet::simulation::tick::run_update;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pocketpet", about = "Virtual pet simulation")]
struct Args {
    /// Pet name (used when starting a fresh pet)
    #[arg(long, default_value = "Mochi")]
    name: String,

    /// Pet species: cat, dog, dragon, bunny, alien
    #[arg(long, default_value = "cat")]
    species: Species,

    /// How many seconds to run before saving and exiting
    #[arg(long, default_value_t = 60)]
    run_seconds: u64,

    /// Seed for movement jitter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Save directory (defaults to ~/.pocketpet)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Resume the saved pet instead of creating a new one
    #[arg(long)]
    resume: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocketpet=info".into()),
        )
        .init();

    let args = Args::parse();
    let clock = SystemClock;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let save_dir = args.save_dir.unwrap_or_else(SaveManager::default_dir);
    let saves = SaveManager::new(&save_dir)?;

    let mut pet = if args.resume {
        match saves.load() {
            Ok(pet) => {
                tracing::info!("resumed {} the {}", pet.name, pet.species);
                pet
            }
            Err(PetError::NoSaveFile) => {
                tracing::warn!("no save found, starting fresh");
                Pet::new(args.name, args.species, clock.now())
            }
            Err(e) => return Err(e),
        }
    } else {
        Pet::new(args.name, args.species, clock.now())
    };

    println!("{} the {} | mood: {}", pet.name, pet.species, pet.mood_kind());

    let mut last_autosave = clock.now();
    let deadline = clock.now() + args.run_seconds as f64;

    while pet.is_alive() && clock.now() < deadline {
        std::thread::sleep(Duration::from_secs(1));

        let now = clock.now();
        for event in run_update(&mut pet, now, &mut rng) {
            println!("{}", event);
        }

        if now - last_autosave >= 30.0 {
            saves.save(&pet)?;
            last_autosave = now;
        }
    }

    if pet.is_alive() {
        saves.save(&pet)?;
        println!(
            "{} saved. hunger {} | happiness {} | energy {} | health {} | mood {}",
            pet.name,
            pet.stats.hunger,
            pet.stats.happiness,
            pet.stats.energy,
            pet.stats.health,
            pet.mood_kind()
        );
    } else {
        println!("{} has died... rest in peace.", pet.name);
        saves.delete()?;
    }

    Ok(())
}
