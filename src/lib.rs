//! Pocketpet - Virtual Pet Simulation
//!
//! A tamagotchi-style pet whose needs decay over real wall-clock time.
//! The core is polled: callers invoke `simulation::tick::run_update` at their
//! own cadence and the engine converts elapsed time into stat changes, so the
//! pet behaves the same whether it is polled every 100ms or resumed after an
//! overnight gap.

pub mod core;
pub mod persistence;
pub mod pet;
pub mod simulation;
