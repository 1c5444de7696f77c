//! Simulation systems: decay, actions, movement, and the update tick

pub mod actions;
pub mod decay;
pub mod events;
pub mod movement;
pub mod tick;
