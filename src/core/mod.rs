//! Core types, configuration, errors, and the time source

pub mod clock;
pub mod config;
pub mod error;
pub mod types;
