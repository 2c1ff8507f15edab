//! Ringside - Turn-Based Combat Resolution Engine

pub mod combatant;
pub mod core;
pub mod duel;
pub mod effect;
pub mod roster;
