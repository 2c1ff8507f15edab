//! Duel resolution: damage staging, scheduling, and the turn loop

pub mod constants;
pub mod damage;
pub mod engine;
pub mod events;
pub mod selector;

pub use damage::resolve_damage;
pub use engine::{Duel, DuelOutcome, TurnSlot};
pub use events::{DuelEvent, DuelLog, SkipReason};
pub use selector::{AbilitySelector, AlwaysFirst, NeverAct, ScriptedSelector};
