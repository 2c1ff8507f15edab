//! Duel event log
//!
//! The engine records what happened each turn; display collaborators can
//! replay or format the log however they like.

use serde::Serialize;

use crate::duel::engine::DuelOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    OutOfRing,
    NoAbilities,
    Passed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DuelEvent {
    RoundStarted { round: u32 },
    GrapplerHealed { fighter: String, amount: f64 },
    DelayedFired { fighter: String, count: usize },
    RecurringFired { fighter: String, count: usize },
    TurnSkipped { fighter: String, reason: SkipReason },
    AbilityUsed { fighter: String, ability: String },
    DuelEnded { outcome: DuelOutcome },
}

/// Append-only log of a single duel
#[derive(Debug, Clone, Default)]
pub struct DuelLog {
    pub events: Vec<DuelEvent>,
}

impl DuelLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DuelEvent) {
        self.events.push(event);
    }
}
