//! Fighter state
//!
//! Health is clamped to `0.0..=max_health` at every mutation. Abilities
//! are shared immutable trees; the two effect queues are exclusively
//! owned by this fighter and drained at the start of its own turn.

use std::sync::Arc;

use serde::Serialize;

use crate::combatant::style::FightStyle;
use crate::effect::{Ability, Command};

/// A command waiting on a fighter's delayed or recurring queue
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEffect {
    /// Turns left before firing (delayed) or firings left (recurring)
    pub remaining: u32,
    pub effect: Command,
}

/// A duel participant
#[derive(Debug, Clone)]
pub struct Fighter {
    pub name: String,
    pub style: FightStyle,
    pub max_health: f64,
    pub current_health: f64,
    pub in_ring: bool,
    pub abilities: Vec<Arc<Ability>>,
    pub delayed: Vec<ScheduledEffect>,
    pub recurring: Vec<ScheduledEffect>,
}

/// Per-turn status snapshot consumed by display collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterStatus {
    pub name: String,
    pub current_health: f64,
    pub style: FightStyle,
    pub in_ring: bool,
}

impl Fighter {
    pub fn new(name: impl Into<String>, style: FightStyle, max_health: f64) -> Self {
        Self {
            name: name.into(),
            style,
            max_health,
            current_health: max_health,
            in_ring: true,
            abilities: Vec::new(),
            delayed: Vec::new(),
            recurring: Vec::new(),
        }
    }

    /// Subtract already-resolved damage, clamped at zero
    pub fn apply_damage(&mut self, amount: f64) {
        self.current_health = (self.current_health - amount).max(0.0);
    }

    /// Restore health, clamped at max
    pub fn heal(&mut self, amount: f64) {
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0.0
    }

    pub fn learn(&mut self, ability: Arc<Ability>) {
        self.abilities.push(ability);
    }

    pub fn status(&self) -> FighterStatus {
        FighterStatus {
            name: self.name.clone(),
            current_health: self.current_health,
            style: self.style,
            in_ring: self.in_ring,
        }
    }
}
