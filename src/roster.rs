//! Prototype registry
//!
//! The roster is owned by the calling context and passed by reference;
//! the engine never holds global state. Fighter prototypes keep their
//! full health and empty queues; `spawn` clones a battle-fresh instance
//! whose ability list shares the registered trees by `Arc`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::combatant::{FightStyle, Fighter};
use crate::core::{EngineError, Result};
use crate::effect::Ability;

#[derive(Debug, Default)]
pub struct Roster {
    fighters: BTreeMap<String, Fighter>,
    abilities: BTreeMap<String, Arc<Ability>>,
}

/// On-disk roster format
#[derive(Debug, Deserialize)]
struct RosterFile {
    fighters: Vec<FighterDef>,
    abilities: Vec<Ability>,
    #[serde(default)]
    teach: Vec<TeachDef>,
}

#[derive(Debug, Deserialize)]
struct FighterDef {
    name: String,
    style: FightStyle,
    max_health: f64,
}

#[derive(Debug, Deserialize)]
struct TeachDef {
    fighter: String,
    ability: String,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a complete roster from its JSON representation
    pub fn from_json(text: &str) -> Result<Self> {
        let file: RosterFile = serde_json::from_str(text)?;
        let mut roster = Roster::new();
        for def in file.fighters {
            roster.register_fighter(&def.name, def.style, def.max_health)?;
        }
        for ability in file.abilities {
            roster.register_ability(ability)?;
        }
        for t in file.teach {
            roster.teach(&t.fighter, &t.ability)?;
        }
        Ok(roster)
    }

    pub fn register_fighter(
        &mut self,
        name: &str,
        style: FightStyle,
        max_health: f64,
    ) -> Result<()> {
        if self.fighters.contains_key(name) {
            return Err(EngineError::DuplicateName(name.to_string()));
        }
        self.fighters
            .insert(name.to_string(), Fighter::new(name, style, max_health));
        Ok(())
    }

    pub fn register_ability(&mut self, ability: Ability) -> Result<()> {
        if self.abilities.contains_key(&ability.name) {
            return Err(EngineError::DuplicateName(ability.name));
        }
        self.abilities
            .insert(ability.name.clone(), Arc::new(ability));
        Ok(())
    }

    /// Link a registered ability onto a registered fighter prototype
    pub fn teach(&mut self, fighter: &str, ability: &str) -> Result<()> {
        let shared = self
            .abilities
            .get(ability)
            .ok_or_else(|| EngineError::UnknownAbility(ability.to_string()))?
            .clone();
        let proto = self
            .fighters
            .get_mut(fighter)
            .ok_or_else(|| EngineError::UnknownFighter(fighter.to_string()))?;
        proto.learn(shared);
        Ok(())
    }

    /// Clone a battle-fresh fighter from its prototype: full health, in
    /// the ring, empty queues, abilities shared by reference
    pub fn spawn(&self, name: &str) -> Result<Fighter> {
        let proto = self
            .fighters
            .get(name)
            .ok_or_else(|| EngineError::UnknownFighter(name.to_string()))?;
        let mut fresh = Fighter::new(proto.name.clone(), proto.style, proto.max_health);
        fresh.abilities = proto.abilities.clone();
        Ok(fresh)
    }

    /// Registered fighter prototypes, in name order
    pub fn fighters(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.values()
    }
}
