//! Ability selection collaborator
//!
//! The engine asks the selector for a 1-based index into the acting
//! fighter's ability list. Anything out of range (0 included) means
//! "pass this turn" and is never an error.

/// Supplies the acting fighter's ability choice each turn
pub trait AbilitySelector {
    fn select(&mut self, fighter: &str, abilities: &[&str]) -> usize;
}

/// Always picks the first ability
#[derive(Debug, Default)]
pub struct AlwaysFirst;

impl AbilitySelector for AlwaysFirst {
    fn select(&mut self, _fighter: &str, _abilities: &[&str]) -> usize {
        1
    }
}

/// Never acts; every turn is a pass
#[derive(Debug, Default)]
pub struct NeverAct;

impl AbilitySelector for NeverAct {
    fn select(&mut self, _fighter: &str, _abilities: &[&str]) -> usize {
        0
    }
}

/// Replays a fixed list of choices, then passes
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    choices: std::collections::VecDeque<usize>,
}

impl ScriptedSelector {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl AbilitySelector for ScriptedSelector {
    fn select(&mut self, _fighter: &str, _abilities: &[&str]) -> usize {
        self.choices.pop_front().unwrap_or(0)
    }
}
