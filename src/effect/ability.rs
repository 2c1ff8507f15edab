//! Named, reusable effect trees
//!
//! An ability is immutable after registration and shared by `Arc` across
//! every fighter taught it.

use serde::{Deserialize, Serialize};

use crate::effect::command::Command;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub action: Command,
}

impl Ability {
    pub fn new(name: impl Into<String>, action: Command) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }
}
