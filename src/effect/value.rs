//! Side selection and value accessors
//!
//! A `Side` is a role selector resolved against the current
//! (actor, opponent) pair at evaluation time — never a fixed identity.
//! Accessors are total and side-effect-free.

use serde::{Deserialize, Serialize};

use crate::combatant::Fighter;

/// Which fighter an effect or accessor refers to, relative to the
/// fighter whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Actor,
    Opponent,
}

impl Side {
    /// Resolve this side against the current pair
    pub fn resolve<'a>(&self, actor: &'a Fighter, opponent: &'a Fighter) -> &'a Fighter {
        match self {
            Side::Actor => actor,
            Side::Opponent => opponent,
        }
    }

    /// Resolve this side against the current pair, mutably
    pub fn resolve_mut<'a>(
        &self,
        actor: &'a mut Fighter,
        opponent: &'a mut Fighter,
    ) -> &'a mut Fighter {
        match self {
            Side::Actor => actor,
            Side::Opponent => opponent,
        }
    }
}

/// A numeric attribute read from one side, or a constant
///
/// `OutOfRing` evaluates to 1.0/0.0 so ring status can participate in
/// numeric comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    Constant(f64),
    Health(Side),
    MaxHealth(Side),
    OutOfRing(Side),
}

impl NumericValue {
    pub fn eval(&self, actor: &Fighter, opponent: &Fighter) -> f64 {
        match self {
            NumericValue::Constant(v) => *v,
            NumericValue::Health(side) => side.resolve(actor, opponent).current_health,
            NumericValue::MaxHealth(side) => side.resolve(actor, opponent).max_health,
            NumericValue::OutOfRing(side) => {
                if side.resolve(actor, opponent).in_ring {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

/// A string attribute read from one side, or a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StringValue {
    Literal(String),
    Name(Side),
    Style(Side),
}

impl StringValue {
    pub fn eval(&self, actor: &Fighter, opponent: &Fighter) -> String {
        match self {
            StringValue::Literal(s) => s.clone(),
            StringValue::Name(side) => side.resolve(actor, opponent).name.clone(),
            StringValue::Style(side) => side.resolve(actor, opponent).style.as_str().to_string(),
        }
    }
}
