//! Boolean condition expressions
//!
//! Conditions are pure trees evaluated fresh against the current
//! (actor, opponent) pair. Evaluation is re-entrant and deterministic;
//! cloning a tree produces a structurally independent copy.

use serde::{Deserialize, Serialize};

use crate::combatant::Fighter;
use crate::duel::constants::COMPARE_EPSILON;
use crate::effect::value::{NumericValue, Side, StringValue};

/// Numeric comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

/// String comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextOp {
    Eq,
    Ne,
}

/// A boolean-valued expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Compare two numeric accessors; Eq/Ne tolerate float drift
    Numeric {
        left: NumericValue,
        op: CompareOp,
        right: NumericValue,
    },
    /// Compare a string accessor against a literal
    Text {
        left: StringValue,
        op: TextOp,
        literal: String,
    },
    /// True iff every child is true; empty list is true
    All(Vec<Condition>),
    /// True iff any child is true; empty list is false
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    /// Evaluate against the current pair
    pub fn evaluate(&self, actor: &Fighter, opponent: &Fighter) -> bool {
        match self {
            Condition::Numeric { left, op, right } => {
                let lhs = left.eval(actor, opponent);
                let rhs = right.eval(actor, opponent);
                match op {
                    CompareOp::Eq => (lhs - rhs).abs() < COMPARE_EPSILON,
                    CompareOp::Ne => (lhs - rhs).abs() >= COMPARE_EPSILON,
                    CompareOp::Gt => lhs > rhs,
                    CompareOp::Ge => lhs >= rhs,
                    CompareOp::Lt => lhs < rhs,
                    CompareOp::Le => lhs <= rhs,
                }
            }
            Condition::Text { left, op, literal } => {
                let lhs = left.eval(actor, opponent);
                match op {
                    TextOp::Eq => lhs == *literal,
                    TextOp::Ne => lhs != *literal,
                }
            }
            Condition::All(children) => children.iter().all(|c| c.evaluate(actor, opponent)),
            Condition::Any(children) => children.iter().any(|c| c.evaluate(actor, opponent)),
            Condition::Not(inner) => !inner.evaluate(actor, opponent),
        }
    }

    /// Shorthand: the given side is out of the ring
    pub fn out_of_ring(side: Side) -> Condition {
        Condition::Numeric {
            left: NumericValue::OutOfRing(side),
            op: CompareOp::Eq,
            right: NumericValue::Constant(1.0),
        }
    }

    /// Shorthand: the given side's style matches the literal
    pub fn style_is(side: Side, style: &str) -> Condition {
        Condition::Text {
            left: StringValue::Style(side),
            op: TextOp::Eq,
            literal: style.to_string(),
        }
    }
}
