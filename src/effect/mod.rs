//! The composable effect language: value accessors, conditions, commands

pub mod ability;
pub mod command;
pub mod condition;
pub mod value;

pub use ability::Ability;
pub use command::{Command, RingAction};
pub use condition::{CompareOp, Condition, TextOp};
pub use value::{NumericValue, Side, StringValue};
