pub mod fighter;
pub mod scheduler;
pub mod style;

pub use fighter::{Fighter, FighterStatus, ScheduledEffect};
pub use style::FightStyle;
