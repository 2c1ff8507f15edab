//! Fighting style tags
//!
//! Styles drive the staged damage multipliers and the even-round
//! Grappler recovery. `Balanced` carries no modifier on either stage.

use serde::{Deserialize, Serialize};

/// A fighter's style tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightStyle {
    Rushdown,
    Heavy,
    Evasive,
    Grappler,
    Balanced,
}

impl FightStyle {
    /// Stable display/scripting name for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            FightStyle::Rushdown => "Rushdown",
            FightStyle::Heavy => "Heavy",
            FightStyle::Evasive => "Evasive",
            FightStyle::Grappler => "Grappler",
            FightStyle::Balanced => "Balanced",
        }
    }
}

impl std::fmt::Display for FightStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
