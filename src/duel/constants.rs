//! Engine tunables in one place
//!
//! Damage multipliers are applied in two sequential stages; exactly one
//! branch per stage ever applies.

// Attacker stage
pub const RUSHDOWN_VS_GRAPPLER: f64 = 1.20;
pub const RUSHDOWN_VS_OTHER: f64 = 1.15;
pub const EVASIVE_PRECISION: f64 = 1.07;
pub const GRAPPLER_ODD_ROUND: f64 = 1.07;

// Defender stage
pub const HEAVY_VS_EVASIVE: f64 = 0.70;
pub const HEAVY_VS_OTHER: f64 = 0.80;
pub const EVASIVE_SLIP: f64 = 0.93;

/// Absolute tolerance for numeric equality in condition expressions
pub const COMPARE_EPSILON: f64 = 0.001;

/// Fraction of max health an in-ring Grappler recovers on even rounds
pub const GRAPPLER_HEAL_FRACTION: f64 = 0.05;
