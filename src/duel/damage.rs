//! Staged damage resolution
//!
//! Pure: final damage is `base * attacker_stage * defender_stage`.
//! The result may be fractional; rounding belongs to display.

use crate::combatant::FightStyle;
use crate::duel::constants::{
    EVASIVE_PRECISION, EVASIVE_SLIP, GRAPPLER_ODD_ROUND, HEAVY_VS_EVASIVE, HEAVY_VS_OTHER,
    RUSHDOWN_VS_GRAPPLER, RUSHDOWN_VS_OTHER,
};

/// Attacker-stage multiplier; exactly one branch applies
pub fn attacker_multiplier(attacker: FightStyle, defender: FightStyle, odd_round: bool) -> f64 {
    match attacker {
        FightStyle::Rushdown if defender == FightStyle::Grappler => RUSHDOWN_VS_GRAPPLER,
        FightStyle::Rushdown => RUSHDOWN_VS_OTHER,
        FightStyle::Evasive => EVASIVE_PRECISION,
        FightStyle::Grappler if odd_round => GRAPPLER_ODD_ROUND,
        _ => 1.0,
    }
}

/// Defender-stage multiplier; exactly one branch applies
pub fn defender_multiplier(attacker: FightStyle, defender: FightStyle) -> f64 {
    match defender {
        FightStyle::Heavy if attacker == FightStyle::Evasive => HEAVY_VS_EVASIVE,
        FightStyle::Heavy => HEAVY_VS_OTHER,
        FightStyle::Evasive => EVASIVE_SLIP,
        _ => 1.0,
    }
}

/// Resolve final damage from a base amount and the two style tags
pub fn resolve_damage(
    base: f64,
    attacker: FightStyle,
    defender: FightStyle,
    odd_round: bool,
) -> f64 {
    base * attacker_multiplier(attacker, defender, odd_round) * defender_multiplier(attacker, defender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use FightStyle::*;

    #[test]
    fn test_rushdown_vs_grappler_odd_round() {
        // 20 * 1.20 * 1.00
        assert_eq!(resolve_damage(20.0, Rushdown, Grappler, true), 24.0);
    }

    #[test]
    fn test_evasive_vs_heavy() {
        // 10 * 1.07 * 0.70
        let dealt = resolve_damage(10.0, Evasive, Heavy, false);
        assert!((dealt - 7.49).abs() < 1e-12);
    }

    #[test]
    fn test_rushdown_vs_non_grappler() {
        assert_eq!(resolve_damage(10.0, Rushdown, Balanced, false), 11.5);
        assert_eq!(resolve_damage(10.0, Rushdown, Rushdown, true), 11.5);
    }

    #[test]
    fn test_grappler_bonus_only_on_odd_rounds() {
        assert_eq!(resolve_damage(100.0, Grappler, Balanced, true), 107.0);
        assert_eq!(resolve_damage(100.0, Grappler, Balanced, false), 100.0);
    }

    #[test]
    fn test_heavy_guard_against_non_evasive() {
        assert_eq!(resolve_damage(100.0, Balanced, Heavy, false), 80.0);
        assert_eq!(resolve_damage(100.0, Grappler, Heavy, false), 80.0);
    }

    #[test]
    fn test_evasive_slip() {
        assert_eq!(resolve_damage(100.0, Balanced, Evasive, false), 93.0);
    }

    #[test]
    fn test_neutral_pairing_passes_through() {
        assert_eq!(resolve_damage(42.5, Balanced, Balanced, true), 42.5);
        assert_eq!(resolve_damage(42.5, Heavy, Grappler, false), 42.5);
    }

    #[test]
    fn test_result_is_not_rounded() {
        let dealt = resolve_damage(7.0, Evasive, Evasive, false);
        assert!((dealt - 7.0 * 1.07 * 0.93).abs() < 1e-12);
    }
}
