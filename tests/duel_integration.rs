//! End-to-end duels through the public API
//!
//! These tests drive full duels from roster setup to a decided outcome,
//! exercising the whole stack together: selector, scheduler,
//! interpreter, damage staging, and the turn loop.

use std::sync::Arc;

use ringside::combatant::{FightStyle, Fighter};
use ringside::duel::{Duel, DuelOutcome, ScriptedSelector};
use ringside::effect::{Ability, Command, CompareOp, Condition, NumericValue, Side};
use ringside::roster::Roster;

fn fighter(name: &str, style: FightStyle, max_health: f64, abilities: Vec<Ability>) -> Fighter {
    let mut f = Fighter::new(name, style, max_health);
    for a in abilities {
        f.learn(Arc::new(a));
    }
    f
}

fn hit(amount: f64) -> Ability {
    Ability::new(
        "Strike",
        Command::Damage {
            target: Side::Opponent,
            amount,
        },
    )
}

/// Rushdown vs Grappler on an odd round: 20 * 1.20 * 1.00 = 24
#[test]
fn rushdown_bonus_lands_through_the_turn_loop() {
    let dart = fighter("Dart", FightStyle::Rushdown, 100.0, vec![hit(20.0)]);
    let anchor = fighter("Anchor", FightStyle::Grappler, 150.0, vec![]);
    let mut duel = Duel::new(dart, anchor);

    duel.step_turn(&mut ScriptedSelector::new([1]));
    assert_eq!(duel.second.current_health, 126.0);
}

/// Evasive vs Heavy: 10 * 1.07 * 0.70 = 7.49, no rounding anywhere
#[test]
fn evasive_vs_heavy_keeps_fractional_damage() {
    let wisp = fighter("Wisp", FightStyle::Evasive, 90.0, vec![hit(10.0)]);
    let brick = fighter("Brick", FightStyle::Heavy, 160.0, vec![]);
    let mut duel = Duel::new(wisp, brick);

    duel.step_turn(&mut ScriptedSelector::new([1]));
    assert!((duel.second.current_health - 152.51).abs() < 1e-9);
}

/// A 3-turn recurring hit deducts 10 on each of the installer's next 3
/// turns, then ceases.
#[test]
fn recurring_effect_fires_three_times_then_ceases() {
    let dot = Ability::new(
        "Bleed",
        Command::Recurring {
            turns: 3,
            effect: Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 10.0,
            }),
        },
    );
    let installer = fighter("Dart", FightStyle::Balanced, 100.0, vec![dot]);
    let mut target = fighter("Brick", FightStyle::Balanced, 150.0, vec![]);
    target.current_health = 100.0;
    let mut duel = Duel::new(installer, target);

    // Install on the first turn, pass every turn after
    let mut selector = ScriptedSelector::new([1]);
    let mut healths = Vec::new();
    for _ in 0..5 {
        duel.step_turn(&mut selector); // installer's turn
        healths.push(duel.second.current_health);
        duel.step_turn(&mut selector); // target's turn
    }

    // Install turn deals nothing; the next three installer turns each
    // deduct 10; after that the entry is gone.
    assert_eq!(healths, vec![100.0, 90.0, 80.0, 70.0, 70.0]);
    assert!(duel.first.recurring.is_empty());
}

/// A delayed effect waits on the then-opponent's queue and fires exactly
/// once with roles flipped: the queue owner is "actor" when it fires, so
/// an inner `Damage(Actor)` is a bomb that lands on the opponent.
#[test]
fn delayed_bomb_fires_once_with_roles_flipped() {
    let bomb = Ability::new(
        "Time Bomb",
        Command::Delayed {
            turns: 2,
            effect: Box::new(Command::Damage {
                target: Side::Actor,
                amount: 30.0,
            }),
        },
    );
    let dart = fighter("Dart", FightStyle::Balanced, 100.0, vec![bomb]);
    let brick = fighter("Brick", FightStyle::Balanced, 150.0, vec![]);
    let mut duel = Duel::new(dart, brick);
    let mut selector = ScriptedSelector::new([1]);

    duel.step_turn(&mut selector); // Dart plants the bomb on Brick's queue
    assert_eq!(duel.second.delayed.len(), 1);

    duel.step_turn(&mut selector); // Brick: countdown 2 -> 1
    assert_eq!(duel.second.current_health, 150.0);

    duel.step_turn(&mut selector); // Dart passes
    duel.step_turn(&mut selector); // Brick: fires on Brick
    assert_eq!(duel.second.current_health, 120.0);
    assert!(duel.second.delayed.is_empty());

    // No re-fire on later turns
    duel.step_turn(&mut selector);
    duel.step_turn(&mut selector);
    assert_eq!(duel.second.current_health, 120.0);
}

/// Overkill clamps at zero and ends the duel
#[test]
fn overkill_clamps_and_declares_winner() {
    let dart = fighter("Dart", FightStyle::Balanced, 100.0, vec![hit(20.0)]);
    let mut brick = fighter("Brick", FightStyle::Balanced, 100.0, vec![]);
    brick.current_health = 5.0;
    let mut duel = Duel::new(dart, brick);

    let outcome = duel.run(&mut ScriptedSelector::new([1]), 10);
    assert_eq!(outcome, DuelOutcome::FirstWins);
    assert_eq!(duel.second.current_health, 0.0);
    assert_eq!(duel.winner().unwrap().name, "Dart");
}

/// A conditional ability changes behavior as the opponent weakens
#[test]
fn conditional_finisher_switches_arms() {
    let finisher = Ability::new(
        "Finisher",
        Command::Branch {
            condition: Condition::Numeric {
                left: NumericValue::Health(Side::Opponent),
                op: CompareOp::Lt,
                right: NumericValue::Constant(40.0),
            },
            then_branch: Some(Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 25.0,
            })),
            else_branch: Some(Box::new(Command::Damage {
                target: Side::Opponent,
                amount: 8.0,
            })),
        },
    );
    let dart = fighter("Dart", FightStyle::Balanced, 100.0, vec![finisher]);
    let mut brick = fighter("Brick", FightStyle::Balanced, 100.0, vec![]);
    brick.current_health = 45.0;
    let mut duel = Duel::new(dart, brick);
    // Only Dart has abilities, so only Dart's turns consume choices
    let mut selector = ScriptedSelector::new([1, 1]);

    duel.step_turn(&mut selector); // 45 >= 40: light arm
    assert_eq!(duel.second.current_health, 37.0);
    duel.step_turn(&mut selector);
    duel.step_turn(&mut selector); // 37 < 40: heavy arm
    assert_eq!(duel.second.current_health, 12.0);
}

/// Grapplers recover 5% of max at the top of each turn on even rounds,
/// interleaved with incoming damage.
#[test]
fn grappler_recovery_interleaves_with_damage() {
    let dart = fighter("Dart", FightStyle::Balanced, 100.0, vec![hit(10.0)]);
    let anchor = fighter("Anchor", FightStyle::Grappler, 200.0, vec![]);
    let mut duel = Duel::new(dart, anchor);
    let mut selector = ScriptedSelector::new([1, 1]);

    // Round 1 (odd, no recovery): Dart hits for 10
    duel.step_turn(&mut selector);
    duel.step_turn(&mut selector);
    assert_eq!(duel.second.current_health, 190.0);

    // Round 2 (even): +10 before Dart's hit of 10, +10 on Anchor's turn
    duel.step_turn(&mut selector);
    assert_eq!(duel.second.current_health, 190.0);
    duel.step_turn(&mut selector);
    assert_eq!(duel.second.current_health, 200.0);
}

/// A duel that nobody can win stays undecided past the round cap
#[test]
fn run_respects_round_cap() {
    let a = fighter("Dart", FightStyle::Balanced, 100.0, vec![]);
    let b = fighter("Brick", FightStyle::Balanced, 100.0, vec![]);
    let mut duel = Duel::new(a, b);

    let outcome = duel.run(&mut ScriptedSelector::new([]), 5);
    assert_eq!(outcome, DuelOutcome::Undecided);
    assert_eq!(duel.round, 6);
}

/// Full path: JSON roster, spawn, duel to knockout
#[test]
fn json_roster_duel_end_to_end() {
    let text = r#"{
        "fighters": [
            {"name": "Dart", "style": "Rushdown", "max_health": 100.0},
            {"name": "Anchor", "style": "Grappler", "max_health": 60.0}
        ],
        "abilities": [
            {
                "name": "Jab",
                "action": {"Damage": {"target": "Opponent", "amount": 20.0}}
            }
        ],
        "teach": [
            {"fighter": "Dart", "ability": "Jab"}
        ]
    }"#;
    let roster = Roster::from_json(text).unwrap();
    let dart = roster.spawn("Dart").unwrap();
    let anchor = roster.spawn("Anchor").unwrap();
    let mut duel = Duel::new(dart, anchor);

    // Jab resolves to 24 against a Grappler; even-round recovery drags
    // the fall out to the third round
    let outcome = duel.run(&mut ScriptedSelector::new([1, 1, 1]), 10);
    assert_eq!(outcome, DuelOutcome::FirstWins);
    assert_eq!(duel.round, 3);
}

/// Spawned fighters are independent per duel; the prototype never mutates
#[test]
fn roster_prototypes_survive_duels() {
    let mut roster = Roster::new();
    roster
        .register_fighter("Dart", FightStyle::Rushdown, 100.0)
        .unwrap();
    roster
        .register_fighter("Brick", FightStyle::Heavy, 160.0)
        .unwrap();
    roster
        .register_ability(Ability::new(
            "Jab",
            Command::Damage {
                target: Side::Opponent,
                amount: 50.0,
            },
        ))
        .unwrap();
    roster.teach("Dart", "Jab").unwrap();

    let mut duel = Duel::new(
        roster.spawn("Dart").unwrap(),
        roster.spawn("Brick").unwrap(),
    );
    duel.run(&mut ScriptedSelector::new([1, 0, 1, 0, 1, 0, 1]), 10);
    assert!(duel.second.current_health < 160.0);

    // A fresh spawn is untouched
    let fresh = roster.spawn("Brick").unwrap();
    assert_eq!(fresh.current_health, 160.0);
    assert!(fresh.in_ring);
}
