//! Effect command trees and their interpreter
//!
//! A `Command` is an immutable tree describing a game effect. Executing a
//! node mutates only the targeted fighter(s), never the tree, so ability
//! trees can be shared across fighters and duels.
//!
//! Scheduling nodes (`Recurring`, `Delayed`) install a fresh structural
//! copy of their inner tree at execution time, so repeated installs of the
//! same ability never alias queue state.

use serde::{Deserialize, Serialize};

use crate::combatant::{Fighter, ScheduledEffect};
use crate::duel::damage::resolve_damage;
use crate::effect::condition::Condition;
use crate::effect::value::Side;

/// Direction of a ring-state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingAction {
    Enter,
    Leave,
}

/// An executable effect node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Deal damage to one side, routed through the staged resolver
    Damage { target: Side, amount: f64 },
    /// Restore health to one side, clamped at max
    Heal { target: Side, amount: f64 },
    /// Move one side in or out of the ring
    Ring { target: Side, action: RingAction },
    /// Execute children in order; always runs to completion
    Sequence(Vec<Command>),
    /// Evaluate the condition once, run the matching branch if present
    Branch {
        condition: Condition,
        then_branch: Option<Box<Command>>,
        else_branch: Option<Box<Command>>,
    },
    /// Install the inner effect on the actor's recurring queue: it fires
    /// once per actor turn for `turns` total executions
    Recurring { turns: u32, effect: Box<Command> },
    /// Install the inner effect on the opponent's delayed queue: it fires
    /// exactly once, `turns` of the opponent's turns later, with the
    /// opponent acting as "actor"
    Delayed { turns: u32, effect: Box<Command> },
}

impl Command {
    /// Execute this tree against the current (actor, opponent, round)
    pub fn execute(&self, actor: &mut Fighter, opponent: &mut Fighter, round: u32) {
        match self {
            Command::Damage { target, amount } => {
                let attacker_style = actor.style;
                let odd_round = round % 2 == 1;
                let victim = target.resolve_mut(actor, opponent);
                // A fighter outside the ring cannot be hit
                if victim.in_ring {
                    let dealt = resolve_damage(*amount, attacker_style, victim.style, odd_round);
                    victim.apply_damage(dealt);
                }
            }
            Command::Heal { target, amount } => {
                target.resolve_mut(actor, opponent).heal(*amount);
            }
            Command::Ring { target, action } => {
                let fighter = target.resolve_mut(actor, opponent);
                fighter.in_ring = matches!(action, RingAction::Enter);
            }
            Command::Sequence(children) => {
                for child in children {
                    child.execute(actor, opponent, round);
                }
            }
            Command::Branch {
                condition,
                then_branch,
                else_branch,
            } => {
                let branch = if condition.evaluate(actor, opponent) {
                    then_branch
                } else {
                    else_branch
                };
                if let Some(cmd) = branch {
                    cmd.execute(actor, opponent, round);
                }
            }
            Command::Recurring { turns, effect } => {
                actor.recurring.push(ScheduledEffect {
                    remaining: *turns,
                    effect: effect.as_ref().clone(),
                });
            }
            Command::Delayed { turns, effect } => {
                opponent.delayed.push(ScheduledEffect {
                    remaining: *turns,
                    effect: rewrite_for_transfer(effect),
                });
            }
        }
    }
}

/// Adjust a command for ownership transfer onto the opponent's queue.
///
/// When the waiting effect eventually fires, the queue owner is the actor,
/// so "bring the opponent back into the ring" would re-enter the wrong
/// party. That one shape is rewritten to target the (then) actor; every
/// other command installs unchanged.
fn rewrite_for_transfer(effect: &Command) -> Command {
    match effect {
        Command::Ring {
            target: Side::Opponent,
            action: RingAction::Enter,
        } => Command::Ring {
            target: Side::Actor,
            action: RingAction::Enter,
        },
        other => other.clone(),
    }
}
