//! Turn-alternation state machine
//!
//! The duel owns both fighters and hands out at most one mutable
//! reference at a time: the acting fighter mutates itself through its
//! scheduler and abilities, the opponent only as the passive target.
//! A round is one turn by each fighter, in fixed order; the round
//! counter starts at 1 and increments after the second fighter's turn.

use serde::Serialize;

use crate::combatant::{scheduler, FightStyle, Fighter, FighterStatus};
use crate::duel::constants::GRAPPLER_HEAL_FRACTION;
use crate::duel::events::{DuelEvent, DuelLog, SkipReason};
use crate::duel::selector::AbilitySelector;

/// Which fighter acts this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnSlot {
    First,
    Second,
}

/// Terminal state of a duel
///
/// `Draw` covers simultaneous knockout: if one turn's resolution leaves
/// both fighters at zero, neither is declared winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DuelOutcome {
    #[default]
    Undecided,
    FirstWins,
    SecondWins,
    Draw,
}

/// A duel between exactly two fighters
#[derive(Debug)]
pub struct Duel {
    pub first: Fighter,
    pub second: Fighter,
    pub round: u32,
    pub turn: TurnSlot,
    pub outcome: DuelOutcome,
    pub log: DuelLog,
}

impl Duel {
    pub fn new(first: Fighter, second: Fighter) -> Self {
        Self {
            first,
            second,
            round: 1,
            turn: TurnSlot::First,
            outcome: DuelOutcome::Undecided,
            log: DuelLog::new(),
        }
    }

    /// Status snapshots for display collaborators, first fighter first
    pub fn status(&self) -> [FighterStatus; 2] {
        [self.first.status(), self.second.status()]
    }

    /// The surviving fighter once the duel is decided (None on a draw or
    /// while undecided)
    pub fn winner(&self) -> Option<&Fighter> {
        match self.outcome {
            DuelOutcome::FirstWins => Some(&self.first),
            DuelOutcome::SecondWins => Some(&self.second),
            DuelOutcome::Undecided | DuelOutcome::Draw => None,
        }
    }

    /// Advance one turn: pre-round effects, scheduler, ability use,
    /// termination check, turn flip. Returns the (possibly now decided)
    /// outcome.
    pub fn step_turn(&mut self, selector: &mut dyn AbilitySelector) -> DuelOutcome {
        if self.outcome != DuelOutcome::Undecided {
            return self.outcome;
        }

        if self.turn == TurnSlot::First {
            tracing::debug!(round = self.round, "round started");
            self.log.push(DuelEvent::RoundStarted { round: self.round });
        }

        // Even-round Grappler recovery, checked at the top of every turn
        if self.round % 2 == 0 {
            grappler_recovery(&mut self.first, &mut self.log);
            grappler_recovery(&mut self.second, &mut self.log);
        }

        let round = self.round;
        let (actor, opponent) = match self.turn {
            TurnSlot::First => (&mut self.first, &mut self.second),
            TurnSlot::Second => (&mut self.second, &mut self.first),
        };

        // Scheduled effects run before the actor gets to act, and run
        // even when the actor is out of the ring
        let delayed = scheduler::run_delayed(actor, opponent, round);
        if delayed > 0 {
            tracing::debug!(fighter = %actor.name, count = delayed, "delayed effects fired");
            self.log.push(DuelEvent::DelayedFired {
                fighter: actor.name.clone(),
                count: delayed,
            });
        }
        let recurring = scheduler::run_recurring(actor, opponent, round);
        if recurring > 0 {
            tracing::debug!(fighter = %actor.name, count = recurring, "recurring effects fired");
            self.log.push(DuelEvent::RecurringFired {
                fighter: actor.name.clone(),
                count: recurring,
            });
        }

        if !actor.in_ring {
            self.log.push(DuelEvent::TurnSkipped {
                fighter: actor.name.clone(),
                reason: SkipReason::OutOfRing,
            });
        } else if actor.abilities.is_empty() {
            self.log.push(DuelEvent::TurnSkipped {
                fighter: actor.name.clone(),
                reason: SkipReason::NoAbilities,
            });
        } else {
            let names: Vec<&str> = actor.abilities.iter().map(|a| a.name.as_str()).collect();
            let choice = selector.select(&actor.name, &names);
            // An out-of-range choice skips the turn, never fails
            if choice >= 1 && choice <= actor.abilities.len() {
                let ability = std::sync::Arc::clone(&actor.abilities[choice - 1]);
                tracing::debug!(fighter = %actor.name, ability = %ability.name, "ability used");
                ability.action.execute(actor, opponent, round);
                self.log.push(DuelEvent::AbilityUsed {
                    fighter: actor.name.clone(),
                    ability: ability.name.clone(),
                });
            } else {
                self.log.push(DuelEvent::TurnSkipped {
                    fighter: actor.name.clone(),
                    reason: SkipReason::Passed,
                });
            }
        }

        self.check_termination();
        if self.outcome == DuelOutcome::Undecided {
            self.turn = match self.turn {
                TurnSlot::First => TurnSlot::Second,
                TurnSlot::Second => {
                    self.round += 1;
                    TurnSlot::First
                }
            };
        }
        self.outcome
    }

    /// Run turns until the duel is decided or `max_rounds` elapse
    pub fn run(&mut self, selector: &mut dyn AbilitySelector, max_rounds: u32) -> DuelOutcome {
        while self.outcome == DuelOutcome::Undecided && self.round <= max_rounds {
            self.step_turn(selector);
        }
        self.outcome
    }

    fn check_termination(&mut self) {
        let outcome = match (self.first.is_alive(), self.second.is_alive()) {
            (true, true) => return,
            (true, false) => DuelOutcome::FirstWins,
            (false, true) => DuelOutcome::SecondWins,
            (false, false) => DuelOutcome::Draw,
        };
        self.outcome = outcome;
        tracing::info!(?outcome, "duel ended");
        self.log.push(DuelEvent::DuelEnded { outcome });
    }
}

fn grappler_recovery(fighter: &mut Fighter, log: &mut DuelLog) {
    if fighter.style == FightStyle::Grappler && fighter.in_ring {
        let amount = fighter.max_health * GRAPPLER_HEAL_FRACTION;
        fighter.heal(amount);
        tracing::debug!(fighter = %fighter.name, amount, "grappler recovery");
        log.push(DuelEvent::GrapplerHealed {
            fighter: fighter.name.clone(),
            amount,
        });
    }
}
