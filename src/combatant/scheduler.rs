//! Scheduled-effect processing
//!
//! Both passes run at the start of the owning fighter's turn, delayed
//! first, then recurring. They run even when the owner is out of the
//! ring: scheduled effects are not suppressed by ring state.
//!
//! A firing effect may install new entries on the owner's queues. Those
//! land after the surviving entries and are not processed until the
//! owner's next turn (the recurring pass picks up entries the delayed
//! pass installed, matching the pass ordering).

use crate::combatant::Fighter;

/// Drain the actor's delayed queue: decrement each entry, fire the ones
/// that reach zero, keep the rest. Returns how many fired.
pub fn run_delayed(actor: &mut Fighter, opponent: &mut Fighter, round: u32) -> usize {
    let pending = std::mem::take(&mut actor.delayed);
    let mut kept = Vec::with_capacity(pending.len());
    let mut fired = 0;

    for mut entry in pending {
        entry.remaining = entry.remaining.saturating_sub(1);
        if entry.remaining == 0 {
            // The queue owner acts as "actor" when the effect fires
            entry.effect.execute(actor, opponent, round);
            fired += 1;
        } else {
            kept.push(entry);
        }
    }

    // Entries installed by firing effects come after the survivors
    kept.append(&mut actor.delayed);
    actor.delayed = kept;
    fired
}

/// Walk the actor's recurring queue: fire every entry, decrement, drop
/// the exhausted ones. Returns how many fired.
pub fn run_recurring(actor: &mut Fighter, opponent: &mut Fighter, round: u32) -> usize {
    let pending = std::mem::take(&mut actor.recurring);
    let mut kept = Vec::with_capacity(pending.len());
    let mut fired = 0;

    for mut entry in pending {
        entry.effect.execute(actor, opponent, round);
        fired += 1;
        entry.remaining = entry.remaining.saturating_sub(1);
        if entry.remaining > 0 {
            kept.push(entry);
        }
    }

    kept.append(&mut actor.recurring);
    actor.recurring = kept;
    fired
}
