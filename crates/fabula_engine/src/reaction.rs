//! Bystander reaction dispatch and veto reconciliation.

use fabula_foundation::{Outcome, Output, PatchSet};
use fabula_world::{Bystander, Object, Phase, TurnView};

/// Accumulated reaction outcomes for one command.
#[derive(Debug, Default)]
pub struct ReactionSweep {
    /// Outcomes in dispatch order, ending with the aborting one if any.
    pub outcomes: Vec<Outcome>,
    /// True once a reaction aborted; the scan stops there.
    pub vetoed: bool,
}

/// Scans bystanders for reactions matching the command's verb and phase.
///
/// Candidates are every object standing in the player's current location
/// plus the directly-acted-upon object, in ascending id order, then the
/// location itself. The scan stops at the first aborting reaction; later
/// bystanders never observe a turn that was already vetoed.
pub fn dispatch(out: &mut Output, view: &TurnView<'_>, phase: Phase, sweep: &mut ReactionSweep) {
    let verb = view.command.verb.as_str();
    let here = view.location.id();

    let mut candidates: Vec<&Object> = view.world.objects_in(here).collect();
    if let Some(target) = view.object {
        if !candidates.iter().any(|object| object.id() == target.id()) {
            candidates.push(target);
            candidates.sort_by_key(|object| object.id());
        }
    }

    for object in candidates {
        for run in object.reactions_for(verb, phase) {
            let outcome = run(out, view, Bystander::Object(object));
            let aborted = outcome.abort;
            sweep.outcomes.push(outcome);
            if aborted {
                sweep.vetoed = true;
                return;
            }
        }
    }

    for run in view.location.reactions_for(verb, phase) {
        let outcome = run(out, view, Bystander::Location(view.location));
        let aborted = outcome.abort;
        sweep.outcomes.push(outcome);
        if aborted {
            sweep.vetoed = true;
            return;
        }
    }
}

/// Reconciles the primary outcome with the reaction sweep.
///
/// If any reaction aborted, the primary's patches are discarded and replaced
/// by the union of patches from every reaction dispatched up to and
/// including the aborting one. Otherwise the commit is the primary's patches
/// followed by reaction patches in dispatch order.
#[must_use]
pub fn reconcile(primary: Outcome, sweep: ReactionSweep) -> PatchSet {
    let mut patches = if sweep.vetoed {
        PatchSet::new()
    } else {
        primary.patches
    };
    for outcome in sweep.outcomes {
        patches.extend(outcome.patches);
    }
    patches
}
