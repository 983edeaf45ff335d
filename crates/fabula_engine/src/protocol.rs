//! The execution protocol: run the primary handler, then its default
//! continuation.
//!
//! Handlers receive read-only borrows and print immediately; no state
//! mutation is observable until the reconciled patches are committed. The
//! guard-before-mutate convention means a handler checks every precondition
//! before computing patches, signalling failure with one error line and
//! [`Outcome::veto`].

use fabula_foundation::{Outcome, Output};
use fabula_world::TurnView;

use crate::registry::ActionRegistry;
use crate::resolve::{HandlerSource, Resolution};

/// Runs the primary handler and normalizes its result.
///
/// When the primary came from an object or location override and did not
/// abort, the engine default for the same verb runs as the continuation;
/// `abort: true` from the override suppresses it. Patches merge in
/// invocation order.
pub fn execute_primary(
    out: &mut Output,
    view: &TurnView<'_>,
    resolution: &Resolution,
    defaults: &ActionRegistry,
) -> Outcome {
    let mut outcome = (resolution.run)(out, view);

    if !outcome.abort && resolution.source != HandlerSource::Default {
        if let Some(run) = defaults.handler_for(&view.command.verb) {
            let continuation = run(out, view);
            outcome.abort = continuation.abort;
            outcome.patches.extend(continuation.patches);
        }
    }

    outcome
}
