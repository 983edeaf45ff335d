//! Turn orchestration.
//!
//! A turn is the fundamental unit of play. Each turn:
//! 1. Resolves the primary handler (object, location, default)
//! 2. Executes it under the guard-before-mutate protocol
//! 3. Dispatches bystander reactions and reconciles vetoes
//! 4. Commits the reconciled patches atomically
//! 5. Reports the ordered output lines

use fabula_foundation::{Command, Line, Output, Result};
use fabula_world::{Phase, TurnView, WorldStore};

use crate::defaults;
use crate::merge::commit;
use crate::protocol::execute_primary;
use crate::reaction::{ReactionSweep, dispatch, reconcile};
use crate::registry::ActionRegistry;
use crate::resolve::{HandlerSource, resolve};

/// Result of one turn.
#[derive(Clone, Debug)]
pub struct TurnReport {
    /// Output lines in production order, for the render sink.
    pub lines: Vec<Line>,
    /// Which tier answered the verb; `None` for a not-understood command.
    pub source: Option<HandlerSource>,
    /// Whether a bystander reaction vetoed the primary effect.
    pub vetoed: bool,
}

impl TurnReport {
    /// Returns true if some handler answered the verb.
    #[must_use]
    pub fn is_understood(&self) -> bool {
        self.source.is_some()
    }
}

/// Orchestrates the per-command pipeline.
///
/// Strictly turn-based: one command is fully resolved, executed, reconciled,
/// and committed before the next is accepted. The store is exclusively owned
/// by the pipeline for the duration of a turn, so no locking is needed.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    defaults: ActionRegistry,
    turns: u64,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    /// Creates an engine with the built-in default actions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(defaults::registry())
    }

    /// Creates an engine with a custom default registry.
    #[must_use]
    pub fn with_registry(defaults: ActionRegistry) -> Self {
        Self { defaults, turns: 0 }
    }

    /// Returns the number of turns performed.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Performs one command against the world.
    ///
    /// Reactions are scanned only when the primary outcome did not abort: an
    /// aborted command has no effect for bystanders to intercept. No further
    /// reaction scanning happens after commit, so chains cannot recurse
    /// within one command.
    ///
    /// # Errors
    ///
    /// Returns a contract error from defective content (unknown ids in
    /// patches, inventory invariant breaches); player mistakes never error.
    pub fn perform(&mut self, world: &mut WorldStore, command: &Command) -> Result<TurnReport> {
        self.turns += 1;
        let mut out = Output::new();

        let Some(resolution) = resolve(world, command, &self.defaults)? else {
            out.error("You don't know how to do that!");
            return Ok(TurnReport {
                lines: out.into_lines(),
                source: None,
                vetoed: false,
            });
        };

        let (patches, vetoed) = {
            let view = TurnView::of(world, command)?;
            let primary = execute_primary(&mut out, &view, &resolution, &self.defaults);

            let mut sweep = ReactionSweep::default();
            if !primary.abort {
                dispatch(&mut out, &view, Phase::Pre, &mut sweep);
                if !sweep.vetoed {
                    dispatch(&mut out, &view, Phase::Post, &mut sweep);
                }
            }
            let vetoed = sweep.vetoed;
            (reconcile(primary, sweep), vetoed)
        };

        commit(world, &patches)?;

        Ok(TurnReport {
            lines: out.into_lines(),
            source: Some(resolution.source),
            vetoed,
        })
    }
}
