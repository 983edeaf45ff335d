//! Verb-keyed handlers and reactions.
//!
//! Entities expose an explicit, typed mapping from verb to handler, queried
//! by lookup; absence of an entry is the "no handler" case. No capability
//! probing, no type inspection.

use fabula_foundation::{Outcome, Output};

use crate::view::{Bystander, TurnView};

/// A handler bound to a verb: computes an [`Outcome`] for a command.
pub type HandlerFn = fn(&mut Output, &TurnView<'_>) -> Outcome;

/// A reaction handler: same context as a primary handler, plus a reference
/// to the bystander entity that owns the reaction.
pub type ReactionFn = fn(&mut Output, &TurnView<'_>, Bystander<'_>) -> Outcome;

/// Declares which verb spellings a handler accepts.
///
/// New synonyms are added here, never in dispatch logic.
#[derive(Copy, Clone, Debug)]
pub enum VerbMatcher {
    /// Accepts any of the listed spellings.
    Words(&'static [&'static str]),
    /// Accepts spellings passing a predicate test.
    Test(fn(&str) -> bool),
}

impl VerbMatcher {
    /// Returns true if this matcher accepts the verb.
    #[must_use]
    pub fn accepts(&self, verb: &str) -> bool {
        match self {
            Self::Words(words) => words.contains(&verb),
            Self::Test(test) => test(verb),
        }
    }
}

/// A verb-to-handler binding, declared on an entity or in the default
/// registry.
#[derive(Copy, Clone, Debug)]
pub struct ActionEntry {
    /// Accepted verb spellings.
    pub verbs: VerbMatcher,
    /// The handler to run.
    pub run: HandlerFn,
}

impl ActionEntry {
    /// Creates an entry accepting the listed spellings.
    #[must_use]
    pub const fn words(words: &'static [&'static str], run: HandlerFn) -> Self {
        Self {
            verbs: VerbMatcher::Words(words),
            run,
        }
    }

    /// Creates an entry with an arbitrary matcher.
    #[must_use]
    pub const fn new(verbs: VerbMatcher, run: HandlerFn) -> Self {
        Self { verbs, run }
    }
}

/// When a reaction fires relative to the primary effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the primary effect would apply; used to veto.
    Pre,
    /// After the primary effect; used to comment or chain further effects.
    Post,
}

/// A declarative reaction trigger owned by a bystander entity.
#[derive(Copy, Clone, Debug)]
pub struct Reaction {
    /// Verbs this reaction listens for.
    pub verbs: VerbMatcher,
    /// When the reaction fires.
    pub phase: Phase,
    /// The reaction handler.
    pub run: ReactionFn,
}

impl Reaction {
    /// Creates a pre-phase reaction for the listed spellings.
    #[must_use]
    pub const fn pre(words: &'static [&'static str], run: ReactionFn) -> Self {
        Self {
            verbs: VerbMatcher::Words(words),
            phase: Phase::Pre,
            run,
        }
    }

    /// Creates a post-phase reaction for the listed spellings.
    #[must_use]
    pub const fn post(words: &'static [&'static str], run: ReactionFn) -> Self {
        Self {
            verbs: VerbMatcher::Words(words),
            phase: Phase::Post,
            run,
        }
    }
}
