//! The engine-wide default handler table.

use fabula_world::{ActionEntry, HandlerFn};

/// Registry of engine default actions, queried as the third resolver tier.
///
/// Entries are consulted in registration order; the first matcher accepting
/// the verb wins. Synonyms live in each entry's matcher, never here.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    entries: Vec<ActionEntry>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action entry.
    pub fn register(&mut self, entry: ActionEntry) {
        self.entries.push(entry);
    }

    /// Returns the handler for a verb, if any entry accepts it.
    #[must_use]
    pub fn handler_for(&self, verb: &str) -> Option<HandlerFn> {
        self.entries
            .iter()
            .find(|entry| entry.verbs.accepts(verb))
            .map(|entry| entry.run)
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
