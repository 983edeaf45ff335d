//! The verb-noun command parser.
//!
//! Turns raw text into a [`Command`]: lower-cases, strips articles,
//! recognizes directions, and resolves noun words against object tags.
//! Unresolvable nouns leave the target empty - the handlers narrate the
//! rejection, not the parser.

use fabula_foundation::{Command, Direction};
use fabula_world::{Entity, WorldStore};

const ARTICLES: [&str; 3] = ["the", "a", "an"];

/// Parses one line of input against the current world.
///
/// Returns `None` for blank input. A bare direction word becomes a `go`
/// command. Noun words resolve against object tags in ascending id order;
/// whether the object is actually reachable is the handlers' concern.
#[must_use]
pub fn parse(input: &str, world: &WorldStore) -> Option<Command> {
    let words: Vec<String> = input
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| !ARTICLES.contains(&word.as_str()))
        .collect();

    let (verb, rest) = words.split_first()?;

    if rest.is_empty() {
        if let Some(direction) = Direction::from_word(verb) {
            return Some(Command::new("go").with_direction(direction));
        }
    }

    for word in rest {
        if let Some(direction) = Direction::from_word(word) {
            return Some(Command::new(verb.as_str()).with_direction(direction));
        }
        if let Some(object) = world.find_object(|object| object.has_tag(word)) {
            return Some(Command::new(verb.as_str()).with_object(object.id()));
        }
    }

    Some(Command::new(verb.as_str()))
}
