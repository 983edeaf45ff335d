//! Command parsing, render sinks, REPL, and bundled content for Fabula.
//!
//! This crate provides:
//! - [`parse`] - the verb-noun command parser
//! - [`RenderSink`] / [`StdoutSink`] / [`Transcript`] - output consumers
//! - [`Repl`] - the interactive read-eval-print loop
//! - [`quest`] - "The Quest", the bundled demonstration game

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod parse;
pub mod quest;
mod repl;
mod sink;

pub use parse::parse;
pub use repl::Repl;
pub use sink::{RenderSink, StdoutSink, Transcript};
