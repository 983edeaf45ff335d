//! The interactive read-eval-print loop.

use fabula_engine::TurnEngine;
use fabula_foundation::{Channel, Error, Line, Result};
use fabula_world::{Entity, WorldStore};
use rustyline::error::ReadlineError;

use crate::parse::parse;
use crate::sink::{RenderSink, StdoutSink};

/// The interactive game loop: read a line, parse, perform, render.
pub struct Repl<S: RenderSink = StdoutSink> {
    editor: rustyline::DefaultEditor,
    engine: TurnEngine,
    world: WorldStore,
    sink: S,
    prompt: String,
    show_banner: bool,
}

impl Repl<StdoutSink> {
    /// Creates a REPL over a world, rendering to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(world: WorldStore) -> Result<Self> {
        let editor = rustyline::DefaultEditor::new()
            .map_err(|e| Error::internal(format!("editor init failed: {e}")))?;
        Ok(Self {
            editor,
            engine: TurnEngine::new(),
            world,
            sink: StdoutSink,
            prompt: "> ".to_owned(),
            show_banner: true,
        })
    }
}

impl<S: RenderSink> Repl<S> {
    /// Swaps the render sink.
    #[must_use]
    pub fn with_sink<T: RenderSink>(self, sink: T) -> Repl<T> {
        Repl {
            editor: self.editor,
            engine: self.engine,
            world: self.world,
            sink,
            prompt: self.prompt,
            show_banner: self.show_banner,
        }
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the current world.
    #[must_use]
    pub fn world(&self) -> &WorldStore {
        &self.world
    }

    /// Runs the loop until `quit`, Ctrl+C, or Ctrl+D.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails or the engine reports a
    /// contract violation.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("fabula {}", env!("CARGO_PKG_VERSION"));
            println!("Type commands like \"go north\", \"get diary\", or \"quit\".");
            println!();
        }

        self.perform_line("look")?;

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(input) => {
                    let trimmed = input.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if matches!(trimmed, "quit" | "exit") {
                        break;
                    }
                    let _ = self.editor.add_history_entry(trimmed);
                    self.perform_line(trimmed)?;
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(Error::internal(format!("read error: {e}"))),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Parses and performs one line, rendering the turn's output and an
    /// arrival line when the player moved.
    fn perform_line(&mut self, input: &str) -> Result<()> {
        let Some(command) = parse(input, &self.world) else {
            return Ok(());
        };

        let before = self.world.player().location();
        let report = self.engine.perform(&mut self.world, &command)?;
        self.sink.render_all(&report.lines);

        let here = self.world.player().location();
        if here != before {
            if let Some(location) = self.world.location(here) {
                self.sink.render(&Line {
                    text: format!("You are {}.", location.name()),
                    channel: Channel::Story,
                });
            }
        }
        Ok(())
    }
}
