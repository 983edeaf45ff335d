//! Render sinks: consumers of ordered, channel-tagged output lines.

use fabula_foundation::{Channel, Line};

/// Consumes the lines a turn produced, in order.
///
/// The trait is the seam between the engine and presentation; swapping the
/// sink never touches dispatch.
pub trait RenderSink {
    /// Renders one line.
    fn render(&mut self, line: &Line);

    /// Renders a sequence of lines in order.
    fn render_all(&mut self, lines: &[Line]) {
        for line in lines {
            self.render(line);
        }
    }
}

/// Prints story lines plainly and error lines in red.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl RenderSink for StdoutSink {
    fn render(&mut self, line: &Line) {
        match line.channel {
            Channel::Story => println!("{}", line.text),
            Channel::Error => println!("\x1b[31m{}\x1b[0m", line.text),
        }
    }
}

/// Collects lines for inspection in tests.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the collected line texts.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

impl RenderSink for Transcript {
    fn render(&mut self, line: &Line) {
        self.lines.push(line.clone());
    }
}
