//! Ordered, channel-tagged output lines.

/// The channel a printed line belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Narrative text.
    Story,
    /// Rejected-command feedback.
    Error,
}

/// A single line of player-facing text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The text to display.
    pub text: String,
    /// The channel the line belongs to.
    pub channel: Channel,
}

/// Ordered buffer of lines produced while processing one command.
///
/// Printing is a side effect of handler invocation, not part of the patch
/// commit; the buffer preserves production order across the primary handler
/// and every reaction, and is forwarded to the render sink after the turn.
#[derive(Clone, Debug, Default)]
pub struct Output {
    lines: Vec<Line>,
}

impl Output {
    /// Creates an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line on the given channel.
    pub fn print(&mut self, text: impl Into<String>, channel: Channel) {
        self.lines.push(Line {
            text: text.into(),
            channel,
        });
    }

    /// Appends a line on the story channel.
    pub fn story(&mut self, text: impl Into<String>) {
        self.print(text, Channel::Story);
    }

    /// Appends a line on the error channel.
    pub fn error(&mut self, text: impl Into<String>) {
        self.print(text, Channel::Error);
    }

    /// Returns the buffered lines in production order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Consumes the buffer, returning the lines in production order.
    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Returns the number of buffered lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing was printed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if any line was printed on the error channel.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| line.channel == Channel::Error)
    }
}
