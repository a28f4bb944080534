//! Append-only text accumulator for one render call.

use std::fmt;

/// Collects the tokens emitted while rendering a single declaration.
///
/// Every render entry point starts from an empty buffer and finalizes it into the returned
/// string; a buffer is never shared between two render calls.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        OutputBuffer {
            text: String::new(),
        }
    }

    /// Discard everything written so far
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Append `token` verbatim
    pub fn write(&mut self, token: &str) {
        self.text.push_str(token);
    }

    /// Append a line break
    pub fn write_line(&mut self) {
        self.text.push('\n');
    }

    /// Replace every occurrence of `old` in the text written so far.
    ///
    /// A last-resort patch for text that was emitted before the information needed to
    /// render it correctly was available. Returns whether anything was replaced.
    pub fn replace(&mut self, old: &str, new: &str) -> bool {
        if old.is_empty() || !self.text.contains(old) {
            return false;
        }
        self.text = self.text.replace(old, new);
        true
    }

    /// The text written so far
    #[must_use]
    pub fn result(&self) -> &str {
        &self.text
    }

    /// Finalize the buffer into its text
    #[must_use]
    pub fn into_result(self) -> String {
        self.text
    }

    /// Check if nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}
