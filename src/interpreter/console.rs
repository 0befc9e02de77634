//! Output recorder for `printf`
//!
//! `printf` text is collected here instead of being written straight to
//! stdout, so the binary can flush it in one pass and tests can assert on the
//! exact transcript.

/// Records everything the interpreted program prints.
#[derive(Debug, Clone, Default)]
pub struct Console {
    buffer: String,
}

impl Console {
    pub fn new() -> Self {
        Console {
            buffer: String::new(),
        }
    }

    /// Append printed text. No newline is implied; `printf` output only
    /// breaks lines where the format string does.
    pub fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// The raw transcript, exactly as printed.
    pub fn transcript(&self) -> &str {
        &self.buffer
    }

    /// The transcript split into lines. A trailing newline does not produce
    /// an empty final line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.buffer.split('\n').map(|s| s.to_string()).collect();
        if lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        lines
    }
}
