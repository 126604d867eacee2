//! Output transcript shared by both engines
//!
//! Handlers report results and diagnostics as whole lines into a
//! [`Transcript`] rather than writing to a stream directly. The binaries
//! decide where the collected lines go (a file for the gradebook, stdout for
//! the menagerie), and tests assert on the lines without touching the
//! filesystem.

use std::io::{self, Write};

/// Ordered collection of output lines produced by a command run.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Append one output line (without a trailing newline).
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line, newline-terminated, to the given sink.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
