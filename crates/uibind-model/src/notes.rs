use std::fmt;

/// Append-only operator diagnostics.
///
/// Notes are collected while scanning and loading and shown to the
/// operator as-is; nothing reads them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesLog {
    lines: Vec<String>,
}

impl NotesLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, note: impl Into<String>) {
        self.lines.push(note.into());
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
}

impl fmt::Display for NotesLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
