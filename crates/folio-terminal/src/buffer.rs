//! Line buffer: the ordered scroll log of the terminal.
//!
//! Lines are addressed by a `LineId` that is never reused, not even across
//! `reset()`, so a reveal that outlives a clear can only ever miss its
//! target, never hit a newer line.

/// Stable identity of a buffer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

/// Rendering category of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Echo of a submitted command.
    Input,
    /// Regular command output.
    Output,
    /// Banner and session messages.
    System,
    /// Failure output.
    Error,
    /// Two-tone line: an error label followed by regular output.
    Mixed,
}

/// A single entry in the scroll log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub kind: LineKind,
    pub text: String,
    pub animating: bool,
}

/// Ordered, append-only list of lines (except for a full reset).
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<Line>,
    next_id: u64,
    revision: u64,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and return its identity.
    pub fn append(&mut self, kind: LineKind, text: impl Into<String>, animating: bool) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push(Line {
            id,
            kind,
            text: text.into(),
            animating,
        });
        self.bump();
        id
    }

    /// Replace the text of line `id`. Returns `false` if the line is gone.
    pub fn replace_text(&mut self, id: LineId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(line) => {
                line.text.clear();
                line.text.push_str(text);
                self.bump();
                true
            },
            None => false,
        }
    }

    /// Mark line `id` as fully revealed. Returns `false` if the line is gone.
    pub fn finish(&mut self, id: LineId) -> bool {
        match self.get_mut(id) {
            Some(line) => {
                line.animating = false;
                self.bump();
                true
            },
            None => false,
        }
    }

    /// Drop every line. Identities keep counting up.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.bump();
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().rev().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: LineId) -> Option<&mut Line> {
        // Animated lines sit near the end, so search backwards.
        self.lines.iter_mut().rev().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.get(id).is_some()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Counter bumped on every mutation. Views compare it to decide when to
    /// re-pin the scroll position.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
