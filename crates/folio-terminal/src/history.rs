//! Input history with arrow-key recall.
//!
//! Entries are stored most-recent-first. The cursor is either unset (not
//! recalling) or a valid index into the entries.

use std::collections::VecDeque;

/// What a Down press did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Not recalling; leave the draft alone.
    Unchanged,
    /// Show this entry in the draft.
    Entry(&'a str),
    /// Walked past the newest entry; clear the draft.
    Cleared,
}

/// Recall list traversed by Up/Down.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a submitted line to the front and stop recalling.
    ///
    /// No deduplication and no cap: history lives as long as the session.
    pub fn record(&mut self, raw: &str) {
        self.entries.push_front(raw.to_string());
        self.cursor = None;
    }

    /// Step towards older entries. Returns the entry to show, or `None` when
    /// there is nothing to recall.
    pub fn up(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Step towards newer entries.
    pub fn down(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Unchanged,
            Some(0) => {
                self.cursor = None;
                Recall::Cleared
            },
            Some(i) => {
                self.cursor = Some(i - 1);
                match self.entries.get(i - 1) {
                    Some(entry) => Recall::Entry(entry),
                    None => Recall::Cleared,
                }
            },
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
