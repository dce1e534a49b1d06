//! Viewport over the scroll log.
//!
//! Offsets are in visual rows from the top of the content. The log follows
//! the newest row: any change of the buffer revision re-pins it to the
//! bottom, even after the user paged back.

use std::ops::Range;

/// Scroll state of the terminal body.
#[derive(Debug, Clone)]
pub struct ScrollLog {
    offset: usize,
    content_rows: usize,
    viewport_rows: usize,
    seen_revision: Option<u64>,
    pinned: bool,
}

impl ScrollLog {
    pub fn new() -> Self {
        Self {
            offset: 0,
            content_rows: 0,
            viewport_rows: 0,
            seen_revision: None,
            pinned: true,
        }
    }

    /// Update the geometry for this frame.
    ///
    /// A new `revision` snaps back to the bottom; otherwise the offset is
    /// only clamped, and kept at the bottom if it was there.
    pub fn sync(&mut self, revision: u64, content_rows: usize, viewport_rows: usize) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        if self.seen_revision != Some(revision) {
            self.seen_revision = Some(revision);
            self.pinned = true;
        }
        if self.pinned {
            self.offset = self.max_offset();
        } else {
            self.clamp();
        }
    }

    /// Scroll up by one page.
    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.page());
        self.pinned = self.offset >= self.max_offset();
    }

    /// Scroll down by one page.
    pub fn page_down(&mut self) {
        self.offset += self.page();
        self.clamp();
        self.pinned = self.offset >= self.max_offset();
    }

    /// Largest valid offset: the last row sits on the bottom edge.
    pub fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Content rows currently inside the viewport.
    pub fn visible(&self) -> Range<usize> {
        let end = (self.offset + self.viewport_rows).min(self.content_rows);
        self.offset.min(end)..end
    }

    /// Page step: the viewport height less one row of overlap.
    fn page(&self) -> usize {
        self.viewport_rows.saturating_sub(1).max(1)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

impl Default for ScrollLog {
    fn default() -> Self {
        Self::new()
    }
}
