//! Shared test utilities for folio-ui view tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.

use folio_types::backend::TermBackend;
use folio_types::color::Color;
use folio_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    Clear {
        bg: Color,
    },
    FillRow {
        col: u16,
        row: u16,
        width: u16,
        bg: Color,
    },
    DrawText {
        text: String,
        col: u16,
        row: u16,
        fg: Color,
        bg: Color,
    },
    Cursor(Option<(u16, u16)>),
    Present,
}

/// A fixed-size mock backend that records all draw calls.
pub struct MockBackend {
    pub cols: u16,
    pub rows: u16,
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            calls: Vec::new(),
        }
    }

    /// Text draw calls as `(text, col, row, fg)`, sorted by row then column.
    pub fn text_positions(&self) -> Vec<(&str, u16, u16, Color)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::DrawText {
                    text, col, row, fg, ..
                } = c
                {
                    Some((text.as_str(), *col, *row, *fg))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)));
        positions
    }

    /// Concatenated text drawn on `row`, in column order.
    pub fn row_text(&self, row: u16) -> String {
        self.text_positions()
            .into_iter()
            .filter(|(_, _, r, _)| *r == row)
            .map(|(t, ..)| t)
            .collect()
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }

    /// Last cursor placement, if any was made.
    pub fn last_cursor(&self) -> Option<Option<(u16, u16)>> {
        self.calls.iter().rev().find_map(|c| {
            if let DrawCall::Cursor(pos) = c {
                Some(*pos)
            } else {
                None
            }
        })
    }
}

impl TermBackend for MockBackend {
    fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn clear(&mut self, bg: Color) -> Result<()> {
        self.calls.push(DrawCall::Clear { bg });
        Ok(())
    }

    fn fill_row(&mut self, col: u16, row: u16, width: u16, bg: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRow {
            col,
            row,
            width,
            bg,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, col: u16, row: u16, fg: Color, bg: Color) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            col,
            row,
            fg,
            bg,
        });
        Ok(())
    }

    fn set_cursor(&mut self, pos: Option<(u16, u16)>) -> Result<()> {
        self.calls.push(DrawCall::Cursor(pos));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}
