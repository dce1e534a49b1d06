//! InputField: the prompt row with the draft and its cursor.

use folio_terminal::DraftInput;
use folio_types::backend::TermBackend;
use folio_types::error::Result;

use crate::theme::Theme;

/// One-row input field: prompt, then the draft or a placeholder.
///
/// A draft wider than the field scrolls horizontally so the cursor stays
/// visible.
pub struct InputField<'a> {
    pub prompt: &'a str,
    pub draft: &'a DraftInput,
    /// Shown in place of an empty draft.
    pub placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(prompt: &'a str, draft: &'a DraftInput) -> Self {
        Self {
            prompt,
            draft,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Columns occupied by the prompt and the gap after it.
    fn prefix_cols(&self) -> usize {
        self.prompt.chars().count() + 1
    }

    /// First visible character of the draft for a text area `avail` wide.
    fn window_start(&self, avail: usize) -> usize {
        let cursor = self.draft.cursor_pos();
        if avail == 0 || cursor < avail {
            0
        } else {
            cursor + 1 - avail
        }
    }

    /// Draw at `(col, row)` within `width` columns. Returns the terminal
    /// cursor cell, or `None` when the field is too narrow to hold it.
    pub fn draw(
        &self,
        backend: &mut dyn TermBackend,
        theme: &Theme,
        col: u16,
        row: u16,
        width: u16,
    ) -> Result<Option<(u16, u16)>> {
        backend.draw_text(self.prompt, col, row, theme.input_text, theme.background)?;

        let prefix = self.prefix_cols();
        let avail = usize::from(width).saturating_sub(prefix);
        if avail == 0 {
            return Ok(None);
        }
        let text_col = col.saturating_add(u16::try_from(prefix).unwrap_or(u16::MAX));

        if self.draft.is_empty() {
            if let Some(placeholder) = self.placeholder {
                let shown: String = placeholder.chars().take(avail).collect();
                backend.draw_text(&shown, text_col, row, theme.placeholder, theme.background)?;
            }
            return Ok(Some((text_col, row)));
        }

        let start = self.window_start(avail);
        let shown: String = self.draft.text().chars().skip(start).take(avail).collect();
        backend.draw_text(&shown, text_col, row, theme.draft_text, theme.background)?;

        let offset = self.draft.cursor_pos() - start;
        let cursor_col = text_col.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        Ok(Some((cursor_col, row)))
    }
}
