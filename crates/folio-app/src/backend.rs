//! crossterm implementation of `TermBackend`.
//!
//! Draw calls are queued and only written out on `present`. Anything that
//! falls outside the grid is clipped here so views can draw freely.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use folio_types::backend::TermBackend;
use folio_types::color::Color;
use folio_types::error::{FolioError, Result};

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Cell-grid backend writing ANSI sequences to `W`.
pub struct CrosstermBackend<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl CrosstermBackend<Stdout> {
    /// Backend over stdout, sized to the current terminal.
    pub fn stdout() -> Result<Self> {
        let (cols, rows) =
            terminal::size().map_err(|e| FolioError::Backend(format!("terminal size: {e}")))?;
        log::debug!("terminal is {cols}x{rows}");
        Ok(Self::new(io::stdout(), cols, rows))
    }
}

impl<W: Write> CrosstermBackend<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self { out, cols, rows }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    /// Columns available from `col` to the right edge, or `None` when the
    /// cell is off-grid.
    fn room(&self, col: u16, row: u16) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| usize::from(self.cols - col))
    }
}

impl<W: Write> TermBackend for CrosstermBackend<W> {
    fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn clear(&mut self, bg: Color) -> Result<()> {
        queue!(self.out, SetBackgroundColor(term_color(bg)), Clear(ClearType::All))?;
        Ok(())
    }

    fn fill_row(&mut self, col: u16, row: u16, width: u16, bg: Color) -> Result<()> {
        let Some(room) = self.room(col, row) else {
            return Ok(());
        };
        let cells = " ".repeat(usize::from(width).min(room));
        queue!(
            self.out,
            MoveTo(col, row),
            SetBackgroundColor(term_color(bg)),
            Print(cells)
        )?;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, col: u16, row: u16, fg: Color, bg: Color) -> Result<()> {
        let Some(room) = self.room(col, row) else {
            return Ok(());
        };
        let clipped: String = text.chars().take(room).collect();
        queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(term_color(fg)),
            SetBackgroundColor(term_color(bg)),
            Print(clipped)
        )?;
        Ok(())
    }

    fn set_cursor(&mut self, pos: Option<(u16, u16)>) -> Result<()> {
        match pos.filter(|&(col, row)| self.room(col, row).is_some()) {
            Some((col, row)) => queue!(self.out, MoveTo(col, row), Show)?,
            None => queue!(self.out, Hide)?,
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}
