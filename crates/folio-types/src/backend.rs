//! Drawing backend trait.
//!
//! Every presentation layer renders through `TermBackend`; the crossterm
//! implementation lives in the binary and tests use a recording mock.
//! Coordinates are character cells with the origin at the top-left.

use crate::color::Color;
use crate::error::Result;

/// A cell-grid drawing surface.
pub trait TermBackend {
    /// Grid size as `(cols, rows)`.
    fn size(&self) -> (u16, u16);

    /// Fill the whole grid with `bg` and erase all text.
    fn clear(&mut self, bg: Color) -> Result<()>;

    /// Paint `width` cells of row `row`, starting at `col`, with `bg`.
    fn fill_row(&mut self, col: u16, row: u16, width: u16, bg: Color) -> Result<()>;

    /// Draw `text` starting at `(col, row)` in foreground `fg` over `bg`.
    ///
    /// Text that runs past the right edge is clipped by the backend.
    fn draw_text(&mut self, text: &str, col: u16, row: u16, fg: Color, bg: Color) -> Result<()>;

    /// Place the visible text cursor, or hide it with `None`.
    fn set_cursor(&mut self, pos: Option<(u16, u16)>) -> Result<()>;

    /// Flush everything drawn since the last call.
    fn present(&mut self) -> Result<()>;
}
