//! TerminalView: renders a whole session into the backend grid.
//!
//! Layout, top to bottom: a one-row title bar, then the scroll log body.
//! The prompt row is the last row of the log content, so it scrolls with
//! the output like a real shell. Lines wrap at the body width and at every
//! embedded newline. Widths are terminal cells, so CJK and emoji take two
//! columns and combining marks none.

use folio_terminal::session::UNKNOWN_COMMAND_LABEL;
use folio_terminal::{Line, LineKind, Session};
use folio_types::backend::TermBackend;
use folio_types::color::Color;
use folio_types::error::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::input_field::InputField;
use crate::scroll_log::ScrollLog;
use crate::theme::Theme;

/// Glyph drawn after a line that is still being typed.
pub const CARET: char = '\u{258C}';

const DOT: &str = "\u{25CF}";

/// Columns of padding on each side of the body.
const PAD: u16 = 1;

/// A run of same-colored text within one visual row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Color,
}

/// One visual row of the scroll log.
pub type Row = Vec<Span>;

/// Terminal cells taken by `text`.
fn text_cols(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn push_char(row: &mut Row, ch: char, fg: Color) {
    match row.last_mut() {
        Some(span) if span.fg == fg => span.text.push(ch),
        _ => row.push(Span {
            text: ch.to_string(),
            fg,
        }),
    }
}

/// Lay out one buffer line as visual rows `width` columns wide.
///
/// Mixed lines paint the revealed part of the unknown-command label in the
/// error color and the rest in the output color. Animating lines that show
/// a caret get one appended after the text.
pub fn layout_line(line: &Line, theme: &Theme, width: usize) -> Vec<Row> {
    let width = width.max(1);
    let body = theme.line_color(line.kind);
    let label_chars = if line.kind == LineKind::Mixed {
        line.text
            .chars()
            .zip(UNKNOWN_COMMAND_LABEL.chars())
            .take_while(|(a, b)| a == b)
            .count()
    } else {
        0
    };

    let caret = if line.animating {
        theme.caret_color(line.kind)
    } else {
        None
    };
    let chars = line
        .text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let fg = if i < label_chars { theme.error_text } else { body };
            (ch, fg)
        })
        .chain(caret.map(|fg| (CARET, fg)));

    let mut rows = Vec::new();
    let mut row = Row::new();
    let mut cols = 0;
    for (ch, fg) in chars {
        if ch == '\n' {
            rows.push(std::mem::take(&mut row));
            cols = 0;
            continue;
        }
        let ch_cols = ch.width().unwrap_or(0);
        // A glyph wider than the whole body still gets a row of its own.
        if cols > 0 && cols + ch_cols > width {
            rows.push(std::mem::take(&mut row));
            cols = 0;
        }
        push_char(&mut row, ch, fg);
        cols += ch_cols;
    }
    rows.push(row);
    rows
}

/// Renders sessions and owns the scroll position.
#[derive(Debug, Default)]
pub struct TerminalView {
    scroll: ScrollLog,
    status: Option<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown at the right end of the title bar.
    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn scroll(&self) -> &ScrollLog {
        &self.scroll
    }

    pub fn page_up(&mut self) {
        self.scroll.page_up();
    }

    pub fn page_down(&mut self) {
        self.scroll.page_down();
    }

    /// Draw one full frame.
    pub fn render(&mut self, backend: &mut dyn TermBackend, session: &Session) -> Result<()> {
        let (cols, rows) = backend.size();
        let theme = Theme::for_mode(session.theme());
        backend.clear(theme.background)?;
        if rows == 0 || cols == 0 {
            return backend.present();
        }

        self.draw_header(backend, &theme, session, cols)?;

        let body_width = cols.saturating_sub(PAD * 2).max(1);
        let mut content: Vec<Row> = session
            .lines()
            .iter()
            .flat_map(|line| layout_line(line, &theme, usize::from(body_width)))
            .collect();
        // Placeholder row for the prompt; drawn by the input field.
        content.push(Row::new());
        let prompt_row = content.len() - 1;

        let viewport = usize::from(rows - 1);
        self.scroll.sync(session.revision(), content.len(), viewport);

        let mut cursor = None;
        for (screen_row, index) in (1u16..).zip(self.scroll.visible()) {
            if index == prompt_row {
                let field = InputField::new(session.prompt(), session.draft())
                    .with_placeholder(session.placeholder());
                cursor = field.draw(backend, &theme, PAD, screen_row, body_width)?;
                continue;
            }
            let mut col = PAD;
            for span in &content[index] {
                backend.draw_text(&span.text, col, screen_row, span.fg, theme.background)?;
                col = col.saturating_add(text_cols(&span.text));
            }
        }

        backend.set_cursor(cursor)?;
        backend.present()
    }

    fn draw_header(
        &self,
        backend: &mut dyn TermBackend,
        theme: &Theme,
        session: &Session,
        cols: u16,
    ) -> Result<()> {
        backend.fill_row(0, 0, cols, theme.header_bg)?;
        let mut col = PAD;
        for dot in theme.dots {
            backend.draw_text(DOT, col, 0, dot, theme.header_bg)?;
            col += 2;
        }
        let title = format!("dev-terminal by vidant ({})", session.theme().as_str());
        backend.draw_text(&title, col + 1, 0, theme.header_text, theme.header_bg)?;

        if let Some(status) = &self.status {
            let len = text_cols(status);
            let title_end = (col + 1).saturating_add(text_cols(&title));
            let start = cols.saturating_sub(len.saturating_add(PAD));
            if start > title_end {
                backend.draw_text(status, start, 0, theme.header_text, theme.header_bg)?;
            } else {
                log::trace!("status does not fit in {cols} columns");
            }
        }
        Ok(())
    }
}
