use std::cell::RefCell;
use std::rc::Rc;

use folio_terminal::Session;
use folio_types::config::{TerminalConfig, ThemeMode};
use folio_ui::TerminalView;

/// Everything the view reads when it draws a frame. Two equal keys produce
/// the same screen.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrameKey {
    revision: u64,
    draft: String,
    cursor: usize,
    theme: ThemeMode,
    status: Option<String>,
    scroll_offset: usize,
    size: (u16, u16),
}

/// All mutable application state except the backend, which stays a local
/// in main() so rendering can borrow the session and the view separately.
pub struct AppState {
    pub session: Session,
    pub view: TerminalView,
    /// Written by the session's open-project hook, drained into the view.
    opened: Rc<RefCell<Option<String>>>,
    pub frame_counter: u64,
    /// Key of the last frame handed to the backend.
    drawn: Option<FrameKey>,
}

impl AppState {
    pub fn new(config: &TerminalConfig) -> Self {
        let mut session = Session::new(config);
        let opened = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&opened);
        session.set_open_hook(move |index, project| {
            *sink.borrow_mut() = Some(format!("opened #{}: {}", index + 1, project.title));
        });
        Self {
            session,
            view: TerminalView::new(),
            opened,
            frame_counter: 0,
            drawn: None,
        }
    }

    /// Advance the session clock by one frame.
    pub fn tick(&mut self, dt_ms: u32) {
        self.session.advance(dt_ms);
        self.frame_counter += 1;
        self.collect_status();
    }

    /// Whether the screen differs from the last drawn frame at this size.
    /// Records the current frame as drawn when it does.
    pub fn needs_redraw(&mut self, size: (u16, u16)) -> bool {
        let key = FrameKey {
            revision: self.session.revision(),
            draft: self.session.draft().text().to_string(),
            cursor: self.session.draft().cursor_pos(),
            theme: self.session.theme(),
            status: self.view.status().map(str::to_string),
            scroll_offset: self.view.scroll().offset(),
            size,
        };
        if self.drawn.as_ref() == Some(&key) {
            return false;
        }
        self.drawn = Some(key);
        true
    }

    /// Move a pending open-project notice into the title bar.
    pub fn collect_status(&mut self) {
        if let Some(status) = self.opened.borrow_mut().take() {
            self.view.set_status(Some(status));
        }
    }
}
