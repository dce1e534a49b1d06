use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::{InputEvent, Key};

use crate::app_state::AppState;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Translate a crossterm event. Key releases and unmapped keys are dropped.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Resize(cols, rows) => Some(InputEvent::Resize { cols, rows }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let key = match key.code {
        KeyCode::Esc => return Some(InputEvent::Quit),
        KeyCode::Char('c') if ctrl => return Some(InputEvent::Quit),
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(ch) => return Some(InputEvent::TextInput(ch)),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(InputEvent::KeyPress(key))
}

/// Route an event to the view (scrolling) or the session (everything else).
pub fn handle_input(event: &InputEvent, state: &mut AppState) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::KeyPress(Key::PageUp) => state.view.page_up(),
        InputEvent::KeyPress(Key::PageDown) => state.view.page_down(),
        InputEvent::Resize { cols, rows } => log::debug!("resized to {cols}x{rows}"),
        _ => {
            state.session.handle_input(event);
        },
    }
    state.collect_status();
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::config::TerminalConfig;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            map_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn printable_chars_become_text() {
        assert_eq!(
            map_event(press(KeyCode::Char('/'), KeyModifiers::NONE)),
            Some(InputEvent::TextInput('/'))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputEvent::TextInput('A'))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            map_event(press(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputEvent::KeyPress(Key::Up))
        );
        assert_eq!(
            map_event(press(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(InputEvent::KeyPress(Key::PageDown))
        );
        assert_eq!(map_event(press(KeyCode::Tab, KeyModifiers::NONE)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize {
                cols: 120,
                rows: 40
            })
        );
    }

    #[test]
    fn typing_and_enter_run_a_command() {
        let mut state = AppState::new(&TerminalConfig::default());
        for ch in "/about".chars() {
            handle_input(&InputEvent::TextInput(ch), &mut state);
        }
        let result = handle_input(&InputEvent::KeyPress(Key::Enter), &mut state);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(state.session.lines().len(), 3);
        assert!(state.session.draft().is_empty());
    }

    #[test]
    fn quit_event_quits() {
        let mut state = AppState::new(&TerminalConfig::default());
        assert_eq!(
            handle_input(&InputEvent::Quit, &mut state),
            InputResult::Quit
        );
    }

    #[test]
    fn page_keys_do_not_touch_draft() {
        let mut state = AppState::new(&TerminalConfig::default());
        handle_input(&InputEvent::TextInput('x'), &mut state);
        handle_input(&InputEvent::KeyPress(Key::PageUp), &mut state);
        handle_input(&InputEvent::KeyPress(Key::PageDown), &mut state);
        assert_eq!(state.session.draft().text(), "x");
    }
}
