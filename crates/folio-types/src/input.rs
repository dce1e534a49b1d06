//! Platform-agnostic input event types.
//!
//! The terminal backend maps its native key events to these enums. The
//! session never sees raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed.
    TextInput(char),
    /// A navigation or editing key pressed.
    KeyPress(Key),
    /// Terminal viewport resized to `cols` x `rows` cells.
    Resize { cols: u16, rows: u16 },
    /// User requested quit (Esc, Ctrl+C, window close).
    Quit,
}

/// Non-printable keys the terminal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}
