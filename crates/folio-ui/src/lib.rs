//! folio-ui: presentation of a terminal session over `TermBackend`.
//!
//! Everything here is a pure function of the session state plus a little
//! view state (the scroll position). All drawing goes through the
//! `TermBackend` trait, so the crossterm binary and the tests share one
//! code path.

pub use folio_types::color;
pub mod input_field;
pub mod scroll_log;
pub mod theme;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use input_field::InputField;
pub use scroll_log::ScrollLog;
pub use theme::Theme;
pub use view::TerminalView;
