//! Resume terminal core.
//!
//! A `Session` owns the line buffer, the draft input and its history, and
//! the scripts produced by executed commands. Commands are parsed into a
//! closed `Command` enum; their output is revealed one unit per tick by the
//! animator, strictly in order within a command. The host drives time by
//! calling `Session::advance` every frame.

pub mod animator;
pub mod buffer;
pub mod catalog;
pub mod commands;
pub mod draft;
pub mod history;
mod script;
pub mod session;

/// Identity and content of a buffer entry.
pub use buffer::{Line, LineBuffer, LineId, LineKind};
/// Parsed form of a submitted input line.
pub use commands::Command;
/// The draft being typed at the prompt.
pub use draft::DraftInput;
/// Up/down recall over previously submitted lines.
pub use history::HistoryNavigator;
/// The terminal session driver.
pub use session::Session;
