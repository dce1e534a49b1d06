//! Error types for folio.

use std::io;

/// Errors produced by the folio infrastructure.
///
/// User-level command failures never surface here; the interpreter turns
/// them into output lines.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
