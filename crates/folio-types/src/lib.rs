//! Foundation types for the folio resume terminal.
//!
//! This crate contains the platform-agnostic types shared by every folio
//! crate: colors, input events, the drawing backend trait, configuration,
//! and error types.

pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
