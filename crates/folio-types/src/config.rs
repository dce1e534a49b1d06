//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock resume terminal.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Visual theme of the terminal panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse the literal accepted by `/theme`. Case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Size of the chunk revealed per animation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One character per tick, paced by the character just shown.
    #[default]
    Char,
    /// One word (or whitespace run) per tick at a fixed pace.
    Word,
}

/// Typing-animation pacing, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub granularity: Granularity,
    /// Delay before the first unit and after ordinary characters.
    pub base_ms: u32,
    /// Delay after a space.
    pub space_ms: u32,
    /// Delay after a line break.
    pub newline_ms: u32,
    /// Delay after `.`, `!` or `?`.
    pub sentence_ms: u32,
    /// Delay after `,`, `;` or `:`.
    pub clause_ms: u32,
    /// Fixed delay per unit in word granularity.
    pub word_ms: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Char,
            base_ms: 25,
            space_ms: 15,
            newline_ms: 100,
            sentence_ms: 150,
            clause_ms: 80,
            word_ms: 60,
        }
    }
}

/// A portfolio project supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tech: Vec::new(),
        }
    }
}

/// Top-level terminal configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt shown before the draft and echoed before each command.
    pub prompt: String,
    /// System line shown when the session starts.
    pub welcome: String,
    /// Theme at startup.
    pub theme: ThemeMode,
    /// Driver frame period.
    pub tick_ms: u32,
    pub pacing: PacingConfig,
    /// Host-supplied projects. Empty means "use the built-in list".
    #[serde(rename = "project")]
    pub projects: Vec<Project>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "vidant's_portfolio:~$".to_string(),
            welcome: "Welcome to the interactive resume terminal. Type /help to see available commands."
                .to_string(),
            theme: ThemeMode::Dark,
            tick_ms: 16,
            pacing: PacingConfig::default(),
            projects: Vec::new(),
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut config: TerminalConfig = toml::from_str(toml_str)?;
        if config.tick_ms == 0 {
            log::warn!("tick_ms = 0 is not a valid frame period, using 16");
            config.tick_ms = 16;
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
