//! User-facing label configuration shared by both pages.
//!
//! # Responsibility
//! - Supply the labels and home target the writer/reader views render.
//! - Parse an optional JSON config, falling back per field.
//!
//! # Invariants
//! - Unknown keys are ignored; missing keys take their defaults.
//! - Parsing never panics; a malformed document is a typed error.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recognized options: `INDEX`, `DELETE`, `LASTSAVED`, `LASTFETCHED`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Return-to-home target named by both pages' return action.
    #[serde(rename = "INDEX")]
    pub index: String,
    /// Per-note delete action label on the writer page.
    #[serde(rename = "DELETE")]
    pub delete_label: String,
    /// Prefix for the writer's last-saved feedback line.
    #[serde(rename = "LASTSAVED")]
    pub last_saved_label: String,
    /// Prefix for the reader's last-fetched feedback line.
    #[serde(rename = "LASTFETCHED")]
    pub last_fetched_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            index: "home".to_string(),
            delete_label: "Delete".to_string(),
            last_saved_label: "Last saved:".to_string(),
            last_fetched_label: "Last fetched:".to_string(),
        }
    }
}

impl UiConfig {
    /// Parses a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError)
    }
}

/// Config document could not be parsed.
#[derive(Debug)]
pub struct ConfigError(serde_json::Error);

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid ui config: {}", self.0)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}
