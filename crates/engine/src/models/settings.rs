//! User-facing display settings.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The default light theme.
    #[default]
    Light,
    /// Softened light variant.
    Soft,
    /// Dark theme.
    Dark,
}

/// The process-wide settings record.
///
/// Read by every render path, written only by the settings-save action.
/// Missing fields (or a missing record) fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// UI language.
    #[serde(default)]
    pub language: Language,
    /// Presentation theme.
    #[serde(default)]
    pub theme: Theme,
}
