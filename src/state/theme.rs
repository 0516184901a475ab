//! Light/dark display mode preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key the preference is persisted under
pub const THEME_KEY: &str = "theme";

/// Persisted display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn toggle(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Icon on the toggle control; shows the mode a click switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☾",
            ThemePreference::Dark => "☀",
        }
    }

    /// Accessible label on the toggle control, describing the next action
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Switch to dark theme",
            ThemePreference::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(anyhow::anyhow!("Unknown theme: {other}")),
        }
    }
}
