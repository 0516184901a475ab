//! Configuration handling for the site controller

use crate::state::{FormVariant, PhonePolicy, PresentMode};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page shown when no path is configured
const DEFAULT_PAGE_PATH: &str = "/contact.html";

/// User configuration for the site controller
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Confirmation display: "modal" or "inline"
    pub presenter_mode: Option<PresentMode>,
    /// Which contact form the page carries
    pub form_variant: Option<FormVariant>,
    /// Phone number checking: "strict" or "loose"
    pub phone_policy: Option<PhonePolicy>,
    /// Path of the page being shown
    pub page_path: Option<String>,
    /// Override for the preference storage file
    pub preferences_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "folio", "folio-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn presenter_mode(&self) -> PresentMode {
        self.presenter_mode.unwrap_or_default()
    }

    pub fn form_variant(&self) -> FormVariant {
        self.form_variant.unwrap_or_default()
    }

    pub fn phone_policy(&self) -> PhonePolicy {
        self.phone_policy.unwrap_or_default()
    }

    pub fn page_path(&self) -> &str {
        self.page_path.as_deref().unwrap_or(DEFAULT_PAGE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.presenter_mode.is_none());
        assert!(config.form_variant.is_none());
        assert!(config.phone_policy.is_none());
        assert!(config.page_path.is_none());
        assert!(config.preferences_path.is_none());
    }

    #[test]
    fn test_defaults_through_accessors() {
        let config = SiteConfig::default();
        assert_eq!(config.presenter_mode(), PresentMode::Modal);
        assert_eq!(config.form_variant(), FormVariant::Contact);
        assert_eq!(config.phone_policy(), PhonePolicy::Strict);
        assert_eq!(config.page_path(), "/contact.html");
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            presenter_mode: Some(PresentMode::Inline),
            form_variant: Some(FormVariant::Inquiry),
            phone_policy: Some(PhonePolicy::Loose),
            page_path: Some("/about.html".to_string()),
            preferences_path: Some(PathBuf::from("/tmp/prefs.json")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.presenter_mode(), PresentMode::Inline);
        assert_eq!(parsed.form_variant(), FormVariant::Inquiry);
        assert_eq!(parsed.phone_policy(), PhonePolicy::Loose);
        assert_eq!(parsed.page_path(), "/about.html");
        assert_eq!(
            parsed.preferences_path,
            Some(PathBuf::from("/tmp/prefs.json"))
        );
    }

    #[test]
    fn test_deserialize_lowercase_values() {
        let json = r#"{"presenter_mode": "inline", "phone_policy": "loose"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.presenter_mode(), PresentMode::Inline);
        assert_eq!(parsed.phone_policy(), PhonePolicy::Loose);
        assert!(parsed.form_variant.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.presenter_mode.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"form_variant": "inquiry", "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.form_variant(), FormVariant::Inquiry);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let json = r#"{"presenter_mode": "popup"}"#;
        assert!(serde_json::from_str::<SiteConfig>(json).is_err());
    }

    #[test]
    fn test_load_returns_ok() {
        // Returns the default config when no config file exists
        assert!(SiteConfig::load().is_ok());
    }
}
