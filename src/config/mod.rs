#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;
pub mod webhook_env;

use crate::core::{ConfigProvider, ConversionEvent, LeadTags};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::path::Path;
use std::time::Duration;
use toml_config::FormConfig;

pub const DEFAULT_SUCCESS_DELAY_MS: u64 = 500;
pub const MAX_SUCCESS_DELAY_MS: u64 = 10_000;

/// Everything the form controller is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSettings {
    pub webhook_url: String,
    pub tags: LeadTags,
    pub success_delay: Duration,
    pub conversion: ConversionEvent,
}

impl FormSettings {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            tags: LeadTags::default(),
            success_delay: Duration::from_millis(DEFAULT_SUCCESS_DELAY_MS),
            conversion: ConversionEvent::default(),
        }
    }
}

impl ConfigProvider for FormSettings {
    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn lead_tags(&self) -> &LeadTags {
        &self.tags
    }

    fn success_delay(&self) -> Duration {
        self.success_delay
    }

    fn conversion_event(&self) -> &ConversionEvent {
        &self.conversion
    }
}

impl Validate for FormSettings {
    fn validate(&self) -> Result<()> {
        validate_url("webhook_url", &self.webhook_url)?;
        validate_non_empty_string("source", &self.tags.source)?;
        validate_non_empty_string("campaign", &self.tags.campaign)?;
        validate_range(
            "success_delay_ms",
            self.success_delay.as_millis(),
            0,
            u128::from(MAX_SUCCESS_DELAY_MS),
        )?;
        Ok(())
    }
}

/// Resolves settings with webhook URL precedence: explicit override, then the
/// settings file, then `WEBHOOK_URL` from the environment or `.env`, then the
/// placeholder.
pub fn resolve_settings(
    webhook_override: Option<&str>,
    file: Option<&FormConfig>,
    dotenv_path: &Path,
) -> Result<FormSettings> {
    let webhook_url = match webhook_override
        .filter(|url| !url.trim().is_empty())
        .or_else(|| file.and_then(FormConfig::webhook_url))
    {
        Some(url) => url.to_string(),
        None => webhook_env::resolve_from_env(dotenv_path)?.url,
    };

    let settings = match file {
        Some(config) => config.to_settings(webhook_url),
        None => FormSettings::new(webhook_url),
    };
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LeadError;
    use tempfile::TempDir;

    #[test]
    fn test_override_beats_file() {
        let file = FormConfig::from_toml_str("[webhook]\nurl = \"https://file.example.com\"\n")
            .unwrap();
        let dir = TempDir::new().unwrap();

        let settings = resolve_settings(
            Some("https://flag.example.com"),
            Some(&file),
            &dir.path().join(".env"),
        )
        .unwrap();
        assert_eq!(settings.webhook_url, "https://flag.example.com");

        let settings = resolve_settings(None, Some(&file), &dir.path().join(".env")).unwrap();
        assert_eq!(settings.webhook_url, "https://file.example.com");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = resolve_settings(Some("not a url"), None, &dir.path().join(".env"));
        assert!(matches!(
            result,
            Err(LeadError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_settings_validation() {
        assert!(FormSettings::new("https://hooks.example.com").validate().is_ok());

        let mut settings = FormSettings::new("https://hooks.example.com");
        settings.success_delay = Duration::from_secs(60);
        assert!(settings.validate().is_err());

        let mut settings = FormSettings::new("https://hooks.example.com");
        settings.tags.campaign = String::new();
        assert!(settings.validate().is_err());
    }
}
