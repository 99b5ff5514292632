use crate::config::{FormSettings, DEFAULT_SUCCESS_DELAY_MS};
use crate::core::{ConversionEvent, LeadTags};
use crate::utils::error::{LeadError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

/// Optional settings file for the lead form. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub webhook: Option<WebhookConfig>,
    pub lead: Option<LeadConfig>,
    pub ui: Option<UiConfig>,
    pub analytics: Option<AnalyticsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadConfig {
    pub source: Option<String>,
    pub campaign: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub success_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub enabled: Option<bool>,
    pub event: Option<String>,
    pub send_to: Option<String>,
    pub value: Option<f64>,
    pub currency: Option<String>,
}

impl FormConfig {
    /// Loads and parses a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LeadError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LeadError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Webhook URL from the file. A value still holding an unresolved
    /// `${VAR}` reference counts as unset.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook
            .as_ref()
            .and_then(|w| w.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty() && !ENV_VAR_RE.is_match(url))
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics
            .as_ref()
            .map(|a| a.enabled.unwrap_or(true))
            .unwrap_or(false)
    }

    pub fn success_delay_ms(&self) -> u64 {
        self.ui
            .as_ref()
            .and_then(|ui| ui.success_delay_ms)
            .unwrap_or(DEFAULT_SUCCESS_DELAY_MS)
    }

    /// Builds controller settings around an already-resolved webhook URL.
    pub fn to_settings(&self, webhook_url: impl Into<String>) -> FormSettings {
        let defaults = LeadTags::default();
        let tags = match &self.lead {
            Some(lead) => LeadTags {
                source: lead.source.clone().unwrap_or(defaults.source),
                campaign: lead.campaign.clone().unwrap_or(defaults.campaign),
            },
            None => defaults,
        };

        let mut conversion = ConversionEvent::default();
        if let Some(analytics) = &self.analytics {
            if let Some(event) = &analytics.event {
                conversion.name = event.clone();
            }
            if let Some(send_to) = &analytics.send_to {
                conversion.send_to = send_to.clone();
            }
            if let Some(value) = analytics.value {
                conversion.value = value;
            }
            if let Some(currency) = &analytics.currency {
                conversion.currency = currency.clone();
            }
        }

        FormSettings {
            webhook_url: webhook_url.into(),
            tags,
            success_delay: Duration::from_millis(self.success_delay_ms()),
            conversion,
        }
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.webhook_url() {
            crate::utils::validation::validate_url("webhook.url", url)?;
        }
        if let Some(lead) = &self.lead {
            if let Some(source) = &lead.source {
                crate::utils::validation::validate_non_empty_string("lead.source", source)?;
            }
            if let Some(campaign) = &lead.campaign {
                crate::utils::validation::validate_non_empty_string("lead.campaign", campaign)?;
            }
        }
        crate::utils::validation::validate_range(
            "ui.success_delay_ms",
            self.success_delay_ms(),
            0,
            crate::config::MAX_SUCCESS_DELAY_MS,
        )?;
        Ok(())
    }
}
