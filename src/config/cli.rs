use crate::config::toml_config::FormConfig;
use crate::config::{resolve_settings, FormSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "lead-capture")]
#[command(about = "Validate a lead and submit it to the landing page webhook")]
pub struct CliConfig {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Typed into the phone field, so it is formatted as the page would
    #[arg(long)]
    pub phone: String,

    /// Overrides the settings file and WEBHOOK_URL
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = ".env")]
    pub dotenv: PathBuf,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub campaign: Option<String>,

    /// Skip the pause before the success panel
    #[arg(long)]
    pub no_delay: bool,

    /// Record a conversion event after a successful submit
    #[arg(long)]
    pub track_conversion: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads and validates the settings file, if one was given.
    pub fn load_file(&self) -> Result<Option<FormConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        let config = FormConfig::from_file(path)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Settings for this invocation, with command-line overrides applied
    /// on top of the settings file.
    pub fn settings(&self, file: Option<&FormConfig>) -> Result<FormSettings> {
        let mut settings = resolve_settings(self.webhook_url.as_deref(), file, &self.dotenv)?;
        if let Some(source) = &self.source {
            settings.tags.source = source.clone();
        }
        if let Some(campaign) = &self.campaign {
            settings.tags.campaign = campaign.clone();
        }
        if self.no_delay {
            settings.success_delay = Duration::ZERO;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn analytics_enabled(&self, file: Option<&FormConfig>) -> bool {
        self.track_conversion || file.is_some_and(FormConfig::analytics_enabled)
    }
}
