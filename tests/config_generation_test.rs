use anyhow::Result;
use lead_capture::config::resolve_settings;
use lead_capture::config::toml_config::FormConfig;
use lead_capture::config::webhook_env::{
    render_config_js, resolve_webhook_url, write_config_js, WebhookUrlSource,
};
use lead_capture::core::ConfigProvider;
use std::time::Duration;
use tempfile::TempDir;

/// .env → config.js, the way a static-site build runs it.
#[test]
fn test_generate_config_js_from_dotenv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dotenv = temp_dir.path().join(".env");
    std::fs::write(
        &dotenv,
        "NODE_ENV=production\nWEBHOOK_URL=https://hooks.zapier.example/hooks/catch/1/xyz/\n",
    )?;

    let resolved = resolve_webhook_url(None, &dotenv)?;
    assert_eq!(resolved.source, WebhookUrlSource::DotEnv);

    let output = temp_dir.path().join("site").join("config.js");
    write_config_js(&output, &resolved.url)?;

    let generated = std::fs::read_to_string(&output)?;
    assert_eq!(generated, render_config_js("https://hooks.zapier.example/hooks/catch/1/xyz/"));
    assert!(generated.contains("WEBHOOK_URL: 'https://hooks.zapier.example/hooks/catch/1/xyz/'"));
    assert!(generated.contains("auto-generated"));
    Ok(())
}

#[test]
fn test_placeholder_config_js() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let resolved = resolve_webhook_url(None, &temp_dir.path().join("missing.env"))?;
    assert_eq!(resolved.source, WebhookUrlSource::Placeholder);

    let output = temp_dir.path().join("config.js");
    write_config_js(&output, &resolved.url)?;
    assert!(std::fs::read_to_string(&output)?
        .contains("WEBHOOK_URL: 'https://webhook.site/your-unique-url'"));
    Ok(())
}

#[test]
fn test_settings_file_feeds_controller_settings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("lead-form.toml");
    std::fs::write(
        &config_path,
        r#"
[webhook]
url = "https://hooks.example.com/catch/7/"

[lead]
source = "Partner Landing Page"

[ui]
success_delay_ms = 0

[analytics]
enabled = true
currency = "EUR"
"#,
    )?;

    let file = FormConfig::from_file(&config_path)?;
    let settings = resolve_settings(None, Some(&file), &temp_dir.path().join(".env"))?;

    assert_eq!(settings.webhook_url(), "https://hooks.example.com/catch/7/");
    assert_eq!(settings.lead_tags().source, "Partner Landing Page");
    assert_eq!(settings.lead_tags().campaign, "90-Day Transformation");
    assert_eq!(settings.success_delay(), Duration::ZERO);
    assert_eq!(settings.conversion_event().currency, "EUR");
    assert!(file.analytics_enabled());
    Ok(())
}
