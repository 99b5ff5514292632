//! Webhook URL resolution for builds: process environment first, then a
//! local `.env` file, then a placeholder. Also renders the generated
//! `config.js` the landing page loads.

use crate::utils::error::{LeadError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const PLACEHOLDER_WEBHOOK_URL: &str = "https://webhook.site/your-unique-url";

static DOTENV_WEBHOOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^WEBHOOK_URL=(.+)$").expect("dotenv pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookUrlSource {
    Environment,
    DotEnv,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWebhookUrl {
    pub url: String,
    pub source: WebhookUrlSource,
}

/// Resolves the webhook URL from an already-read environment value and the
/// `.env` file at `dotenv_path`. Empty values count as missing. A missing
/// `.env` file is not an error; an unreadable one is.
pub fn resolve_webhook_url(
    env_value: Option<String>,
    dotenv_path: &Path,
) -> Result<ResolvedWebhookUrl> {
    if let Some(url) = env_value.filter(|v| !v.trim().is_empty()) {
        return Ok(ResolvedWebhookUrl {
            url,
            source: WebhookUrlSource::Environment,
        });
    }

    if dotenv_path.exists() {
        let content = std::fs::read_to_string(dotenv_path)?;
        if let Some(url) = webhook_url_from_dotenv(&content) {
            tracing::debug!("Webhook URL read from {}", dotenv_path.display());
            return Ok(ResolvedWebhookUrl {
                url,
                source: WebhookUrlSource::DotEnv,
            });
        }
    }

    tracing::warn!(
        "{} not found. Using default. Please set it in .env or environment variables.",
        WEBHOOK_URL_VAR
    );
    Ok(ResolvedWebhookUrl {
        url: PLACEHOLDER_WEBHOOK_URL.to_string(),
        source: WebhookUrlSource::Placeholder,
    })
}

/// [`resolve_webhook_url`] against the live process environment.
pub fn resolve_from_env(dotenv_path: &Path) -> Result<ResolvedWebhookUrl> {
    resolve_from_var(WEBHOOK_URL_VAR, dotenv_path)
}

pub fn resolve_from_var(var: &str, dotenv_path: &Path) -> Result<ResolvedWebhookUrl> {
    resolve_webhook_url(std::env::var(var).ok(), dotenv_path)
}

/// Resolution for `config.js` generation. With `strict`, falling back to the
/// placeholder is an error instead of a warning.
pub fn resolve_for_build(
    var: &str,
    dotenv_path: &Path,
    strict: bool,
) -> Result<ResolvedWebhookUrl> {
    let resolved = resolve_from_var(var, dotenv_path)?;
    if strict && resolved.source == WebhookUrlSource::Placeholder {
        return Err(LeadError::ConfigValidationError {
            field: WEBHOOK_URL_VAR.to_string(),
            message: format!(
                "{} is not set in the environment or {}",
                var,
                dotenv_path.display()
            ),
        });
    }
    Ok(resolved)
}

pub fn webhook_url_from_dotenv(content: &str) -> Option<String> {
    DOTENV_WEBHOOK_RE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|url| !url.is_empty())
}

fn escape_js_single_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_config_js(webhook_url: &str) -> String {
    format!(
        "// Webhook Configuration\n\
         // This file is auto-generated from environment variables\n\
         // Do not edit manually - update .env file or hosting environment variables instead\n\
         const CONFIG = {{\n    WEBHOOK_URL: '{}'\n}};\n",
        escape_js_single_quoted(webhook_url)
    )
}

pub fn write_config_js(path: &Path, webhook_url: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_config_js(webhook_url))?;

    tracing::info!("config.js generated successfully at {}", path.display());
    tracing::info!("Webhook URL: {}...", preview(webhook_url, 50));
    Ok(())
}

fn preview(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_environment_wins() {
        let mut dotenv = NamedTempFile::new().unwrap();
        writeln!(dotenv, "WEBHOOK_URL=https://from-dotenv.example.com").unwrap();

        let resolved =
            resolve_webhook_url(Some("https://from-env.example.com".into()), dotenv.path())
                .unwrap();

        assert_eq!(resolved.url, "https://from-env.example.com");
        assert_eq!(resolved.source, WebhookUrlSource::Environment);
    }

    #[test]
    fn test_dotenv_fallback() {
        let mut dotenv = NamedTempFile::new().unwrap();
        writeln!(dotenv, "# local settings").unwrap();
        writeln!(dotenv, "OTHER=1").unwrap();
        writeln!(dotenv, "WEBHOOK_URL=  https://hooks.example.com/catch/9  ").unwrap();

        let resolved = resolve_webhook_url(Some(String::new()), dotenv.path()).unwrap();

        assert_eq!(resolved.url, "https://hooks.example.com/catch/9");
        assert_eq!(resolved.source, WebhookUrlSource::DotEnv);
    }

    #[test]
    fn test_placeholder_when_nothing_configured() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_webhook_url(None, &dir.path().join(".env")).unwrap();

        assert_eq!(resolved.url, PLACEHOLDER_WEBHOOK_URL);
        assert_eq!(resolved.source, WebhookUrlSource::Placeholder);
    }

    #[test]
    fn test_resolve_from_process_environment() {
        const VAR: &str = "LEAD_CAPTURE_TEST_WEBHOOK_URL";
        let dir = TempDir::new().unwrap();
        let dotenv = dir.path().join(".env");
        std::fs::write(&dotenv, "WEBHOOK_URL=https://from-dotenv.example.com\n").unwrap();

        std::env::set_var(VAR, "https://from-env.example.com");
        let resolved = resolve_from_var(VAR, &dotenv).unwrap();
        assert_eq!(resolved.url, "https://from-env.example.com");
        assert_eq!(resolved.source, WebhookUrlSource::Environment);

        std::env::remove_var(VAR);
        let resolved = resolve_from_var(VAR, &dotenv).unwrap();
        assert_eq!(resolved.url, "https://from-dotenv.example.com");
        assert_eq!(resolved.source, WebhookUrlSource::DotEnv);

        std::fs::remove_file(&dotenv).unwrap();
        let resolved = resolve_from_var(VAR, &dotenv).unwrap();
        assert_eq!(resolved.source, WebhookUrlSource::Placeholder);
    }

    #[test]
    fn test_strict_build_refuses_placeholder() {
        const VAR: &str = "LEAD_CAPTURE_TEST_STRICT_WEBHOOK_URL";
        let dir = TempDir::new().unwrap();
        let dotenv = dir.path().join(".env");

        let lenient = resolve_for_build(VAR, &dotenv, false).unwrap();
        assert_eq!(lenient.url, PLACEHOLDER_WEBHOOK_URL);

        match resolve_for_build(VAR, &dotenv, true) {
            Err(LeadError::ConfigValidationError { field, message }) => {
                assert_eq!(field, WEBHOOK_URL_VAR);
                assert!(message.contains(VAR));
            }
            other => panic!("expected strict resolution to fail, got {:?}", other),
        }

        std::env::set_var(VAR, "https://hooks.example.com/catch/7");
        let strict = resolve_for_build(VAR, &dotenv, true).unwrap();
        std::env::remove_var(VAR);
        assert_eq!(strict.url, "https://hooks.example.com/catch/7");
        assert_eq!(strict.source, WebhookUrlSource::Environment);
    }

    #[test]
    fn test_dotenv_ignores_indented_or_prefixed_keys() {
        assert_eq!(webhook_url_from_dotenv("  WEBHOOK_URL=https://a.example"), None);
        assert_eq!(webhook_url_from_dotenv("MY_WEBHOOK_URL=https://a.example"), None);
        assert_eq!(webhook_url_from_dotenv("WEBHOOK_URL=   "), None);
        assert_eq!(
            webhook_url_from_dotenv("WEBHOOK_URL=https://a.example\r\n"),
            Some("https://a.example".to_string())
        );
    }

    #[test]
    fn test_render_config_js() {
        let rendered = render_config_js("https://hooks.example.com/catch/1/");
        assert!(rendered.starts_with("// Webhook Configuration\n"));
        assert!(rendered.contains("const CONFIG = {\n    WEBHOOK_URL: 'https://hooks.example.com/catch/1/'\n};\n"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let rendered = render_config_js("https://x.example/?q=it's");
        assert!(rendered.contains(r"WEBHOOK_URL: 'https://x.example/?q=it\'s'"));
    }

    #[test]
    fn test_write_config_js_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public").join("config.js");

        write_config_js(&path, "https://hooks.example.com/catch/1").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_config_js("https://hooks.example.com/catch/1"));
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let url = format!("https://{}", "a".repeat(80));
        assert_eq!(preview(&url, 50).chars().count(), 50);
        assert_eq!(preview("short", 50), "short");
    }
}
