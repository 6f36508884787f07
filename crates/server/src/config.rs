use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use lead_gateway::GatewayConfig;
use serde::Deserialize;
use shared::domain::Language;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    /// Spreadsheet collection endpoint. `None` runs the gateway in demo mode.
    pub sheets_url: Option<String>,
    pub demo_delay_ms: u64,
    pub default_language: Language,
    pub whatsapp_number: String,
    pub max_sessions: usize,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            sheets_url: None,
            demo_delay_ms: 1000,
            default_language: Language::Fr,
            whatsapp_number: "+33758928901".into(),
            max_sessions: 10_000,
            max_body_bytes: 16 * 1024,
        }
    }
}

impl Settings {
    pub fn gateway_config(&self) -> anyhow::Result<GatewayConfig> {
        let config = GatewayConfig::from_endpoint(
            self.sheets_url.as_deref(),
            Duration::from_millis(self.demo_delay_ms),
        )?;
        Ok(config)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    sheets_url: Option<String>,
    demo_delay_ms: Option<u64>,
    default_language: Option<String>,
    whatsapp_number: Option<String>,
    max_sessions: Option<usize>,
    max_body_bytes: Option<usize>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then `server.toml` if present, then environment variables.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        apply_file(&mut settings, file_cfg)?;
    }

    if let Some(v) = first_env(&env, &["APP__BIND_ADDR", "SERVER_BIND"]) {
        settings.bind_addr = v;
    }
    if let Some(v) = first_env(
        &env,
        &["APP__SHEETS_URL", "GOOGLE_SHEETS_URL", "VITE_GOOGLE_SHEETS_URL"],
    ) {
        settings.sheets_url = Some(v);
    }
    if let Some(v) = first_env(&env, &["APP__DEMO_DELAY_MS"]) {
        settings.demo_delay_ms = v
            .parse()
            .with_context(|| format!("APP__DEMO_DELAY_MS is not a number: '{v}'"))?;
    }
    if let Some(v) = first_env(&env, &["APP__DEFAULT_LANGUAGE"]) {
        settings.default_language = v.parse()?;
    }
    if let Some(v) = first_env(&env, &["APP__WHATSAPP_NUMBER"]) {
        settings.whatsapp_number = v;
    }
    if let Some(v) = first_env(&env, &["APP__MAX_SESSIONS"]) {
        settings.max_sessions = v
            .parse()
            .with_context(|| format!("APP__MAX_SESSIONS is not a number: '{v}'"))?;
    }
    if let Some(v) = first_env(&env, &["APP__MAX_BODY_BYTES"]) {
        settings.max_body_bytes = v
            .parse()
            .with_context(|| format!("APP__MAX_BODY_BYTES is not a number: '{v}'"))?;
    }

    settings.sheets_url = settings
        .sheets_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());
    settings.max_sessions = settings.max_sessions.max(1);

    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) -> anyhow::Result<()> {
    if let Some(v) = file_cfg.bind_addr {
        settings.bind_addr = v;
    }
    if let Some(v) = file_cfg.sheets_url {
        settings.sheets_url = Some(v);
    }
    if let Some(v) = file_cfg.demo_delay_ms {
        settings.demo_delay_ms = v;
    }
    if let Some(v) = file_cfg.default_language {
        settings.default_language = v.parse()?;
    }
    if let Some(v) = file_cfg.whatsapp_number {
        settings.whatsapp_number = v;
    }
    if let Some(v) = file_cfg.max_sessions {
        settings.max_sessions = v;
    }
    if let Some(v) = file_cfg.max_body_bytes {
        settings.max_body_bytes = v;
    }
    Ok(())
}

fn first_env(env: &impl Fn(&str) -> Option<String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env(key))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
