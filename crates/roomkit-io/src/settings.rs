use anyhow::{Context, Result};
use roomkit_session::Settings;
use std::path::Path;

/// Parses settings JSON. Missing keys keep their defaults.
pub fn parse_settings(text: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(text).context("parse settings JSON")?;
    settings.units().context("invalid settings scale")?;
    Ok(settings)
}

pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("load settings from {}", path.display()))
}
