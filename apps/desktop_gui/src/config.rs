use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE_NAME: &str = "widgets.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub otp_length: usize,
    pub expected_code: String,
    pub checkbox_options: Vec<String>,
    pub checkbox_selected: Option<String>,
    pub checkbox_partial: Option<String>,
    pub radio_options: Vec<String>,
    pub radio_selected: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let options = vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
        ];
        Self {
            otp_length: 4,
            expected_code: "1234".into(),
            checkbox_options: options.clone(),
            checkbox_selected: Some("Option A".into()),
            checkbox_partial: Some("Option B".into()),
            radio_options: options,
            radio_selected: Some("Option A".into()),
        }
    }
}

impl Settings {
    /// Drops presets that name an option missing from their group.
    pub fn retain_known_presets(&mut self) {
        retain_known(&mut self.checkbox_selected, &self.checkbox_options, "checkbox_selected");
        retain_known(&mut self.checkbox_partial, &self.checkbox_options, "checkbox_partial");
        retain_known(&mut self.radio_selected, &self.radio_options, "radio_selected");
    }
}

fn retain_known(preset: &mut Option<String>, options: &[String], field: &'static str) {
    if let Some(value) = preset.as_ref() {
        if !options.contains(value) {
            tracing::warn!(field, preset = %value, "dropping preset missing from option list");
            *preset = None;
        }
    }
}

/// Loads settings from `explicit_path`, or else the first settings file found
/// in the working directory or the user config dir, then applies `APP__*`
/// environment overrides.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => match default_settings_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => read_settings_file(&path)?,
            None => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.retain_known_presets();
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    toml::from_str(raw).context("invalid widget settings")
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let settings = parse_settings(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "loaded widget settings");
    Ok(settings)
}

fn default_settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("input_widgets").join(SETTINGS_FILE_NAME));
    }
    paths
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__OTP_LENGTH") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.otp_length = parsed,
            Err(err) => tracing::warn!(value = %v, %err, "ignoring APP__OTP_LENGTH"),
        }
    }

    if let Some(v) = lookup("APP__EXPECTED_CODE") {
        settings.expected_code = v.trim().to_string();
    }

    if let Some(v) = lookup("APP__CHECKBOX_OPTIONS") {
        settings.checkbox_options = split_list(&v);
    }
    if let Some(v) = lookup("APP__CHECKBOX_SELECTED") {
        settings.checkbox_selected = non_empty(&v);
    }
    if let Some(v) = lookup("APP__CHECKBOX_PARTIAL") {
        settings.checkbox_partial = non_empty(&v);
    }

    if let Some(v) = lookup("APP__RADIO_OPTIONS") {
        settings.radio_options = split_list(&v);
    }
    if let Some(v) = lookup("APP__RADIO_SELECTED") {
        settings.radio_selected = non_empty(&v);
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
