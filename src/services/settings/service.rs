use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::grid::TimeGrid;
use crate::models::settings::SchedulerSettings;

const SETTINGS_FILE: &str = "scheduler.toml";

/// Loads and stores scheduler settings as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config location, falling back to the
    /// working directory when no home directory can be resolved.
    pub fn for_user() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; defaults when the file does not exist yet
    pub fn get(&self) -> Result<SchedulerSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            return Ok(SchedulerSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: SchedulerSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        validate(&settings)?;
        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &SchedulerSettings) -> Result<()> {
        validate(settings)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Per-user settings file path
pub fn default_path() -> PathBuf {
    match ProjectDirs::from("com", "Signage", "PlaylistScheduler") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
        None => PathBuf::from(SETTINGS_FILE),
    }
}

fn validate(settings: &SchedulerSettings) -> Result<()> {
    TimeGrid::from_settings(&settings.grid).map_err(|e| anyhow!("Invalid settings: {}", e))?;

    let content = &settings.content;
    if content.languages.is_empty() {
        return Err(anyhow!("Invalid settings: at least one language is required"));
    }
    if !content.languages.contains(&content.primary_language) {
        return Err(anyhow!(
            "Invalid settings: primary language '{}' is not in the language list",
            content.primary_language
        ));
    }
    Ok(())
}
