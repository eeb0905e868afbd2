use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::LayoutSettings;

const SETTINGS_FILE: &str = "settings.toml";
const EVENTS_FILE: &str = "events.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "RustCalendar", "DayLayout")
}

/// Default location of the event store.
pub fn default_events_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(EVENTS_FILE),
        None => PathBuf::from(EVENTS_FILE),
    }
}

/// Layout settings persisted as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config directory, or the working directory
    /// when no home directory can be determined.
    pub fn default_location() -> Self {
        match project_dirs() {
            Some(dirs) => Self::new(dirs.config_dir().join(SETTINGS_FILE)),
            None => Self::new(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; defaults when the file does not exist
    pub fn get(&self) -> Result<LayoutSettings> {
        if !self.path.exists() {
            log::debug!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            return Ok(LayoutSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: LayoutSettings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &LayoutSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {}", parent.display()))?;
            }
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
