// Settings module
// Layout and gesture configuration, persisted as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::layout::{RenderKind, RenderMode};
use crate::models::preview::PreviewPolicy;

pub const DEFAULT_HOUR_HEIGHT: f64 = 60.0;
pub const DEFAULT_SNAP_MINUTES: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("hour_height must be a positive number of pixels")]
    InvalidHourHeight,
    #[error("snap_minutes must be between 1 and 1440")]
    InvalidSnap,
    #[error("track_width must be at least 1")]
    InvalidTrackWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Pixels per hour in pixel mode
    pub hour_height: f64,
    pub render_mode: RenderKind,
    /// Fixed track count for track mode; the LCM of group widths when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_width: Option<u32>,
    /// Overrides the per-mode preview policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_policy: Option<PreviewPolicy>,
    pub snap_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            hour_height: DEFAULT_HOUR_HEIGHT,
            render_mode: RenderKind::Pixel,
            track_width: None,
            preview_policy: None,
            snap_minutes: DEFAULT_SNAP_MINUTES,
            events_file: None,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(SettingsError::InvalidHourHeight);
        }
        if !(1..=1440).contains(&self.snap_minutes) {
            return Err(SettingsError::InvalidSnap);
        }
        if self.track_width == Some(0) {
            return Err(SettingsError::InvalidTrackWidth);
        }
        Ok(())
    }

    pub fn render_mode(&self) -> RenderMode {
        match self.render_mode {
            RenderKind::Pixel => RenderMode::Pixel {
                hour_height: self.hour_height,
            },
            RenderKind::Track => RenderMode::Track {
                track_width: self.track_width,
            },
        }
    }

    /// Effective preview policy: the override if set, else the mode's own.
    pub fn preview_policy(&self) -> PreviewPolicy {
        self.preview_policy
            .unwrap_or_else(|| self.render_mode().default_preview_policy())
    }
}
