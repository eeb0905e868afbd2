//! Drag and resize preview state.
//!
//! A [`DragPreview`] describes where the event under an active gesture would land
//! if it were dropped now. It is passed to the layout engine as an explicit value.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Suffix appended to the id of a ghost preview event.
pub const PREVIEW_ID_SUFFIX: &str = "-preview";

/// Candidate times for the event under an active drag or resize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPreview {
    pub event_id: String,
    #[serde(rename = "tempStartAt")]
    pub temp_start: DateTime<Local>,
    #[serde(rename = "tempEndAt")]
    pub temp_end: DateTime<Local>,
}

impl DragPreview {
    pub fn new(
        event_id: impl Into<String>,
        temp_start: DateTime<Local>,
        temp_end: DateTime<Local>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            temp_start,
            temp_end,
        }
    }

    pub fn targets(&self, event: &Event) -> bool {
        event.id == self.event_id
    }
}

/// How a preview event enters the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewPolicy {
    /// Keep the original and add a `-preview` copy at the candidate time.
    Ghost,
    /// Swap the original for a copy at the candidate time, keeping its id.
    Replace,
}

/// Id given to the ghost copy of `event_id`.
pub fn preview_id(event_id: &str) -> String {
    format!("{}{}", event_id, PREVIEW_ID_SUFFIX)
}
