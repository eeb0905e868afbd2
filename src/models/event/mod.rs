// Event module
// Calendar event model consumed by the day layout engine

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color given to events created without one.
pub const DEFAULT_EVENT_COLOR: &str = "#3B82F6";

/// Calendar event for a single day.
///
/// Events are immutable values owned by the caller. The layout engine only reads
/// them, and may derive a preview copy with different times through
/// [`Event::with_times`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "startAt")]
    pub start: DateTime<Local>,
    #[serde(rename = "endAt")]
    pub end: DateTime<Local>,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Validation errors for events entering the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event id cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    InvalidInterval,
    #[error("Color must be in hex format (#RRGGBB or #RGB), got {0:?}")]
    InvalidColor(String),
    #[error("Event {field} is required")]
    MissingField { field: &'static str },
}

fn default_color() -> String {
    DEFAULT_EVENT_COLOR.to_string()
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Unique identifier (non-empty)
    /// * `title` - Event title (non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time, strictly after `start`
    ///
    /// # Examples
    /// ```
    /// use day_layout::models::event::Event;
    /// use chrono::{Local, TimeZone};
    ///
    /// let start = Local.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("standup", "Team Meeting", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(1));
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: default_color(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventError> {
        if self.id.trim().is_empty() {
            return Err(EventError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventError::InvalidInterval);
        }

        if !is_valid_hex_color(&self.color) {
            return Err(EventError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Copy of this event with the given id and times; every other field is kept.
    pub fn with_times(
        &self,
        id: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            id: id.into(),
            title: self.title.clone(),
            start,
            end,
            color: self.color.clone(),
        }
    }
}

/// Check if a string is a valid #RGB or #RRGGBB color code.
fn is_valid_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build and validate the event
    pub fn build(self) -> Result<Event, EventError> {
        let event = Event {
            id: self.id.ok_or(EventError::MissingField { field: "id" })?,
            title: self.title.ok_or(EventError::MissingField { field: "title" })?,
            start: self.start.ok_or(EventError::MissingField { field: "start" })?,
            end: self.end.ok_or(EventError::MissingField { field: "end" })?,
            color: self.color.unwrap_or_else(default_color),
        };

        event.validate()?;
        Ok(event)
    }
}
