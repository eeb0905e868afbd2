use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use uuid::Uuid;

use super::samples::sample_events;
use super::EventStore;
use crate::models::event::{Event, DEFAULT_EVENT_COLOR};

/// Fields for an event that does not have an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: Option<String>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub color: Option<String>,
}

impl EventPatch {
    pub fn times(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }
}

impl EventStore {
    /// Create an event with a fresh id and persist it.
    pub fn add(&mut self, new_event: NewEvent) -> Result<Event> {
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: new_event.title,
            start: new_event.start,
            end: new_event.end,
            color: new_event
                .color
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
        };
        event.validate()?;

        let mut events = self.events.clone();
        events.push(event.clone());
        self.commit(events)?;
        log::info!("Added event {} ({})", event.id, event.title);
        Ok(event)
    }

    /// Apply `patch` to the event with `id` and persist it.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> Result<Event> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| anyhow!("Event {} not found", id))?;

        let mut updated = self.events[index].clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(start) = patch.start {
            updated.start = start;
        }
        if let Some(end) = patch.end {
            updated.end = end;
        }
        if let Some(color) = patch.color {
            updated.color = color;
        }
        updated.validate()?;

        let mut events = self.events.clone();
        events[index] = updated.clone();
        self.commit(events)?;
        Ok(updated)
    }

    /// Remove the event with `id`. Returns false if there was none.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let remaining: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.id != id)
            .cloned()
            .collect();
        if remaining.len() == self.events.len() {
            return Ok(false);
        }
        self.commit(remaining)?;
        Ok(true)
    }

    /// Replace every event with the sample set.
    pub fn reset(&mut self) -> Result<()> {
        self.commit(sample_events(self.seed_date))
    }
}
