//! Calendar event store entry point.
//! Keeps the event list in memory, persists it as JSON after every change,
//! and seeds sample events on first use. Operations are organized across
//! focused submodules.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::models::event::Event;

pub mod crud;
pub mod persistence;
pub mod queries;
pub mod samples;

pub use crud::{EventPatch, NewEvent};
pub use queries::filter_events_by_day;

/// Event list backed by an optional JSON file.
#[derive(Debug)]
pub struct EventStore {
    path: Option<PathBuf>,
    events: Vec<Event>,
    seed_date: NaiveDate,
}

impl EventStore {
    /// Open the store at `path`, seeding today's sample events if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_seeded(path, Local::now().date_naive())
    }

    /// Open the store at `path`, seeding sample events on `seed_date` if the file is missing.
    pub fn open_seeded(path: impl Into<PathBuf>, seed_date: NaiveDate) -> Result<Self> {
        let path = path.into();
        let (events, seeded) = match persistence::load_events(&path)? {
            Some(stored) => {
                let events = keep_valid(stored);
                log::info!("Loaded {} events from {}", events.len(), path.display());
                (events, false)
            }
            None => {
                log::info!(
                    "No event file at {}, starting with sample events",
                    path.display()
                );
                (samples::sample_events(seed_date), true)
            }
        };

        let store = Self {
            path: Some(path),
            events,
            seed_date,
        };
        if seeded {
            store.save()?;
        }
        Ok(store)
    }

    /// Store that never touches the disk.
    pub fn in_memory(events: Vec<Event>) -> Self {
        Self {
            path: None,
            events: keep_valid(events),
            seed_date: Local::now().date_naive(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the current events to disk. No-op for in-memory stores.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => persistence::save_events(path, &self.events),
            None => Ok(()),
        }
    }

    /// Persist `events`, then make them current. On error the store is unchanged.
    fn commit(&mut self, events: Vec<Event>) -> Result<()> {
        if let Some(path) = &self.path {
            persistence::save_events(path, &events)?;
        }
        self.events = events;
        Ok(())
    }
}

/// Drop events that fail validation or repeat an earlier id.
fn keep_valid(events: Vec<Event>) -> Vec<Event> {
    let mut kept: Vec<Event> = Vec::with_capacity(events.len());
    for event in events {
        if let Err(err) = event.validate() {
            log::warn!("Skipping invalid event {:?}: {}", event.id, err);
            continue;
        }
        if kept.iter().any(|existing| existing.id == event.id) {
            log::warn!("Skipping duplicate event id {:?}", event.id);
            continue;
        }
        kept.push(event);
    }
    kept
}
