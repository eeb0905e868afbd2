use chrono::NaiveDate;

use super::EventStore;
use crate::models::event::Event;

/// Events whose start falls on `date`.
pub fn filter_events_by_day(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.start.date_naive() == date)
        .cloned()
        .collect()
}

impl EventStore {
    /// Every event, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events starting on `date`, ready to hand to the layout engine.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        filter_events_by_day(&self.events, date)
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }
}
