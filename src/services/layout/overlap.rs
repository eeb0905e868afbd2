//! Overlap detection: partitions a day's events into connected groups.

use std::cmp::Ordering;

use chrono::{DateTime, Local};

use crate::models::event::Event;

/// End used for overlap tests. An inverted interval is treated as empty.
fn effective_end(event: &Event) -> DateTime<Local> {
    event.end.max(event.start)
}

/// Half-open overlap test: touching intervals do not overlap.
pub fn events_overlap(a: &Event, b: &Event) -> bool {
    a.start < effective_end(b) && b.start < effective_end(a)
}

/// Start time ascending, then id.
pub(crate) fn chronological(a: &Event, b: &Event) -> Ordering {
    a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id))
}

/// Group events that are transitively connected by overlap.
///
/// Events are visited in chronological order; an event joins the open group if it
/// overlaps any member of it, otherwise the group is closed. Because the input is
/// time-sorted a closed group can never be reached again.
pub fn detect_overlaps(events: &[Event]) -> Vec<Vec<&Event>> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| chronological(a, b));

    let mut groups = Vec::new();
    let mut current: Vec<&Event> = Vec::new();

    for event in sorted {
        let joins = current.iter().any(|member| events_overlap(member, event));
        if !joins && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(event);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
