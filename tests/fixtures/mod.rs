// Test fixtures - reusable test data
// Provides consistent events and timestamps across all test files

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use day_layout::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Feb 14, 2025 (the day most fixtures live on)
    pub fn valentine_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// Returns Feb 15, 2025
    pub fn day_after() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
    }

    /// Returns HH:MM on Feb 14, 2025
    pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 2, 14, hour, minute, 0)
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Event on Feb 14, 2025 from `start` to `end` (hour, minute)
    pub fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            id.to_uppercase(),
            dates::at(start.0, start.1),
            dates::at(end.0, end.1),
        )
        .unwrap()
    }

    /// A 09:00-11:00, B 10:00-12:00, C 09:30-10:30: one group of three
    pub fn triple_overlap() -> Vec<Event> {
        vec![
            event("a", (9, 0), (11, 0)),
            event("b", (10, 0), (12, 0)),
            event("c", (9, 30), (10, 30)),
        ]
    }

    /// A 09:00-10:00 and B 10:00-11:00: touching, never overlapping
    pub fn back_to_back() -> Vec<Event> {
        vec![event("a", (9, 0), (10, 0)), event("b", (10, 0), (11, 0))]
    }

    /// One pair group and one triple group on the same day
    pub fn mixed_day() -> Vec<Event> {
        vec![
            event("p1", (8, 0), (9, 0)),
            event("p2", (8, 30), (9, 30)),
            event("t1", (13, 0), (15, 0)),
            event("t2", (13, 30), (14, 30)),
            event("t3", (14, 0), (16, 0)),
        ]
    }
}
