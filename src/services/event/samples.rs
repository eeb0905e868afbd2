use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::start_of_day;

/// (id, title, start minute, end minute, color)
const SAMPLES: &[(&str, &str, i64, i64, &str)] = &[
    ("sample-standup", "Team standup", 540, 570, "#3B82F6"),
    ("sample-design", "Design review", 600, 660, "#8B5CF6"),
    ("sample-focus", "Focus time", 615, 675, "#10B981"),
    ("sample-one-on-one", "1:1", 630, 690, "#F59E0B"),
    ("sample-lunch", "Lunch", 720, 780, "#EF4444"),
    ("sample-planning", "Sprint planning", 840, 930, "#3B82F6"),
    ("sample-code-review", "Code review", 900, 960, "#8B5CF6"),
];

/// Seed events placed on `date`.
pub fn sample_events(date: NaiveDate) -> Vec<Event> {
    let Some(midnight) = start_of_day(date) else {
        return Vec::new();
    };

    SAMPLES
        .iter()
        .map(|&(id, title, start, end, color)| Event {
            id: id.to_string(),
            title: title.to_string(),
            start: midnight + chrono::Duration::minutes(start),
            end: midnight + chrono::Duration::minutes(end),
            color: color.to_string(),
        })
        .collect()
}
