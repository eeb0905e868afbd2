// Week and hour-grid helpers for day/week views

use chrono::{DateTime, Datelike, Days, Local, NaiveDate};
use serde::Serialize;

use super::minutes_since_midnight;

pub const DAYS_IN_WEEK: u32 = 7;
pub const HOURS_IN_DAY: u32 = 24;

/// One column of a Monday-based week view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day_of_week: String,
    /// Month/day label without padding, e.g. "2/14"
    pub date_label: String,
    pub column_index: u32,
    pub is_today: bool,
}

/// Hour label for the time gutter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub hour: u32,
    pub label: String,
    pub top: f64,
}

/// The seven days of the Monday-based week containing `base`.
pub fn week_days(base: NaiveDate, today: NaiveDate) -> Vec<DayInfo> {
    let offset = u64::from(base.weekday().num_days_from_monday());
    let Some(monday) = base.checked_sub_days(Days::new(offset)) else {
        return Vec::new();
    };

    (0..DAYS_IN_WEEK)
        .filter_map(|index| {
            let date = monday.checked_add_days(Days::new(u64::from(index)))?;
            Some(DayInfo {
                date,
                day_of_week: date.format("%a").to_string(),
                date_label: format!("{}/{}", date.month(), date.day()),
                column_index: index,
                is_today: date == today,
            })
        })
        .collect()
}

/// Hourly labels with their vertical offsets for the given hour height.
pub fn time_slots(hour_height: f64) -> Vec<TimeSlot> {
    (0..HOURS_IN_DAY)
        .map(|hour| TimeSlot {
            hour,
            label: format!("{}:00", hour),
            top: f64::from(hour) * hour_height,
        })
        .collect()
}

/// Vertical offset of the current-time indicator, at whole-minute precision.
pub fn now_offset(now: DateTime<Local>, hour_height: f64) -> f64 {
    f64::from(minutes_since_midnight(now)) / 60.0 * hour_height
}
