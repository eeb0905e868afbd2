// Date utility functions
// Wall-clock helpers shared by the layout engine and gesture handling

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Timelike};

pub mod week;

pub use week::{now_offset, time_slots, week_days, DayInfo, TimeSlot};

/// Minutes in one calendar day (00:00 to 24:00).
pub const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Local midnight at the start of `date`, if that instant exists in the local zone.
pub fn start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
}

/// Minutes elapsed since local midnight, from the wall-clock hour and minute.
///
/// Seconds are ignored and the calendar date plays no part.
pub fn minutes_since_midnight(timestamp: DateTime<Local>) -> u32 {
    timestamp.hour() * 60 + timestamp.minute()
}

/// Wall-clock end minute of an interval, measured on the start's day.
///
/// An end falling on a later date (an event that ends at midnight) is
/// reported as [`MINUTES_PER_DAY`].
pub fn end_minutes_within_day(start: DateTime<Local>, end: DateTime<Local>) -> u32 {
    if end.date_naive() > start.date_naive() {
        MINUTES_PER_DAY
    } else {
        minutes_since_midnight(end)
    }
}

/// Wall-clock duration in minutes; zero when the interval is empty or inverted.
pub fn duration_minutes(start: DateTime<Local>, end: DateTime<Local>) -> u32 {
    end_minutes_within_day(start, end).saturating_sub(minutes_since_midnight(start))
}

/// Keep the calendar date of `timestamp` and set its time to `minutes` after midnight.
///
/// Seconds are zeroed. `minutes == MINUTES_PER_DAY` yields midnight of the following
/// day. Returns `None` for negative minutes, minutes past the end of the day, or a
/// wall-clock time that does not exist locally.
pub fn with_minutes(timestamp: DateTime<Local>, minutes: i64) -> Option<DateTime<Local>> {
    if !(0..=i64::from(MINUTES_PER_DAY)).contains(&minutes) {
        return None;
    }
    let midnight = timestamp.date_naive().and_time(NaiveTime::MIN);
    let naive = midnight + Duration::minutes(minutes);
    Local.from_local_datetime(&naive).earliest()
}
