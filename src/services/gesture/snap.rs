//! Minute arithmetic for pointer gestures on a vertical time axis.

use crate::utils::date::MINUTES_PER_DAY;

pub const DEFAULT_SNAP_MINUTES: u32 = 15;
/// Shortest event a resize or creation gesture may produce.
pub const MIN_GESTURE_MINUTES: i64 = 15;

/// Round to the nearest multiple of `snap`, halves rounding up.
///
/// ```
/// use day_layout::services::gesture::snap::snap_to_minutes;
///
/// assert_eq!(snap_to_minutes(7.0, 15), 0);
/// assert_eq!(snap_to_minutes(8.0, 15), 15);
/// assert_eq!(snap_to_minutes(22.0, 15), 15);
/// assert_eq!(snap_to_minutes(23.0, 15), 30);
/// ```
pub fn snap_to_minutes(minutes: f64, snap: u32) -> i64 {
    let snap = f64::from(snap.max(1));
    ((minutes / snap + 0.5).floor() * snap) as i64
}

/// Keep a moved interval inside the day: no start before 00:00, no end after `max_minutes`.
pub fn clamp_start_minutes(start: i64, duration: i64, max_minutes: i64) -> i64 {
    if start < 0 {
        0
    } else if start + duration > max_minutes {
        max_minutes - duration
    } else {
        start
    }
}

pub fn px_to_minutes(offset_px: f64, hour_height: f64) -> f64 {
    (offset_px / hour_height) * 60.0
}

pub fn minutes_to_px(minutes: f64, hour_height: f64) -> f64 {
    (minutes / 60.0) * hour_height
}

/// Snapped range for a new event dragged out from `anchor` to `current`.
///
/// The range is ordered, at least [`MIN_GESTURE_MINUTES`] long and inside the day.
pub fn creation_range(anchor: f64, current: f64, snap: u32) -> (i64, i64) {
    let day = i64::from(MINUTES_PER_DAY);
    let anchor = snap_to_minutes(anchor, snap);
    let current = snap_to_minutes(current, snap);

    let mut start = anchor.min(current);
    let mut end = anchor.max(current);

    if end - start < MIN_GESTURE_MINUTES {
        if current >= anchor {
            end = start + MIN_GESTURE_MINUTES;
        } else {
            start = end - MIN_GESTURE_MINUTES;
        }
    }

    start = start.max(0);
    end = end.min(day);
    if end - start < MIN_GESTURE_MINUTES {
        if start == 0 {
            end = MIN_GESTURE_MINUTES;
        } else {
            start = day - MIN_GESTURE_MINUTES;
        }
    }

    (start, end)
}
