//! Geometry projection for the two render modes.

use crate::models::layout::{ColumnAssignment, Percent, PixelLayout, TrackLayout};
use crate::utils::date::{duration_minutes, minutes_since_midnight};

/// Shortest rendered height in pixel mode.
pub const MIN_HEIGHT_PX: f64 = 15.0;
/// Shortest row span in track mode.
pub const MIN_DURATION_MINUTES: u32 = 15;
/// z-index of column 0.
pub const BASE_Z_INDEX: u32 = 10;

/// Rectangle for an assigned event at `hour_height` pixels per hour.
pub fn project_pixel(assignment: &ColumnAssignment<'_>, hour_height: f64) -> PixelLayout {
    let event = assignment.event;
    let start_minutes = f64::from(minutes_since_midnight(event.start));
    let duration = f64::from(duration_minutes(event.start, event.end));
    let column = f64::from(assignment.column);
    let total = f64::from(assignment.total_columns);

    PixelLayout {
        event: event.clone(),
        top: (start_minutes / 60.0) * hour_height,
        left: Percent((column / total) * 100.0),
        width: Percent((1.0 / total) * 100.0),
        height: ((duration / 60.0) * hour_height).max(MIN_HEIGHT_PX),
        z_index: BASE_Z_INDEX + assignment.column,
    }
}

/// Track placement for an assigned event on a day of `day_total_columns` tracks.
///
/// `day_total_columns` is normally a multiple of the group's column count. When it
/// is not, spans round down so columns stay disjoint and inside the day.
pub fn project_track(assignment: &ColumnAssignment<'_>, day_total_columns: u32) -> TrackLayout {
    let event = assignment.event;
    let column_span = day_total_columns / assignment.total_columns.max(1);

    TrackLayout {
        event: event.clone(),
        row_start: minutes_since_midnight(event.start),
        row_span: duration_minutes(event.start, event.end).max(MIN_DURATION_MINUTES),
        column_start: assignment.column * column_span,
        column_span,
    }
}
