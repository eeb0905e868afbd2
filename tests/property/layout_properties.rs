// Property-based tests for the day layout engine
// Random days of events must always produce complete, non-overlapping layouts

use chrono::{DateTime, Duration, Local, NaiveDate};
use day_layout::models::layout::TrackLayout;
use day_layout::services::layout::{
    assign_columns, detect_overlaps, events_overlap, group_width, layout_day_with_policy,
};
use day_layout::utils::date::start_of_day;
use day_layout::{layout_day, DayLayout, DragPreview, Event, PreviewPolicy, RenderMode};
use proptest::prelude::*;
use proptest::sample::Index;

const PIXEL: RenderMode = RenderMode::Pixel { hour_height: 60.0 };
const TRACK: RenderMode = RenderMode::Track { track_width: None };

fn midnight() -> DateTime<Local> {
    start_of_day(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()).unwrap()
}

/// Events built from (start minute, duration) pairs on Feb 14, 2025.
fn build_events(spans: &[(u32, u32)]) -> Vec<Event> {
    let midnight = midnight();
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, duration))| {
            let end = (start + duration).min(1440);
            Event::new(
                format!("e{:02}", i),
                format!("Event {}", i),
                midnight + Duration::minutes(i64::from(start)),
                midnight + Duration::minutes(i64::from(end)),
            )
            .unwrap()
        })
        .collect()
}

/// Largest number of events active at the same instant.
fn max_concurrency(group: &[&Event]) -> u32 {
    let mut points: Vec<(i64, i32)> = group
        .iter()
        .flat_map(|e| [(e.start.timestamp(), 1), (e.end.timestamp(), -1)])
        .collect();
    // Ends sort before starts at the same instant.
    points.sort();

    let mut active = 0;
    let mut peak = 0;
    for (_, delta) in points {
        active += delta;
        peak = peak.max(active);
    }
    peak as u32
}

/// Preview moving the event at `target` to `start` for `duration` minutes.
fn build_preview(events: &[Event], target: Index, (start, duration): (u32, u32)) -> DragPreview {
    let event = &events[target.index(events.len())];
    let end = (start + duration).min(1440);
    DragPreview::new(
        event.id.clone(),
        midnight() + Duration::minutes(i64::from(start)),
        midnight() + Duration::minutes(i64::from(end)),
    )
}

fn ids_unique(ids: &[&str]) -> bool {
    let mut sorted = ids.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted.len() == ids.len()
}

/// Overlapping events never share a track.
fn tracks_disjoint(layouts: &[TrackLayout]) -> bool {
    layouts.iter().enumerate().all(|(i, a)| {
        layouts.iter().skip(i + 1).all(|b| {
            !events_overlap(&a.event, &b.event)
                || a.column_start + a.column_span <= b.column_start
                || b.column_start + b.column_span <= a.column_start
        })
    })
}

fn spans() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec(span(), 0..30)
}

fn span() -> impl Strategy<Value = (u32, u32)> {
    (0..1430u32, 1..240u32)
}

proptest! {
    /// Property: every event lands in exactly one overlap group
    #[test]
    fn prop_groups_partition_events(spans in spans()) {
        let events = build_events(&spans);
        let groups = detect_overlaps(&events);

        let mut ids: Vec<&str> = groups.iter().flatten().map(|e| e.id.as_str()).collect();
        ids.sort();
        let mut expected: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        expected.sort();
        prop_assert_eq!(ids, expected);

        // Events in different groups never overlap
        for (i, a) in groups.iter().enumerate() {
            for b in groups.iter().skip(i + 1) {
                for x in a {
                    for y in b {
                        prop_assert!(!events_overlap(x, y));
                    }
                }
            }
        }
    }

    /// Property: overlapping events in a group never share a column
    #[test]
    fn prop_columns_never_collide(spans in spans()) {
        let events = build_events(&spans);
        for group in detect_overlaps(&events) {
            let assignments = assign_columns(&group);
            prop_assert_eq!(assignments.len(), group.len());

            for (i, a) in assignments.iter().enumerate() {
                prop_assert!(a.column < a.total_columns);
                for b in assignments.iter().skip(i + 1) {
                    if events_overlap(a.event, b.event) {
                        prop_assert_ne!(a.column, b.column);
                    }
                }
            }
        }
    }

    /// Property: a group uses exactly as many columns as its peak concurrency
    #[test]
    fn prop_column_count_is_minimal(spans in spans()) {
        let events = build_events(&spans);
        for group in detect_overlaps(&events) {
            let assignments = assign_columns(&group);
            prop_assert_eq!(group_width(&assignments), max_concurrency(&group));
        }
    }

    /// Property: pixel rectangles stay inside the day column
    #[test]
    fn prop_pixel_geometry_in_bounds(spans in spans()) {
        let events = build_events(&spans);
        let layout = layout_day(&events, None, RenderMode::Pixel { hour_height: 48.0 });
        let layouts = layout.pixel_layouts().unwrap();

        prop_assert_eq!(layouts.len(), events.len());
        for l in layouts {
            prop_assert!(l.left.value() >= 0.0);
            prop_assert!(l.left.value() + l.width.value() <= 100.0 + 1e-9);
            prop_assert!(l.height >= 15.0);
            prop_assert!(l.z_index >= 10);
        }
    }

    /// Property: track spans divide the day evenly and never cross the edge
    #[test]
    fn prop_track_geometry_in_bounds(spans in spans()) {
        let events = build_events(&spans);
        let layout = layout_day(&events, None, TRACK);
        let DayLayout::Track { layouts, total_columns } = &layout else {
            panic!("expected track layout");
        };

        prop_assert_eq!(layouts.len(), events.len());
        for l in layouts {
            prop_assert!(l.column_span >= 1);
            prop_assert!(l.column_start + l.column_span <= *total_columns);
            prop_assert_eq!(l.column_start % l.column_span, 0);
            prop_assert!(l.row_span >= 15);
        }

        for (i, a) in layouts.iter().enumerate() {
            for b in layouts.iter().skip(i + 1) {
                if events_overlap(&a.event, &b.event) {
                    let disjoint = a.column_start + a.column_span <= b.column_start
                        || b.column_start + b.column_span <= a.column_start;
                    prop_assert!(disjoint, "{} and {} share tracks", a.event.id, b.event.id);
                }
            }
        }
    }

    /// Property: layout depends only on the set of events, not their order
    #[test]
    fn prop_layout_is_deterministic(spans in spans()) {
        let events = build_events(&spans);
        let mut reversed = events.clone();
        reversed.reverse();

        for mode in [PIXEL, TRACK] {
            let first = layout_day(&events, None, mode);
            let again = layout_day(&events, None, mode);
            let shuffled = layout_day(&reversed, None, mode);
            prop_assert_eq!(&first, &again);
            prop_assert_eq!(&first, &shuffled);
        }
    }

    /// Property: a ghost preview adds exactly one record and leaves the original in place
    #[test]
    fn prop_ghost_preview_adds_one_record(
        spans in prop::collection::vec(span(), 1..30),
        target in any::<Index>(),
        moved in span(),
    ) {
        let events = build_events(&spans);
        let preview = build_preview(&events, target, moved);

        let layout = layout_day_with_policy(&events, Some(&preview), PIXEL, PreviewPolicy::Ghost);
        let layouts = layout.pixel_layouts().unwrap();

        prop_assert_eq!(layouts.len(), events.len() + 1);
        prop_assert!(ids_unique(&layout.event_ids()));

        let original = events.iter().find(|e| e.id == preview.event_id).unwrap();
        let kept = layouts.iter().find(|l| l.event.id == preview.event_id).unwrap();
        prop_assert_eq!(&kept.event, original);

        let ghost_id = format!("{}-preview", preview.event_id);
        let ghost = layouts.iter().find(|l| l.event.id == ghost_id).unwrap();
        prop_assert_eq!(ghost.event.start, preview.temp_start);
        prop_assert_eq!(ghost.event.end, preview.temp_end);
    }

    /// Property: a replace preview keeps the record count and tracks stay disjoint
    #[test]
    fn prop_replace_preview_keeps_tracks_disjoint(
        spans in prop::collection::vec(span(), 1..30),
        target in any::<Index>(),
        moved in span(),
    ) {
        let events = build_events(&spans);
        let preview = build_preview(&events, target, moved);

        let layout = layout_day_with_policy(&events, Some(&preview), TRACK, PreviewPolicy::Replace);
        let DayLayout::Track { layouts, total_columns } = &layout else {
            panic!("expected track layout");
        };

        prop_assert_eq!(layouts.len(), events.len());
        prop_assert!(ids_unique(&layout.event_ids()));
        prop_assert!(tracks_disjoint(layouts));
        for l in layouts {
            prop_assert!(l.column_start + l.column_span <= *total_columns);
        }

        let moved = layouts.iter().find(|l| l.event.id == preview.event_id).unwrap();
        prop_assert_eq!(moved.event.start, preview.temp_start);
    }

    /// Property: layout with a preview is as deterministic as without one
    #[test]
    fn prop_preview_layout_is_deterministic(
        spans in prop::collection::vec(span(), 1..30),
        target in any::<Index>(),
        moved in span(),
    ) {
        let events = build_events(&spans);
        let preview = build_preview(&events, target, moved);
        let mut reversed = events.clone();
        reversed.reverse();

        for mode in [PIXEL, TRACK] {
            for policy in [PreviewPolicy::Ghost, PreviewPolicy::Replace] {
                let first = layout_day_with_policy(&events, Some(&preview), mode, policy);
                let shuffled = layout_day_with_policy(&reversed, Some(&preview), mode, policy);
                prop_assert_eq!(&first, &shuffled);
            }
        }
    }
}
