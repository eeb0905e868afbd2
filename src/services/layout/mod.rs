//! Day layout engine.
//!
//! Turns one day's events into non-overlapping geometry. The pipeline is
//! preview injection, overlap grouping, first-fit column assignment, optional
//! LCM normalisation (track mode), then projection. Every call starts from
//! scratch, so identical inputs always give identical output.

use crate::models::event::Event;
use crate::models::layout::{ColumnAssignment, DayLayout, RenderMode};
use crate::models::preview::{DragPreview, PreviewPolicy};
use crate::models::settings::LayoutSettings;

pub mod columns;
pub mod lcm;
pub mod overlap;
pub mod preview;
pub mod projector;

pub use columns::{assign_columns, group_width};
pub use lcm::{calculate_lcm, try_calculate_lcm};
pub use overlap::{detect_overlaps, events_overlap};
pub use preview::inject_preview;
pub use projector::{project_pixel, project_track};

/// Lay out a day with the render mode's own preview policy.
pub fn layout_day(
    events: &[Event],
    preview: Option<&DragPreview>,
    mode: RenderMode,
) -> DayLayout {
    layout_day_with_policy(events, preview, mode, mode.default_preview_policy())
}

/// Lay out a day with an explicit preview policy.
pub fn layout_day_with_policy(
    events: &[Event],
    preview: Option<&DragPreview>,
    mode: RenderMode,
    policy: PreviewPolicy,
) -> DayLayout {
    let events = inject_preview(events, preview, policy);
    let groups: Vec<Vec<ColumnAssignment<'_>>> = detect_overlaps(&events)
        .iter()
        .map(|group| assign_columns(group))
        .collect();

    log::debug!(
        "Laid out {} events in {} overlap groups",
        events.len(),
        groups.len()
    );

    match mode {
        RenderMode::Pixel { hour_height } => DayLayout::Pixel {
            layouts: groups
                .iter()
                .flatten()
                .map(|assignment| project_pixel(assignment, hour_height))
                .collect(),
        },
        RenderMode::Track { track_width } => {
            let widths: Vec<u32> = groups.iter().map(|group| group_width(group)).collect();
            let total_columns = resolve_track_width(&widths, track_width);
            DayLayout::Track {
                layouts: groups
                    .iter()
                    .flatten()
                    .map(|assignment| project_track(assignment, total_columns))
                    .collect(),
                total_columns,
            }
        }
    }
}

/// Use the fixed width when every group fits it evenly, else the common multiple.
fn resolve_track_width(widths: &[u32], fixed: Option<u32>) -> u32 {
    if let Some(width) = fixed {
        if width > 0 && widths.iter().all(|&group| group > 0 && width % group == 0) {
            return width;
        }
        log::warn!(
            "Track width {} is not a multiple of group widths {:?}, ignoring it",
            width,
            widths
        );
    }
    calculate_lcm(widths)
}

/// Layout engine bound to a render mode and preview policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    mode: RenderMode,
    policy: PreviewPolicy,
}

impl LayoutEngine {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            policy: mode.default_preview_policy(),
        }
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self {
            mode: settings.render_mode(),
            policy: settings.preview_policy(),
        }
    }

    pub fn with_policy(mut self, policy: PreviewPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn policy(&self) -> PreviewPolicy {
        self.policy
    }

    pub fn layout(&self, events: &[Event], preview: Option<&DragPreview>) -> DayLayout {
        layout_day_with_policy(events, preview, self.mode, self.policy)
    }
}
