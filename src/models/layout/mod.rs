//! Layout output types.
//!
//! The engine produces either pixel rectangles for absolutely positioned
//! rendering or track coordinates for grid rendering. Both are plain values,
//! recomputed from scratch on every call.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::models::event::Event;
use crate::models::preview::PreviewPolicy;

/// Column placement of one event inside its overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAssignment<'a> {
    pub event: &'a Event,
    /// 0-based lane index within the group
    pub column: u32,
    /// Lane count of the whole group
    pub total_columns: u32,
}

/// A percentage, rendered as `"50%"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl Percent {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Absolutely positioned rectangle for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelLayout {
    pub event: Event,
    pub top: f64,
    pub left: Percent,
    pub width: Percent,
    pub height: f64,
    pub z_index: u32,
}

/// Grid track placement for one event.
///
/// Coordinates are 0-based. [`TrackLayout::grid_row`] and
/// [`TrackLayout::grid_column`] convert to 1-based grid lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackLayout {
    pub event: Event,
    pub row_start: u32,
    pub row_span: u32,
    pub column_start: u32,
    pub column_span: u32,
}

impl TrackLayout {
    pub fn grid_row_line(&self) -> u32 {
        self.row_start + 1
    }

    pub fn grid_column_line(&self) -> u32 {
        self.column_start + 1
    }

    /// Row placement in `start / span n` form.
    pub fn grid_row(&self) -> String {
        format!("{} / span {}", self.grid_row_line(), self.row_span)
    }

    /// Column placement in `start / span n` form.
    pub fn grid_column(&self) -> String {
        format!("{} / span {}", self.grid_column_line(), self.column_span)
    }
}

/// Rendering strategy and its numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Continuous geometry; `hour_height` is pixels per hour.
    Pixel { hour_height: f64 },
    /// Discrete tracks. A fixed `track_width` is used when every group's column
    /// count divides it; otherwise the least common multiple is used.
    Track { track_width: Option<u32> },
}

impl RenderMode {
    /// Preview policy used by this mode unless overridden.
    pub fn default_preview_policy(&self) -> PreviewPolicy {
        match self {
            RenderMode::Pixel { .. } => PreviewPolicy::Ghost,
            RenderMode::Track { .. } => PreviewPolicy::Replace,
        }
    }
}

/// Which family of render modes a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    #[default]
    Pixel,
    Track,
}

/// Layout of a whole day in one render mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DayLayout {
    Pixel {
        layouts: Vec<PixelLayout>,
    },
    #[serde(rename_all = "camelCase")]
    Track {
        layouts: Vec<TrackLayout>,
        total_columns: u32,
    },
}

impl DayLayout {
    pub fn len(&self) -> usize {
        match self {
            DayLayout::Pixel { layouts } => layouts.len(),
            DayLayout::Track { layouts, .. } => layouts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Event ids in output order.
    pub fn event_ids(&self) -> Vec<&str> {
        match self {
            DayLayout::Pixel { layouts } => layouts.iter().map(|l| l.event.id.as_str()).collect(),
            DayLayout::Track { layouts, .. } => {
                layouts.iter().map(|l| l.event.id.as_str()).collect()
            }
        }
    }

    pub fn pixel_layouts(&self) -> Option<&[PixelLayout]> {
        match self {
            DayLayout::Pixel { layouts } => Some(layouts),
            DayLayout::Track { .. } => None,
        }
    }

    pub fn track_layouts(&self) -> Option<&[TrackLayout]> {
        match self {
            DayLayout::Track { layouts, .. } => Some(layouts),
            DayLayout::Pixel { .. } => None,
        }
    }
}
