// Day layout library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::Event;
pub use models::layout::{DayLayout, PixelLayout, RenderMode, TrackLayout};
pub use models::preview::{DragPreview, PreviewPolicy};
pub use services::layout::{
    assign_columns, calculate_lcm, detect_overlaps, layout_day, layout_day_with_policy,
    LayoutEngine,
};
