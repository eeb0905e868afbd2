pub mod service;

pub use service::{default_events_path, SettingsService};
