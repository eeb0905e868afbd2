use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use crate::models::event::Event;

/// Read the stored event list. `None` if the file does not exist yet.
pub fn load_events(path: &Path) -> Result<Option<Vec<Event>>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(Some(events))
}

pub fn save_events(path: &Path, events: &[Event]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
    }

    let data = serde_json::to_string_pretty(events)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize events from {}",
        path.display()
    ))
}
