use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Local, NaiveDate};

use day_layout::models::event::Event;
use day_layout::models::preview::DragPreview;
use day_layout::models::settings::LayoutSettings;
use day_layout::services::event::{EventPatch, EventStore, NewEvent};
use day_layout::services::layout::LayoutEngine;
use day_layout::services::settings::{default_events_path, SettingsService};
use day_layout::utils::date::{
    end_minutes_within_day, minutes_since_midnight, now_offset, start_of_day, time_slots,
    week_days, with_minutes, MINUTES_PER_DAY,
};

use crate::cli::{Cli, Command};

pub fn run(cli: Cli) -> Result<()> {
    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::default_location(),
    };
    let settings = settings_service.get()?;
    let events_path = cli
        .events
        .clone()
        .or_else(|| settings.events_file.clone())
        .unwrap_or_else(default_events_path);

    match cli.command {
        Command::Layout {
            date,
            mode,
            hour_height,
            track_width,
            preview,
        } => {
            let mut settings = settings;
            if let Some(mode) = mode {
                settings.render_mode = mode.into();
            }
            if let Some(hour_height) = hour_height {
                settings.hour_height = hour_height;
            }
            if track_width.is_some() {
                settings.track_width = track_width;
            }
            settings.validate()?;
            layout(&events_path, &settings, date, preview)
        }
        Command::List { date } => list(&events_path, date),
        Command::Add {
            title,
            start,
            end,
            date,
            color,
        } => add(&events_path, title, &start, &end, date, color),
        Command::Move { id, start, end } => move_event(&events_path, &id, &start, &end),
        Command::Delete { id } => delete(&events_path, &id),
        Command::Reset => reset(&events_path),
        Command::Week { date } => week(date, settings.hour_height),
    }
}

fn layout(
    events_path: &Path,
    settings: &LayoutSettings,
    date: Option<NaiveDate>,
    preview: Option<Vec<String>>,
) -> Result<()> {
    let store = EventStore::open(events_path)?;
    let date = date.unwrap_or_else(today);
    let events = store.events_on(date);

    let preview = match preview.as_deref() {
        Some([id, start, end]) => Some(DragPreview::new(
            id.clone(),
            time_on(date, start)?,
            time_on(date, end)?,
        )),
        Some(other) => bail!("--preview takes ID START END, got {} values", other.len()),
        None => None,
    };

    let engine = LayoutEngine::from_settings(settings);
    let day = engine.layout(&events, preview.as_ref());
    println!("{}", serde_json::to_string_pretty(&day)?);
    Ok(())
}

fn list(events_path: &Path, date: Option<NaiveDate>) -> Result<()> {
    let store = EventStore::open(events_path)?;
    let mut events = match date {
        Some(date) => store.events_on(date),
        None => store.events().to_vec(),
    };
    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    for event in &events {
        println!("{}", describe(event));
    }
    Ok(())
}

fn add(
    events_path: &Path,
    title: String,
    start: &str,
    end: &str,
    date: Option<NaiveDate>,
    color: Option<String>,
) -> Result<()> {
    let mut store = EventStore::open(events_path)?;
    let date = date.unwrap_or_else(today);
    let event = store.add(NewEvent {
        title,
        start: time_on(date, start)?,
        end: time_on(date, end)?,
        color,
    })?;
    println!("{}", describe(&event));
    Ok(())
}

fn move_event(events_path: &Path, id: &str, start: &str, end: &str) -> Result<()> {
    let mut store = EventStore::open(events_path)?;
    let date = store
        .find(id)
        .map(|event| event.start.date_naive())
        .ok_or_else(|| anyhow!("Event {} not found", id))?;

    let event = store.update(id, EventPatch::times(time_on(date, start)?, time_on(date, end)?))?;
    println!("{}", describe(&event));
    Ok(())
}

fn delete(events_path: &Path, id: &str) -> Result<()> {
    let mut store = EventStore::open(events_path)?;
    if !store.delete(id)? {
        bail!("Event {} not found", id);
    }
    println!("Deleted {}", id);
    Ok(())
}

fn reset(events_path: &Path) -> Result<()> {
    let mut store = EventStore::open(events_path)?;
    store.reset()?;
    println!(
        "Reset {} to {} sample events",
        store.path().map_or_else(|| PathBuf::from("-"), Path::to_path_buf).display(),
        store.events().len()
    );
    Ok(())
}

fn week(date: Option<NaiveDate>, hour_height: f64) -> Result<()> {
    let output = serde_json::json!({
        "days": week_days(date.unwrap_or_else(today), today()),
        "timeSlots": time_slots(hour_height),
        "nowOffset": now_offset(Local::now(), hour_height),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `HH:MM` on `date`; `24:00` is midnight at the end of the day.
fn time_on(date: NaiveDate, text: &str) -> Result<DateTime<Local>> {
    let (hours, minutes) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("Expected HH:MM, got {:?}", text))?;
    let hours: i64 = hours
        .trim()
        .parse()
        .with_context(|| format!("Invalid hour in {:?}", text))?;
    let minutes: i64 = minutes
        .trim()
        .parse()
        .with_context(|| format!("Invalid minute in {:?}", text))?;
    if !(0..60).contains(&minutes) {
        bail!("Invalid minute in {:?}", text);
    }

    let total = hours
        .checked_mul(60)
        .and_then(|hour_minutes| hour_minutes.checked_add(minutes))
        .ok_or_else(|| anyhow!("Time {:?} is outside the day", text))?;
    if !(0..=i64::from(MINUTES_PER_DAY)).contains(&total) {
        bail!("Time {:?} is outside the day", text);
    }

    let midnight =
        start_of_day(date).ok_or_else(|| anyhow!("{} has no local midnight", date))?;
    with_minutes(midnight, total).ok_or_else(|| anyhow!("{} does not exist on {}", text, date))
}

fn describe(event: &Event) -> String {
    let start = minutes_since_midnight(event.start);
    let end = end_minutes_within_day(event.start, event.end);
    format!(
        "{}  {}  {:02}:{:02}-{:02}:{:02}  {}",
        event.id,
        event.start.format("%Y-%m-%d"),
        start / 60,
        start % 60,
        end / 60,
        end % 60,
        event.title
    )
}
