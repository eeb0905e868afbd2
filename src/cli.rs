use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use day_layout::models::layout::RenderKind;

#[derive(Parser, Debug)]
#[command(name = "day-layout", version, about = "Lay out a day of calendar events")]
pub struct Cli {
    /// Event file (defaults to the configured or per-user location)
    #[arg(long, global = true)]
    pub events: Option<PathBuf>,
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the layout of one day as JSON
    Layout {
        /// Day to lay out, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Render mode (defaults to the configured mode)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Pixels per hour in pixel mode
        #[arg(long)]
        hour_height: Option<f64>,
        /// Fixed track count in track mode
        #[arg(long)]
        track_width: Option<u32>,
        /// Lay out as if event ID were being dragged to START-END (HH:MM)
        #[arg(long, num_args = 3, value_names = ["ID", "START", "END"])]
        preview: Option<Vec<String>>,
    },
    /// List events
    List {
        /// Only events on this day, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Add an event
    Add {
        /// Title of the event
        title: String,
        /// Start time, HH:MM
        start: String,
        /// End time, HH:MM (24:00 for midnight)
        end: String,
        /// Day of the event, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Hex color such as #3B82F6
        #[arg(long)]
        color: Option<String>,
    },
    /// Move or resize an event within its day
    Move {
        /// Event id
        id: String,
        /// New start time, HH:MM
        start: String,
        /// New end time, HH:MM
        end: String,
    },
    /// Delete an event
    Delete {
        /// Event id
        id: String,
    },
    /// Replace all events with the sample set
    Reset,
    /// Print the Monday-based week and hour gutter around a day as JSON
    Week {
        /// Any day in the week, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Pixel,
    Track,
}

impl From<ModeArg> for RenderKind {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pixel => RenderKind::Pixel,
            ModeArg::Track => RenderKind::Track,
        }
    }
}
