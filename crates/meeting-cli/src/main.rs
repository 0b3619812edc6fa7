//! `meetq` CLI — find meeting slots in a day's calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for the request embedded in the input (stdin → stdout)
//! cat day.json | meetq query
//!
//! # Read from a file, override the duration, print wall-clock times
//! meetq query -i day.json --duration 45 --format text
//!
//! # Free slots shared by a set of attendees
//! meetq free -i day.json --attendee alice --attendee bob
//!
//! # Merged busy intervals for a set of attendees
//! meetq busy -i day.json --attendee alice
//! ```
//!
//! The input is a JSON object with an `events` array and, for `query`, a
//! `request` object:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "attendees": ["alice"], "when": {"start": 540, "duration": 60}}
//!   ],
//!   "request": {"attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30}
//! }
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use meeting_engine::{merge, CalendarIndex, Event, MeetingRequest, TimeRange, END_OF_DAY};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meetq", version, about = "Find meeting slots in a day's calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log planner decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot that fits the request in the input
    Query {
        #[command(flatten)]
        io: SlotIo,
        /// Override the requested meeting length in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<i64>,
    },
    /// Show free slots shared by the given attendees
    Free {
        #[command(flatten)]
        io: SlotIo,
        /// Attendee to include (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
    },
    /// Show merged busy intervals of the given attendees
    Busy {
        #[command(flatten)]
        io: SlotIo,
        /// Attendee to include (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
    },
}

/// Where the calendar comes from and how the resulting slots are written.
#[derive(Args)]
struct SlotIo {
    /// Calendar JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON array of `{start, duration}` objects
    Json,
    /// One `HH:MM-HH:MM (N min)` line per slot
    Text,
}

/// Calendar file contents.
#[derive(Deserialize)]
struct CalendarInput {
    #[serde(default)]
    events: Vec<Event>,
    request: Option<MeetingRequest>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query { io, duration } => {
            let calendar = io.load()?;
            let Some(mut request) = calendar.request else {
                anyhow::bail!("Input has no \"request\" object to query");
            };
            if let Some(duration) = duration {
                request.duration = duration;
            }

            let plan = meeting_engine::plan(&calendar.events, &request);
            if !request.optional_attendees.is_empty() && !plan.optional_accommodated {
                tracing::warn!(
                    optional = ?request.optional_attendees,
                    "no slot suits the optional attendees; showing mandatory-only slots"
                );
            }
            io.emit(&plan.slots)?;
        }
        Commands::Free { io, attendees } => {
            let calendar = io.load()?;
            let index = CalendarIndex::build(&calendar.events);
            io.emit(&meeting_engine::free_slots(&index, &attendees))?;
        }
        Commands::Busy { io, attendees } => {
            let calendar = io.load()?;
            let index = CalendarIndex::build(&calendar.events);
            io.emit(&merge(&index.busy_for_all(&attendees)))?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

impl SlotIo {
    fn load(&self) -> Result<CalendarInput> {
        let raw = match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?,
            None => io::read_to_string(io::stdin()).context("Failed to read from stdin")?,
        };
        serde_json::from_str(&raw).context("Failed to parse calendar JSON")
    }

    fn emit(&self, slots: &[TimeRange]) -> Result<()> {
        let rendered = render(slots, self.format)?;
        match &self.output {
            Some(path) => fs::write(path, rendered)
                .with_context(|| format!("Failed to write file: {}", path.display())),
            None => io::stdout()
                .lock()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout"),
        }
    }
}

fn render(slots: &[TimeRange], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(slots)?;
            json.push('\n');
            Ok(json)
        }
        Format::Text => slots
            .iter()
            .map(|slot| {
                Ok(format!(
                    "{}-{} ({} min)\n",
                    clock(slot.start())?,
                    clock(slot.end())?,
                    slot.duration()
                ))
            })
            .collect(),
    }
}

/// Format minutes since midnight as `HH:MM`; the end of the day prints as `24:00`.
fn clock(minute: u32) -> Result<String> {
    if minute >= END_OF_DAY {
        return Ok("24:00".to_string());
    }
    let time = NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0)
        .with_context(|| format!("Minute {} is outside the day", minute))?;
    Ok(time.format("%H:%M").to_string())
}
