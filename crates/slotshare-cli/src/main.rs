//! `slotshare` CLI — inspect day grids and share availability schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Print the classified 48-slot grid for a day
//! slotshare grid -e events.json -d 2026-03-16
//!
//! # Compress selections into the shareable JSON payload
//! slotshare payload -e events.json -s 2026-03-16=18,19,20 -z America/Mexico_City
//!
//! # Post the payload to a schedule server
//! slotshare share --server http://localhost:3000 -s 2026-03-16=18,19 -z UTC
//!
//! # Fetch a stored schedule by id
//! slotshare fetch --server http://localhost:3000 --id 12
//! ```

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};

use slotshare_client::ScheduleClient;
use slotshare_core::{
    build_slots, compress_selections, export_schedule, CalendarEvent, SelectionStore, SlotContent,
    TimeSlot,
};

#[derive(Parser)]
#[command(name = "slotshare", version, about = "Availability slot sharing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one day's grid and print the classified slots
    Grid {
        /// JSON file with the day's calendar events
        #[arg(short, long)]
        events: Option<String>,
        /// Day to build (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Compress selections and print the shareable schedule payload
    Payload {
        /// JSON file with calendar events (selections are validated against it)
        #[arg(short, long)]
        events: Option<String>,
        /// Selection in the form DATE=IDX[,IDX...]; repeatable
        #[arg(short, long = "select", required = true)]
        select: Vec<String>,
        /// IANA timezone identifier to tag the payload with
        #[arg(short = 'z', long, default_value = "UTC")]
        timezone: String,
    },
    /// Compress selections and post them to a schedule server
    Share {
        /// Base URL of the schedule server
        #[arg(long)]
        server: String,
        /// JSON file with calendar events (selections are validated against it)
        #[arg(short, long)]
        events: Option<String>,
        /// Selection in the form DATE=IDX[,IDX...]; repeatable
        #[arg(short, long = "select", required = true)]
        select: Vec<String>,
        /// IANA timezone identifier to tag the payload with
        #[arg(short = 'z', long, default_value = "UTC")]
        timezone: String,
    },
    /// Fetch a stored schedule and print it
    Fetch {
        /// Base URL of the schedule server
        #[arg(long)]
        server: String,
        /// Schedule id
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grid { events, date } => {
            let events = load_events(events.as_deref())?;
            let day = date.unwrap_or_else(|| Local::now().date_naive());
            print_grid(day, &build_slots(day, &events));
        }
        Commands::Payload {
            events,
            select,
            timezone,
        } => {
            let schedule = build_payload(events.as_deref(), &select, &timezone)?;
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        Commands::Share {
            server,
            events,
            select,
            timezone,
        } => {
            let schedule = build_payload(events.as_deref(), &select, &timezone)?;
            let client = ScheduleClient::new(server);
            let stored = client
                .create_schedule(&schedule)
                .await
                .context("Failed to create schedule")?;
            println!(
                "Created schedule {} ({} slots, status {:?})",
                stored.id,
                stored.slots.len(),
                stored.status
            );
        }
        Commands::Fetch { server, id } => {
            let client = ScheduleClient::new(server);
            let schedule = client
                .fetch_schedule(id)
                .await
                .with_context(|| format!("Failed to fetch schedule {id}"))?;
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
    }

    Ok(())
}

/// Read a JSON array of calendar events, or nothing at all.
fn load_events(path: Option<&str>) -> Result<Vec<CalendarEvent>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("Failed to parse events: {path}"))
        }
        None => Ok(Vec::new()),
    }
}

/// Apply the `DATE=IDX,IDX` selection arguments and export the payload.
///
/// Each day's grid is built from the events file (clipped to that day), so an
/// index landing on an occupied slot is silently skipped — same contract as
/// an interactive toggle.
fn build_payload(
    events_path: Option<&str>,
    select: &[String],
    timezone: &str,
) -> Result<slotshare_core::ShareableSchedule> {
    let events = load_events(events_path)?;
    let timezone: Tz = timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {timezone}"))?;

    let mut store = SelectionStore::new();
    for raw in select {
        let (day, indices) = parse_selection(raw)?;
        let slots = build_slots(day, &events);
        for index in indices {
            store.toggle(day, index, &slots);
        }
    }

    Ok(export_schedule(&compress_selections(&store), timezone))
}

/// Parse `2026-03-16=18,19,20` into a day and its slot indices.
fn parse_selection(raw: &str) -> Result<(NaiveDate, Vec<usize>)> {
    let Some((date_part, index_part)) = raw.split_once('=') else {
        bail!("Invalid selection '{raw}': expected DATE=IDX[,IDX...]");
    };

    let day: NaiveDate = date_part
        .parse()
        .with_context(|| format!("Invalid date in selection '{raw}'"))?;

    let mut indices = Vec::new();
    for part in index_part.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let index: usize = trimmed
            .parse()
            .with_context(|| format!("Invalid slot index '{trimmed}' in selection '{raw}'"))?;
        indices.push(index);
    }

    if indices.is_empty() {
        bail!("Selection '{raw}' names no slot indices");
    }

    Ok((day, indices))
}

fn print_grid(day: NaiveDate, slots: &[TimeSlot]) {
    println!("{}", day.format("%A, %B %-d, %Y"));

    for (index, slot) in slots.iter().enumerate() {
        let label = match &slot.content {
            SlotContent::Available => "available".to_string(),
            SlotContent::Event(event, span) => {
                format!("{} ({span} slots)", event.title)
            }
            SlotContent::EventContinuation => "... continues".to_string(),
            SlotContent::Bundled { count, span } => {
                format!("{count} overlapping events ({span} slots)")
            }
            SlotContent::BundledContinuation => "... continues (bundle)".to_string(),
        };
        println!("{index:>2}  {:>8}  {label}", slot.time_label());
    }
}
