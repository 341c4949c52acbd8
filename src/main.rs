//! Volunteer Hub event board
//!
//! Reads a JSON snapshot of event or participation records and prints them
//! in dashboard order.

use std::fs;
use std::process::ExitCode;
use anyhow::Context;
use tracing::info;

use volunteer_hub::{
    config::Settings,
    lifecycle::{rank_entries, RankedEntry},
    models::ParticipationRecord,
    utils::{
        errors::failure_summary,
        helpers::{format_date, format_time, truncate_text},
        logging,
    },
};

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_summary(&err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--print-config") {
        println!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", volunteer_hub::info());

    let path = arg.unwrap_or_else(|| settings.board.snapshot_path.clone());
    info!(path = %path, "Loading event snapshot");

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read snapshot {}", path))?;
    let records: Vec<ParticipationRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path))?;

    let now = settings.board.now();
    info!(records = records.len(), now = %now, date_key = %settings.board.date_key, "Ranking events");

    for entry in rank_entries(&records, settings.board.date_key, now) {
        println!("{}", render_row(&entry, now));
    }

    Ok(())
}

fn render_row(entry: &RankedEntry<'_, ParticipationRecord>, now: chrono::NaiveDateTime) -> String {
    let record = entry.record;
    let event = &record.event;

    let badge = match (&record.participation_status, entry.effective_status) {
        (Some(participation), _) if !participation.is_active() => participation.to_string(),
        (_, Some(status)) => status.label().to_string(),
        (_, None) => event
            .status
            .as_ref()
            .map(|status| status.to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
    };

    format!(
        "{:>3}  {:<16} {:<32} {:<13} {} - {}  registration {}",
        entry.priority.value(),
        badge,
        truncate_text(event.display_title(), 32),
        format_date(event.start_date.as_deref()),
        format_time(event.start_time.as_deref()),
        format_time(event.end_time.as_deref()),
        event.registration_window().state_at(now).label(),
    )
}
