//! Peek tool for eggwatch.
//!
//! Reads polled coop status and event records from JSON files, derives a
//! snapshot for every coop and keeps every event that is still running,
//! then writes the results to stdout as JSON lines. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `eggwatch-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Read coop status records and build one snapshot per coop
//! 4. Read event records, if configured, and keep the active ones
//! 5. Write every result as one JSON line

mod error;
mod input;
mod output;

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use eggwatch_core::config::{LogFormat, LoggingConfig, WatchConfig};
use eggwatch_core::{EventEvaluator, FixedClock, build_snapshot};
use eggwatch_types::{CoopStatus, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::PeekError;
use crate::output::Record;

/// Config file looked up in the current working directory.
const CONFIG_FILE: &str = "eggwatch-config.yaml";

/// Application entry point for the peek tool.
///
/// # Errors
///
/// Returns an error if configuration, input, or output handling fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so remember where the
    //    config came from and report it afterwards.
    let config_path = Path::new(CONFIG_FILE);
    let config_found = config_path.exists();
    let config = if config_found {
        WatchConfig::from_file(config_path).map_err(PeekError::from)?
    } else {
        let mut config = WatchConfig::default();
        config.inputs.apply_env_overrides();
        config
    };

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    if config_found {
        info!(path = CONFIG_FILE, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // 3. Snapshots.
    let peeked_at = Utc::now();
    let coop_path = Path::new(&config.inputs.coop_status_path);
    let coops: Vec<CoopStatus> = input::read_records(coop_path)?;
    info!(
        path = %coop_path.display(),
        coop_count = coops.len(),
        "Coop status records loaded"
    );

    let mut behind = 0_usize;
    for coop in &coops {
        let snapshot = build_snapshot(coop, peeked_at);
        if !snapshot.is_on_track_to_finish() {
            behind = behind.saturating_add(1);
            warn!(
                contract_id = snapshot.contract_id,
                code = snapshot.code,
                eggs_per_hour = snapshot.eggs_per_hour,
                required_eggs_per_hour = snapshot.required_eggs_per_hour,
                "Coop is not on track to finish"
            );
        }
        output::write_record(&mut out, &Record::snapshot(&snapshot))?;
    }

    // 4. Events.
    let mut active_count = 0_usize;
    if let Some(events_path) = config.inputs.events_path.as_deref() {
        let events_path = Path::new(events_path);
        let events: Vec<Event> = input::read_records(events_path)?;
        // Judge events at the same instant the snapshots were taken.
        let evaluator = EventEvaluator::new(FixedClock(peeked_at));
        let active = evaluator.active(&events);
        info!(
            path = %events_path.display(),
            event_count = events.len(),
            active_count = active.len(),
            "Event records evaluated"
        );
        for event in active {
            let record = Record::active_event(event, evaluator.time_left(event));
            output::write_record(&mut out, &record)?;
            active_count = active_count.saturating_add(1);
        }
    }

    // 5. Flush and report.
    out.flush().map_err(|source| PeekError::Output { source })?;
    info!(
        snapshots = coops.len(),
        behind,
        active_events = active_count,
        "eggwatch-peek finished"
    );

    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so stdout stays machine-readable.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
