//! JSON-lines output records.
//!
//! Each derived value is written as one JSON object per line, tagged with
//! `kind`, so downstream alerting can consume stdout directly.

use std::io::Write;

use eggwatch_types::{Event, Peeked};
use serde::Serialize;

use crate::error::PeekError;

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record<'a> {
    /// A derived coop snapshot with its queries evaluated.
    Snapshot {
        /// The snapshot itself.
        snapshot: &'a Peeked,
        /// Result of [`Peeked::is_on_track_to_finish`].
        on_track: bool,
        /// Result of [`Peeked::has_no_time_left`].
        has_no_time_left: bool,
    },
    /// An event that is still running.
    ActiveEvent {
        /// The event record.
        event: &'a Event,
        /// Message without hype punctuation.
        unhyped_message: String,
        /// Milliseconds until expiry.
        time_left_ms: i64,
    },
}

impl<'a> Record<'a> {
    /// Snapshot record with both queries evaluated.
    pub fn snapshot(snapshot: &'a Peeked) -> Self {
        Self::Snapshot {
            snapshot,
            on_track: snapshot.is_on_track_to_finish(),
            has_no_time_left: snapshot.has_no_time_left(),
        }
    }

    /// Active-event record for `event` with `time_left` remaining.
    pub fn active_event(event: &'a Event, time_left: chrono::TimeDelta) -> Self {
        Self::ActiveEvent {
            event,
            unhyped_message: event.unhyped_message(),
            time_left_ms: time_left.num_milliseconds(),
        }
    }
}

/// Write `record` as a single JSON line.
pub fn write_record<W: Write>(out: &mut W, record: &Record<'_>) -> Result<(), PeekError> {
    serde_json::to_writer(&mut *out, record).map_err(|e| PeekError::Output { source: e.into() })?;
    writeln!(out).map_err(|source| PeekError::Output { source })
}
