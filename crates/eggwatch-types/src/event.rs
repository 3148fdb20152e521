//! Live game event record (boosts, sales) and its temporal queries.
//!
//! An [`Event`] is created and refreshed by the ingestion collaborator. It
//! never stores "now": time-relative queries take the reference instant as
//! a parameter so evaluation stays deterministic.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A game-wide event such as a boost or a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Identifier assigned by the game.
    pub id: String,
    /// Type tag as reported by the game (e.g. `piggy-boost`).
    pub event_type: String,
    /// Strength of the event (e.g. `2.0` for a doubled reward).
    pub multiplier: f64,
    /// Announcement text as shown in game.
    pub message: String,
    /// When the event was first observed.
    pub first_seen_time: DateTime<Utc>,
    /// When the event was last observed.
    pub last_seen_time: DateTime<Utc>,
    /// When the event ends.
    pub expiry_time: DateTime<Utc>,
}

impl Event {
    /// Total observed lifetime: `expiry_time - first_seen_time`.
    ///
    /// Negative when the expiry precedes the first sighting; the value is
    /// passed through as-is.
    pub fn duration(&self) -> TimeDelta {
        self.expiry_time.signed_duration_since(self.first_seen_time)
    }

    /// The message lower-cased and stripped of trailing `!`.
    ///
    /// Used to compare announcements regardless of hype punctuation.
    pub fn unhyped_message(&self) -> String {
        self.message.trim_end_matches('!').to_lowercase()
    }

    /// Whether the event is still running at `now`.
    ///
    /// The expiry instant itself already counts as expired.
    pub fn has_time_left_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_time > now
    }

    /// Signed time from `now` until expiry. Negative once expired.
    pub fn time_left_at(&self, now: DateTime<Utc>) -> TimeDelta {
        self.expiry_time.signed_duration_since(now)
    }
}
