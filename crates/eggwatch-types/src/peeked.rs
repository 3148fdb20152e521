//! Point-in-time snapshot of a coop, taken once per status poll.
//!
//! A [`Peeked`] is built by the snapshot builder in `eggwatch-core` and is
//! never mutated afterwards. Reporting and alerting code reads it through
//! [`Peeked::has_no_time_left`] and [`Peeked::is_on_track_to_finish`].

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Derived progress and health metrics for one coop at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Peeked {
    /// Identifier of the contract, copied from the coop.
    pub contract_id: String,
    /// Join code of the coop, copied from the coop.
    pub code: String,
    /// The instant supplied by the caller when the snapshot was taken.
    pub last_peeked_time: DateTime<Utc>,
    /// Whether the coop had finished its contract.
    pub has_completed: bool,
    /// Free roster slots. Zero when the contract was unknown.
    pub openings: i32,
    /// Total eggs laid by the coop.
    pub eggs_laid: f64,
    /// Combined hourly laying rate.
    pub eggs_per_hour: f64,
    /// Hourly rate needed to finish in time. Zero when the contract was
    /// unknown, infinite when eggs remained past the deadline.
    #[serde(with = "crate::rate")]
    #[ts(type = "number | string")]
    pub required_eggs_per_hour: f64,
    /// Time until the production deadline. Negative once it has passed.
    #[serde(with = "crate::duration_ms")]
    #[ts(type = "number")]
    pub time_left: TimeDelta,
    /// Largest member earning-bonus percentage.
    pub max_earning_bonus_percentage: f64,
    /// Percentage of the mean earning-bonus order of magnitude.
    ///
    /// This is `10^(mean_oom + 2)`, not the mean of member percentages.
    pub mean_earning_bonus_percentage: f64,
}

impl Peeked {
    /// Whether the production deadline had been reached.
    pub fn has_no_time_left(&self) -> bool {
        self.time_left <= TimeDelta::zero()
    }

    /// Whether the coop was finished or laying fast enough to finish.
    ///
    /// A zero required rate counts as on track.
    pub fn is_on_track_to_finish(&self) -> bool {
        if self.has_completed {
            return true;
        }
        self.eggs_per_hour >= self.required_eggs_per_hour
    }
}
