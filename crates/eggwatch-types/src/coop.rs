//! Coop status models as delivered by the game-API collaborator.
//!
//! These are read-only inputs for the monitoring core. Each model also
//! carries the game-domain capabilities that belong to it -- the bonus
//! percentage transform lives on [`Member`], the rate and deadline math on
//! [`CoopStatus`] -- so derivation code never repeats game constants.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of seconds in one hour, used to convert per-second rates.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Offset between an earning-bonus order of magnitude and the exponent of
/// its display percentage (`10^(oom + 2)`).
const PERCENTAGE_EXPONENT_OFFSET: f64 = 2.0;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// A single reward tier of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Goal {
    /// Total eggs the coop must lay to reach this tier.
    pub target_amount: f64,
}

/// Static parameters of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Contract {
    /// Contract identifier (e.g. `spring-2026`).
    pub id: String,
    /// Display name of the contract.
    #[serde(default)]
    pub name: String,
    /// The egg the contract asks for.
    #[serde(default)]
    pub egg: String,
    /// Maximum number of members a coop may hold.
    pub max_coop_size: i32,
    /// Reward tiers in ascending order. The last one completes the contract.
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Contract {
    /// Egg total of the final goal, or `0.0` when no goals are listed.
    pub fn final_target(&self) -> f64 {
        self.goals.last().map_or(0.0, |g| g.target_amount)
    }
}

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// One player in a coop roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Member {
    /// Player identifier.
    pub id: String,
    /// Player display name.
    #[serde(default)]
    pub name: String,
    /// Eggs this member has contributed so far.
    #[serde(default)]
    pub eggs_laid: f64,
    /// Current laying rate of this member.
    #[serde(default)]
    pub eggs_per_second: f64,
    /// Earning bonus as a power-of-ten exponent.
    #[serde(default)]
    pub earning_bonus_oom: f64,
}

impl Member {
    /// Display percentage for an earning-bonus order of magnitude:
    /// `10^(oom + 2)`.
    pub fn percentage_for_oom(oom: f64) -> f64 {
        10_f64.powf(oom + PERCENTAGE_EXPONENT_OFFSET)
    }

    /// This member's earning bonus as a display percentage.
    pub fn earning_bonus_percentage(&self) -> f64 {
        Self::percentage_for_oom(self.earning_bonus_oom)
    }

    /// Hourly laying rate of this member.
    pub fn eggs_per_hour(&self) -> f64 {
        self.eggs_per_second * SECONDS_PER_HOUR
    }
}

// ---------------------------------------------------------------------------
// CoopStatus
// ---------------------------------------------------------------------------

/// Live state of one coop as returned by a status poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CoopStatus {
    /// Identifier of the contract the coop is playing.
    pub contract_id: String,
    /// Join code of the coop.
    pub code: String,
    /// Total eggs laid by the whole coop.
    #[serde(default)]
    pub eggs_laid: f64,
    /// Seconds until the production deadline. Negative once it has passed.
    #[serde(default)]
    pub seconds_remaining: f64,
    /// Whether the game reports every goal as achieved.
    #[serde(default)]
    pub all_goals_achieved: bool,
    /// Current roster.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Contract parameters, when the poll resolved them.
    #[serde(default)]
    pub contract: Option<Contract>,
}

impl CoopStatus {
    /// Whether the coop has finished its contract.
    ///
    /// True when the game says so, or when a contract with a positive final
    /// target is known and the coop has laid at least that many eggs.
    pub fn has_completed(&self) -> bool {
        if self.all_goals_achieved {
            return true;
        }
        self.contract.as_ref().is_some_and(|c| {
            let target = c.final_target();
            target > 0.0 && self.eggs_laid >= target
        })
    }

    /// Combined hourly laying rate of every member.
    pub fn eggs_per_hour(&self) -> f64 {
        self.members
            .iter()
            .fold(0.0, |acc, m| acc + m.eggs_per_hour())
    }

    /// Signed time until the production deadline, at millisecond precision.
    ///
    /// Non-finite `seconds_remaining` values map to zero. Finite values
    /// beyond chrono's range saturate at [`TimeDelta::MIN`] or
    /// [`TimeDelta::MAX`], keeping their sign.
    pub fn duration_until_production_deadline(&self) -> TimeDelta {
        seconds_to_delta(self.seconds_remaining)
    }

    /// Hourly rate needed to reach the contract's final target in time.
    ///
    /// Returns `0.0` when nothing remains to be laid, and positive infinity
    /// when eggs remain but the deadline has already passed.
    pub fn required_eggs_per_hour(&self, contract: &Contract) -> f64 {
        let remaining = contract.final_target() - self.eggs_laid;
        if remaining <= 0.0 {
            return 0.0;
        }
        let hours_left = self.seconds_remaining / SECONDS_PER_HOUR;
        if hours_left > 0.0 {
            remaining / hours_left
        } else {
            f64::INFINITY
        }
    }
}

/// Convert fractional seconds into a [`TimeDelta`].
fn seconds_to_delta(seconds: f64) -> TimeDelta {
    if !seconds.is_finite() {
        return TimeDelta::zero();
    }
    // `as` saturates at the i64 bounds; chrono's range is one narrower.
    #[allow(clippy::cast_possible_truncation)]
    let ms = ((seconds * 1000.0).round() as i64).clamp(
        TimeDelta::MIN.num_milliseconds(),
        TimeDelta::MAX.num_milliseconds(),
    );
    TimeDelta::try_milliseconds(ms).unwrap_or_else(TimeDelta::zero)
}
