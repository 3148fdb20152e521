//! Snapshot builder: derives a [`Peeked`] from a polled coop.
//!
//! # Earning bonus aggregation
//!
//! The maximum bonus is the largest member percentage. The mean bonus is
//! computed in log space: the members' orders of magnitude are averaged
//! first and only then turned back into a percentage through
//! [`MemberView::percentage_for_oom`]. With the game's `10^(oom + 2)`
//! transform, orders of magnitude `{1, 3}` give `10^4`, not the mean of
//! `10^3` and `10^5`.
//!
//! Building never fails. A coop without a contract yields zero openings
//! and a zero required rate; an empty roster yields zero bonus figures.

use chrono::{DateTime, Utc};
use eggwatch_types::Peeked;
use tracing::debug;

use crate::coop::{ContractView, CoopView, MemberView};

/// Running totals over a roster.
#[derive(Debug, Clone, Copy, Default)]
struct BonusTotals {
    /// Largest member percentage seen so far.
    max_percentage: f64,
    /// Sum of member orders of magnitude.
    sum_oom: f64,
}

/// Build a snapshot of `coop` as observed at `peeked_at`.
///
/// `peeked_at` is stored verbatim as [`Peeked::last_peeked_time`]; the
/// builder never reads the clock.
pub fn build_snapshot<C: CoopView>(coop: &C, peeked_at: DateTime<Utc>) -> Peeked {
    let members = coop.members();
    let member_count = i32::try_from(members.len()).unwrap_or(i32::MAX);

    let (openings, required_eggs_per_hour) = coop.contract().map_or((0, 0.0), |contract| {
        (
            contract.max_coop_size().saturating_sub(member_count),
            coop.required_eggs_per_hour(contract),
        )
    });

    let totals = members.iter().fold(BonusTotals::default(), |mut acc, m| {
        acc.sum_oom += m.earning_bonus_oom();
        let percentage = m.earning_bonus_percentage();
        if percentage > acc.max_percentage {
            acc.max_percentage = percentage;
        }
        acc
    });

    let mean_earning_bonus_percentage = if members.is_empty() {
        0.0
    } else {
        // Roster sizes are tiny; the conversion is exact.
        #[allow(clippy::cast_precision_loss)]
        let count = members.len() as f64;
        <C::Member as MemberView>::percentage_for_oom(totals.sum_oom / count)
    };

    let peeked = Peeked {
        contract_id: coop.contract_id().to_owned(),
        code: coop.code().to_owned(),
        last_peeked_time: peeked_at,
        has_completed: coop.has_completed(),
        openings,
        eggs_laid: coop.eggs_laid(),
        eggs_per_hour: coop.eggs_per_hour(),
        required_eggs_per_hour,
        time_left: coop.duration_until_production_deadline(),
        max_earning_bonus_percentage: totals.max_percentage,
        mean_earning_bonus_percentage,
    };

    debug!(
        contract_id = peeked.contract_id,
        code = peeked.code,
        openings = peeked.openings,
        on_track = peeked.is_on_track_to_finish(),
        "Coop snapshot built"
    );

    peeked
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    /// Hand-rolled coop so the builder is tested against the traits alone.
    struct FakeContract(i32);

    impl ContractView for FakeContract {
        fn max_coop_size(&self) -> i32 {
            self.0
        }
    }

    /// Member whose reported percentage is independent of its order of magnitude.
    struct FakeMember {
        oom: f64,
        percentage: f64,
    }

    impl MemberView for FakeMember {
        fn percentage_for_oom(oom: f64) -> f64 {
            10_f64.powf(oom + 2.0)
        }

        fn earning_bonus_oom(&self) -> f64 {
            self.oom
        }

        fn earning_bonus_percentage(&self) -> f64 {
            self.percentage
        }
    }

    struct FakeCoop {
        contract: Option<FakeContract>,
        members: Vec<FakeMember>,
        completed: bool,
        required: f64,
    }

    impl CoopView for FakeCoop {
        type Contract = FakeContract;
        type Member = FakeMember;

        fn contract_id(&self) -> &str {
            "fake"
        }

        fn code(&self) -> &str {
            "code"
        }

        fn contract(&self) -> Option<&FakeContract> {
            self.contract.as_ref()
        }

        fn members(&self) -> &[FakeMember] {
            &self.members
        }

        fn has_completed(&self) -> bool {
            self.completed
        }

        fn eggs_laid(&self) -> f64 {
            42.0
        }

        fn eggs_per_hour(&self) -> f64 {
            10.0
        }

        fn duration_until_production_deadline(&self) -> TimeDelta {
            TimeDelta::minutes(-3)
        }

        fn required_eggs_per_hour(&self, _contract: &FakeContract) -> f64 {
            self.required
        }
    }

    fn peeked_at() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default()
    }

    #[test]
    fn copies_scalars_from_capabilities() {
        let coop = FakeCoop {
            contract: Some(FakeContract(4)),
            members: Vec::new(),
            completed: true,
            required: 55.0,
        };
        let p = build_snapshot(&coop, peeked_at());
        assert_eq!(p.contract_id, "fake");
        assert_eq!(p.code, "code");
        assert_eq!(p.last_peeked_time, peeked_at());
        assert!(p.has_completed);
        assert_eq!(p.openings, 4);
        assert!((p.eggs_laid - 42.0).abs() < f64::EPSILON);
        assert!((p.eggs_per_hour - 10.0).abs() < f64::EPSILON);
        assert!((p.required_eggs_per_hour - 55.0).abs() < f64::EPSILON);
        assert_eq!(p.time_left, TimeDelta::minutes(-3));
        assert!(p.has_no_time_left());
    }

    #[test]
    fn max_comes_from_member_percentage_and_mean_from_oom() {
        let coop = FakeCoop {
            contract: None,
            members: vec![
                FakeMember {
                    oom: 0.0,
                    percentage: 7.0,
                },
                FakeMember {
                    oom: 2.0,
                    percentage: 3.0,
                },
            ],
            completed: false,
            required: 99.0,
        };
        let p = build_snapshot(&coop, peeked_at());
        assert!((p.max_earning_bonus_percentage - 7.0).abs() < f64::EPSILON);
        // mean oom 1.0 -> 10^3
        assert!((p.mean_earning_bonus_percentage - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn missing_contract_zeroes_openings_and_required_rate() {
        let coop = FakeCoop {
            contract: None,
            members: Vec::new(),
            completed: false,
            required: 99.0,
        };
        let p = build_snapshot(&coop, peeked_at());
        assert_eq!(p.openings, 0);
        assert!(p.required_eggs_per_hour.abs() < f64::EPSILON);
        assert!(p.is_on_track_to_finish());
    }

    #[test]
    fn overfull_roster_reports_negative_openings() {
        let coop = FakeCoop {
            contract: Some(FakeContract(1)),
            members: vec![
                FakeMember {
                    oom: 0.0,
                    percentage: 100.0,
                },
                FakeMember {
                    oom: 0.0,
                    percentage: 100.0,
                },
            ],
            completed: false,
            required: 0.0,
        };
        assert_eq!(build_snapshot(&coop, peeked_at()).openings, -1);
    }

    #[test]
    fn negative_percentages_never_lower_max_below_zero() {
        let coop = FakeCoop {
            contract: None,
            members: vec![FakeMember {
                oom: 0.0,
                percentage: -5.0,
            }],
            completed: false,
            required: 0.0,
        };
        let p = build_snapshot(&coop, peeked_at());
        assert!(p.max_earning_bonus_percentage.abs() < f64::EPSILON);
    }
}
