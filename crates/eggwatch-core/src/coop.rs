//! Capabilities the snapshot builder consumes from coop collaborators.
//!
//! The builder never reads game formulas directly. It asks a [`CoopView`]
//! for totals, rates, and deadlines, and a [`MemberView`] for bonus values,
//! so the game constants stay with the entities that own them. The
//! `eggwatch-types` models implement these traits by delegating to their
//! inherent methods.

use chrono::TimeDelta;
use eggwatch_types::{Contract, CoopStatus, Member};

/// Contract parameters needed to derive a snapshot.
pub trait ContractView {
    /// Maximum number of members the coop may hold.
    fn max_coop_size(&self) -> i32;
}

/// A coop member's earning bonus.
pub trait MemberView {
    /// Map an order of magnitude to its display percentage.
    fn percentage_for_oom(oom: f64) -> f64;

    /// Earning bonus as a power-of-ten exponent.
    fn earning_bonus_oom(&self) -> f64;

    /// Earning bonus as a display percentage.
    fn earning_bonus_percentage(&self) -> f64 {
        Self::percentage_for_oom(self.earning_bonus_oom())
    }
}

/// Read-only view of a polled coop.
///
/// Implementations must be side-effect free; the builder may call any
/// method more than once.
pub trait CoopView {
    /// The contract type this coop reports.
    type Contract: ContractView;
    /// The member type in this coop's roster.
    type Member: MemberView;

    /// Identifier of the contract.
    fn contract_id(&self) -> &str;

    /// Join code of the coop.
    fn code(&self) -> &str;

    /// Contract parameters, if the poll resolved them.
    fn contract(&self) -> Option<&Self::Contract>;

    /// Current roster.
    fn members(&self) -> &[Self::Member];

    /// Whether the contract is finished.
    fn has_completed(&self) -> bool;

    /// Total eggs laid.
    fn eggs_laid(&self) -> f64;

    /// Combined hourly laying rate.
    fn eggs_per_hour(&self) -> f64;

    /// Signed time until the production deadline.
    fn duration_until_production_deadline(&self) -> TimeDelta;

    /// Hourly rate needed to finish `contract` in time.
    fn required_eggs_per_hour(&self, contract: &Self::Contract) -> f64;
}

impl ContractView for Contract {
    fn max_coop_size(&self) -> i32 {
        self.max_coop_size
    }
}

impl MemberView for Member {
    fn percentage_for_oom(oom: f64) -> f64 {
        Self::percentage_for_oom(oom)
    }

    fn earning_bonus_oom(&self) -> f64 {
        self.earning_bonus_oom
    }

    fn earning_bonus_percentage(&self) -> f64 {
        Self::earning_bonus_percentage(self)
    }
}

impl CoopView for CoopStatus {
    type Contract = Contract;
    type Member = Member;

    fn contract_id(&self) -> &str {
        &self.contract_id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    fn members(&self) -> &[Member] {
        &self.members
    }

    fn has_completed(&self) -> bool {
        Self::has_completed(self)
    }

    fn eggs_laid(&self) -> f64 {
        self.eggs_laid
    }

    fn eggs_per_hour(&self) -> f64 {
        Self::eggs_per_hour(self)
    }

    fn duration_until_production_deadline(&self) -> TimeDelta {
        Self::duration_until_production_deadline(self)
    }

    fn required_eggs_per_hour(&self, contract: &Contract) -> f64 {
        Self::required_eggs_per_hour(self, contract)
    }
}
