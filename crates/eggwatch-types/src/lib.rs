//! Shared type definitions for eggwatch.
//!
//! This crate holds every data shape that crosses a crate boundary: the
//! upstream coop models handed over by the game-API collaborator, and the
//! owned records (`Peeked`, `Event`) that the monitoring core derives or
//! reads. Types flow downstream to `TypeScript` via `ts-rs` for dashboards.
//!
//! # Modules
//!
//! - [`coop`] -- Coop status, contract, goal, and member models with their
//!   game-domain capabilities (bonus percentage, rates, deadlines)
//! - [`peeked`] -- Point-in-time coop snapshot and its on-track queries
//! - [`event`] -- Live game event record and its temporal queries
//! - [`duration_ms`] -- Serde adapter for signed durations
//! - [`rate`] -- Serde adapter for rates that may be infinite

pub mod coop;
pub mod duration_ms;
pub mod event;
pub mod peeked;
pub mod rate;

// Re-export all public types at crate root for convenience.
pub use coop::{Contract, CoopStatus, Goal, Member, SECONDS_PER_HOUR};
pub use event::Event;
pub use peeked::Peeked;

#[cfg(test)]
mod tests {
    //! Binding generation for dashboard consumers.

    #[test]
    fn export_bindings() {
        // ts-rs writes the `.ts` files into `bindings/` relative to the
        // crate root when `export_all` is called.
        use ts_rs::TS;

        let _ = crate::coop::Goal::export_all();
        let _ = crate::coop::Contract::export_all();
        let _ = crate::coop::Member::export_all();
        let _ = crate::coop::CoopStatus::export_all();
        let _ = crate::peeked::Peeked::export_all();
        let _ = crate::event::Event::export_all();
    }
}
