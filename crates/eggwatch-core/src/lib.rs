//! Snapshot building and event evaluation for eggwatch.
//!
//! This crate turns raw coop status and event records into the values the
//! monitoring layer acts on. Everything here is a pure function of its
//! inputs: no I/O, no shared state, safe to call from any thread.
//!
//! # Modules
//!
//! - [`coop`] -- [`CoopView`], [`MemberView`], and [`ContractView`]: the
//!   capabilities the builder needs from the upstream coop models.
//! - [`snapshot`] -- [`build_snapshot`], which derives a [`Peeked`].
//! - [`event`] -- [`Clock`] injection and the [`EventEvaluator`].
//! - [`config`] -- Configuration loading from `eggwatch-config.yaml`.
//!
//! [`CoopView`]: coop::CoopView
//! [`MemberView`]: coop::MemberView
//! [`ContractView`]: coop::ContractView
//! [`build_snapshot`]: snapshot::build_snapshot
//! [`Peeked`]: eggwatch_types::Peeked
//! [`Clock`]: event::Clock
//! [`EventEvaluator`]: event::EventEvaluator

pub mod config;
pub mod coop;
pub mod event;
pub mod snapshot;

pub use event::{Clock, EventEvaluator, FixedClock, SystemClock};
pub use snapshot::build_snapshot;
