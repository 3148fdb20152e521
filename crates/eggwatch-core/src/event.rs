//! Event evaluation against an injected clock.
//!
//! [`Event`] answers every temporal question relative to an explicit
//! instant. The [`EventEvaluator`] pairs those queries with a [`Clock`] so
//! callers at the system boundary can use the real wall clock through
//! [`EventEvaluator::system`], while tests and replays pin time with a
//! [`FixedClock`].

use chrono::{DateTime, TimeDelta, Utc};
use eggwatch_types::Event;

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Evaluates events relative to a [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct EventEvaluator<C = SystemClock> {
    clock: C,
}

impl EventEvaluator<SystemClock> {
    /// Evaluator backed by the real wall clock.
    pub const fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> EventEvaluator<C> {
    /// Evaluator backed by `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The instant this evaluator treats as "now".
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Whether `event` is still running.
    pub fn has_time_left(&self, event: &Event) -> bool {
        event.has_time_left_at(self.clock.now())
    }

    /// Signed time until `event` expires. Negative once expired.
    pub fn time_left(&self, event: &Event) -> TimeDelta {
        event.time_left_at(self.clock.now())
    }

    /// Events that are still running, in input order.
    ///
    /// The clock is read once so every event is judged against the same
    /// instant.
    pub fn active<'a, I>(&self, events: I) -> Vec<&'a Event>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let now = self.clock.now();
        events
            .into_iter()
            .filter(|e| e.has_time_left_at(now))
            .collect()
    }
}
