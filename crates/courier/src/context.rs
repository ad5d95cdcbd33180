//! Execution deadlines for a single dispatch.
//!
//! A [`ContextBuilder`] is asked for a fresh [`Context`] each time a request
//! is prepared. The deadline is fixed at that moment, so the timeout window
//! starts at dispatch, not when the builder was configured. A context is
//! spent once its dispatch finishes and is never reused.

use std::fmt;
use std::time::{Duration, Instant};

/// Timeout applied when a request carries no [`ContextBuilder`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Deadline used when `started + timeout` does not fit in an [`Instant`].
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Strategy producing the deadline for one dispatch.
pub trait ContextBuilder: Send + Sync + fmt::Debug {
    fn build(&self) -> Context;
}

/// Deadline-bound scope of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    started:  Instant,
    deadline: Instant,
}

impl Context {
    pub fn new(started: Instant, deadline: Instant) -> Self {
        Self {
            started,
            deadline: deadline.max(started),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let started = Instant::now();
        let deadline = started
            .checked_add(timeout)
            .or_else(|| started.checked_add(FAR_FUTURE))
            .unwrap_or(started);
        Self::new(started, deadline)
    }

    pub fn started(&self) -> Instant { self.started }

    pub fn deadline(&self) -> Instant { self.deadline }

    /// Full length of the window, from build to deadline.
    pub fn timeout(&self) -> Duration { self.deadline - self.started }

    pub fn remaining(&self) -> Duration { self.deadline.saturating_duration_since(Instant::now()) }

    pub fn is_expired(&self) -> bool { Instant::now() >= self.deadline }
}

/// Deadline a fixed duration after [`ContextBuilder::build`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutContext {
    timeout: Duration,
}

impl TimeoutContext {
    pub fn new(timeout: Duration) -> Self { Self { timeout } }

    pub fn timeout(&self) -> Duration { self.timeout }
}

impl Default for TimeoutContext {
    fn default() -> Self { Self::new(DEFAULT_TIMEOUT) }
}

impl ContextBuilder for TimeoutContext {
    fn build(&self) -> Context { Context::with_timeout(self.timeout) }
}

/// Deadline at a fixed instant, whenever the context is built.
///
/// A deadline already in the past yields an expired context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineContext {
    deadline: Instant,
}

impl DeadlineContext {
    pub fn new(deadline: Instant) -> Self { Self { deadline } }
}

impl ContextBuilder for DeadlineContext {
    fn build(&self) -> Context { Context::new(Instant::now(), self.deadline) }
}
