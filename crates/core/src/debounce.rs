//! Cancel-and-reschedule debouncing over tokio's clock.
//!
//! Each `push` replaces the pending value and moves the deadline to `now + window`.
//! Only the latest value is ever delivered.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Record an input at `now`, dropping whatever was pending.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { deadline: now + self.window, value });
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| p.deadline <= now);
        if due { self.pending.take().map(|p| p.value) } else { None }
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Sleep until the pending deadline and deliver the value.
    ///
    /// Returns `None` immediately when nothing is pending.
    pub async fn settle(&mut self) -> Option<T> {
        let deadline = self.deadline()?;
        tokio::time::sleep_until(deadline).await;
        self.poll(deadline)
    }
}
