// Auto-shuffle scheduling.
//
// A pure state machine: callers pass `now` in and read the next deadline out.
// The app loop turns the deadline into a timer; tests just add durations.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::engine::{DrawOutcome, DrawPoolEngine};

/// Default interval between automatic reshuffles.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(2);

/// Why the scheduler is not counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    /// The pointer is over the pool.
    Hover,
    /// Auto-shuffle was switched off.
    Disabled,
    /// The session was taken over. Permanent.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStatus {
    Active,
    Suspended(SuspendReason),
}

impl SchedulerStatus {
    pub fn is_active(self) -> bool {
        self == SchedulerStatus::Active
    }
}

/// Reshuffles the pool every `period` while nothing suspends it.
///
/// Every state change restarts the countdown from the time of the change.
#[derive(Debug, Clone)]
pub struct AutoShuffleScheduler {
    period: Duration,
    enabled: bool,
    hovering: bool,
    blocked: bool,
    deadline: Option<Instant>,
}

impl AutoShuffleScheduler {
    /// Create an idle scheduler. Nothing fires until [`reschedule`] is called.
    ///
    /// [`reschedule`]: AutoShuffleScheduler::reschedule
    pub fn new(period: Duration, enabled: bool) -> Self {
        AutoShuffleScheduler {
            period,
            enabled,
            hovering: false,
            blocked: false,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Blocked outranks disabled, which outranks hover.
    pub fn status(&self) -> SchedulerStatus {
        if self.blocked {
            SchedulerStatus::Suspended(SuspendReason::Blocked)
        } else if !self.enabled {
            SchedulerStatus::Suspended(SuspendReason::Disabled)
        } else if self.hovering {
            SchedulerStatus::Suspended(SuspendReason::Hover)
        } else {
            SchedulerStatus::Active
        }
    }

    /// Cancel any pending deadline and start a new countdown if active.
    pub fn reschedule(&mut self, now: Instant) {
        self.deadline = if self.status().is_active() {
            Some(now + self.period)
        } else {
            None
        };
    }

    pub fn set_hovering(&mut self, hovering: bool, now: Instant) {
        self.hovering = hovering;
        self.reschedule(now);
    }

    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        debug!("Auto-shuffle {}", if enabled { "enabled" } else { "disabled" });
        self.enabled = enabled;
        self.reschedule(now);
    }

    /// Stop for good. There is no way back from this.
    pub fn set_blocked(&mut self) {
        self.blocked = true;
        self.deadline = None;
    }

    /// Drop the pending deadline without changing status.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Reshuffle the pool if the deadline has passed, then restart the
    /// countdown. Returns the engine outcome when a reshuffle ran.
    pub fn fire(&mut self, engine: &mut DrawPoolEngine, now: Instant) -> Option<DrawOutcome> {
        if !self.is_due(now) {
            return None;
        }

        let outcome = engine.reshuffle();
        if outcome == DrawOutcome::Blocked {
            self.set_blocked();
        } else {
            self.reschedule(now);
        }
        Some(outcome)
    }
}

impl Default for AutoShuffleScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD, true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
