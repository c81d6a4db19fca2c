//! Time abstraction traits and the timer handles built on them.
//!
//! The panel never sleeps or spawns anything. Each LED owns its timers as
//! plain deadline handles; the host reads the clock through [`TimeSource`]
//! and calls `service` when a deadline may have passed.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants handed to the timers must never go backwards.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

/// Returns the shorter of two optional waits; `None` means "nothing pending".
pub fn earliest<D: TimeDuration>(a: Option<D>, b: Option<D>) -> Option<D> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b.as_millis() < a.as_millis() { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

/// A timer that fires once after a delay.
///
/// Starting it again replaces the pending deadline, so an old deadline can
/// never fire after a restart.
pub struct OneShot<I: TimeInstant> {
    armed: Option<(I, I::Duration)>,
}

impl<I: TimeInstant> OneShot<I> {
    /// Creates a stopped timer.
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Schedules the timer to fire `delay` after `now`.
    pub fn start(&mut self, now: I, delay: I::Duration) {
        self.armed = Some((now, delay));
    }

    /// Cancels the pending deadline, if any.
    pub fn stop(&mut self) {
        self.armed = None;
    }

    /// Returns true while a deadline is pending.
    pub fn is_active(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns true exactly once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: I) -> bool {
        match self.armed {
            Some((start, delay)) if now.duration_since(start).as_millis() >= delay.as_millis() => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, `None` when stopped.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.armed
            .map(|(start, delay)| delay.saturating_sub(now.duration_since(start)))
    }
}

impl<I: TimeInstant> Default for OneShot<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer that fires repeatedly at a fixed interval.
pub struct Periodic<I: TimeInstant> {
    /// Instant of the last tick (or the start) and the interval.
    armed: Option<(I, I::Duration)>,
}

impl<I: TimeInstant> Periodic<I> {
    /// Creates a stopped timer.
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Starts ticking every `interval` from `now`, replacing any previous schedule.
    ///
    /// A zero interval stops the timer.
    pub fn start(&mut self, now: I, interval: I::Duration) {
        if interval.as_millis() == 0 {
            self.armed = None;
        } else {
            self.armed = Some((now, interval));
        }
    }

    /// Stops ticking.
    pub fn stop(&mut self) {
        self.armed = None;
    }

    /// Returns true while ticking.
    pub fn is_active(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns how many ticks have elapsed since the last poll.
    ///
    /// Late polls report every missed tick so callers can keep parity.
    pub fn poll(&mut self, now: I) -> u64 {
        let Some((last, interval)) = self.armed else {
            return 0;
        };

        let interval_millis = interval.as_millis();
        let ticks = now.duration_since(last).as_millis() / interval_millis;
        if ticks > 0 {
            // On overflow, re-anchor at `now` and accept a slightly shifted phase.
            let advanced = I::Duration::from_millis(ticks * interval_millis);
            let next = last.checked_add(advanced).unwrap_or(now);
            self.armed = Some((next, interval));
        }
        ticks
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.armed
            .map(|(last, interval)| interval.saturating_sub(now.duration_since(last)))
    }
}

impl<I: TimeInstant> Default for Periodic<I> {
    fn default() -> Self {
        Self::new()
    }
}
