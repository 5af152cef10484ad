//! # Auto-Advance Timer
//!
//! A periodic deadline, not a thread. The event loop asks [`AutoAdvance::due`]
//! on every iteration and sizes its poll timeout with
//! [`AutoAdvance::time_until_due`], so ticks interleave with input events
//! on the same loop and never run concurrently with them.
//!
//! Starting while already active is a no-op: the period is not reset and
//! no second schedule is created.

use std::time::{Duration, Instant};

/// Shortest period accepted; anything below is raised to this.
pub const MIN_PERIOD: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    period: Option<Duration>,
    next_tick: Option<Instant>,
}

impl AutoAdvance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.period.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Start ticking every `period` from `now`. Returns `false` (and changes
    /// nothing) if already active.
    pub fn start(&mut self, period: Duration, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }
        let period = period.max(MIN_PERIOD);
        self.period = Some(period);
        self.next_tick = Some(now + period);
        true
    }

    /// Returns `false` if it was not active.
    pub fn stop(&mut self) -> bool {
        self.next_tick = None;
        self.period.take().is_some()
    }

    /// Whether a tick is due at `now`. Consumes the tick and schedules the next.
    ///
    /// A loop that fell behind (e.g. a suspended terminal) gets one tick and
    /// resumes from `now`, not a burst of catch-up ticks.
    pub fn due(&mut self, now: Instant) -> bool {
        let (Some(period), Some(next_tick)) = (self.period, self.next_tick) else {
            return false;
        };
        if now < next_tick {
            return false;
        }
        let following = next_tick + period;
        self.next_tick = Some(if following <= now { now + period } else { following });
        true
    }

    /// Time left until the next tick, `None` when inactive.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|next_tick| next_tick.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    #[test]
    fn test_inactive_never_due() {
        let mut timer = AutoAdvance::new();
        let now = Instant::now();
        assert!(!timer.is_active());
        assert!(!timer.due(now + PERIOD * 10));
        assert_eq!(timer.time_until_due(now), None);
    }

    #[test]
    fn test_due_once_per_period() {
        let mut timer = AutoAdvance::new();
        let t0 = Instant::now();
        assert!(timer.start(PERIOD, t0));
        assert!(!timer.due(t0 + Duration::from_secs(4)));
        assert!(timer.due(t0 + PERIOD));
        assert!(!timer.due(t0 + PERIOD));
        assert!(timer.due(t0 + PERIOD * 2));
    }

    #[test]
    fn test_second_start_is_noop() {
        let mut timer = AutoAdvance::new();
        let t0 = Instant::now();
        assert!(timer.start(PERIOD, t0));
        assert!(!timer.start(Duration::from_secs(1), t0 + Duration::from_secs(3)));
        assert_eq!(timer.period(), Some(PERIOD));
        // Schedule still anchored at the first start
        assert_eq!(timer.time_until_due(t0 + Duration::from_secs(3)), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_stop() {
        let mut timer = AutoAdvance::new();
        let t0 = Instant::now();
        assert!(!timer.stop());
        timer.start(PERIOD, t0);
        assert!(timer.stop());
        assert!(!timer.is_active());
        assert!(!timer.due(t0 + PERIOD));
    }

    #[test]
    fn test_no_catch_up_burst() {
        let mut timer = AutoAdvance::new();
        let t0 = Instant::now();
        timer.start(PERIOD, t0);
        let late = t0 + PERIOD * 4;
        assert!(timer.due(late));
        assert!(!timer.due(late));
        assert_eq!(timer.time_until_due(late), Some(PERIOD));
    }

    #[test]
    fn test_tiny_period_is_raised() {
        let mut timer = AutoAdvance::new();
        timer.start(Duration::ZERO, Instant::now());
        assert_eq!(timer.period(), Some(MIN_PERIOD));
    }
}
