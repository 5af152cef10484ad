//! # Slide Navigator
//!
//! Owns the current slide index and keeps it in `[1, total]`. Every
//! successful mutation re-renders the full derived state into a
//! [`RenderTarget`]; operations that would leave the bounds do nothing.
//!
//! ```text
//! next / previous / go_to ──► current changes? ──► render(target)
//!                                   │ no
//!                                   └──► no-op (nothing published)
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::core::auto_advance::AutoAdvance;
use crate::core::deck::Transition;
use crate::core::view::{RenderTarget, SlideStatus};

/// Result of feeding the clock to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing was due.
    Idle,
    /// Auto-advance moved to the next slide.
    Advanced,
    /// Auto-advance found the last slide and switched itself off.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    total: usize,
    auto_advance: AutoAdvance,
}

impl Navigator {
    /// A navigator at slide 1. `total` is clamped to at least 1.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            auto_advance: AutoAdvance::new(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn can_advance(&self) -> bool {
        self.current < self.total
    }

    pub fn can_retreat(&self) -> bool {
        self.current > 1
    }

    pub fn progress(&self) -> f64 {
        self.current as f64 / self.total as f64
    }

    pub fn next<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current += 1;
        debug!("Navigator: next -> {}/{}", self.current, self.total);
        self.render(target);
        true
    }

    pub fn previous<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current -= 1;
        debug!("Navigator: previous -> {}/{}", self.current, self.total);
        self.render(target);
        true
    }

    /// Jump to a 1-based slide. Out-of-range targets are ignored.
    pub fn go_to<R: RenderTarget + ?Sized>(&mut self, position: usize, target: &mut R) -> bool {
        if !(1..=self.total).contains(&position) {
            debug!("Navigator: ignoring go_to({}) outside 1..={}", position, self.total);
            return false;
        }
        self.current = position;
        debug!("Navigator: go_to -> {}/{}", self.current, self.total);
        self.render(target);
        true
    }

    /// Publish the full derived state for the current position.
    pub fn render<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        for position in 1..=self.total {
            let status = match position.cmp(&self.current) {
                std::cmp::Ordering::Equal => SlideStatus::Active,
                std::cmp::Ordering::Less => SlideStatus::Prior,
                std::cmp::Ordering::Greater => SlideStatus::Upcoming,
            };
            target.set_slide_state(position, status, Transition::for_position(position));
            target.set_dot_active(position, position == self.current);
        }
        target.set_counter(self.current, self.total);
        target.set_progress(self.progress());
        target.set_controls(self.can_retreat(), self.can_advance());
    }

    // ── Auto-advance ────────────────────────────────────────────────────

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_active()
    }

    pub fn auto_advance_period(&self) -> Option<Duration> {
        self.auto_advance.period()
    }

    /// Returns `false` if auto-advance was already running.
    pub fn start_auto_advance(&mut self, period: Duration, now: Instant) -> bool {
        let started = self.auto_advance.start(period, now);
        if let Some(period) = self.auto_advance.period().filter(|_| started) {
            info!("Auto-advance started ({:?} per slide)", period);
        }
        started
    }

    /// Returns `false` if auto-advance was not running.
    pub fn stop_auto_advance(&mut self) -> bool {
        let stopped = self.auto_advance.stop();
        if stopped {
            info!("Auto-advance stopped at slide {}/{}", self.current, self.total);
        }
        stopped
    }

    /// Stop if running, start otherwise. Returns whether it is now active.
    pub fn toggle_auto_advance(&mut self, period: Duration, now: Instant) -> bool {
        if self.is_auto_advancing() {
            self.stop_auto_advance();
            false
        } else {
            self.start_auto_advance(period, now)
        }
    }

    /// Advance the auto-advance clock to `now`.
    pub fn tick<R: RenderTarget + ?Sized>(&mut self, now: Instant, target: &mut R) -> Tick {
        if !self.auto_advance.due(now) {
            return Tick::Idle;
        }
        if self.next(target) {
            Tick::Advanced
        } else {
            self.stop_auto_advance();
            Tick::Stopped
        }
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.auto_advance.time_until_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::DeckView;

    const TOTAL: usize = 20;

    fn setup() -> (Navigator, DeckView) {
        let nav = Navigator::new(TOTAL);
        let mut view = DeckView::new(TOTAL);
        nav.render(&mut view);
        (nav, view)
    }

    #[test]
    fn test_go_to_every_slide_marks_one_dot() {
        let (mut nav, mut view) = setup();
        for n in 1..=TOTAL {
            assert!(nav.go_to(n, &mut view));
            assert_eq!(nav.current(), n);
            assert_eq!(view.active_dots(), vec![n]);
            assert_eq!(view.current, n);
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let (mut nav, mut view) = setup();
        nav.go_to(7, &mut view);
        assert!(!nav.go_to(0, &mut view));
        assert!(!nav.go_to(TOTAL + 1, &mut view));
        assert_eq!(nav.current(), 7);
        assert_eq!(view.current, 7);
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        let (mut nav, mut view) = setup();
        for k in 2..TOTAL {
            nav.go_to(k, &mut view);
            nav.next(&mut view);
            nav.previous(&mut view);
            assert_eq!(nav.current(), k);
        }
    }

    #[test]
    fn test_bounds_are_noops() {
        let (mut nav, mut view) = setup();
        assert!(!nav.previous(&mut view));
        assert_eq!(nav.current(), 1);
        nav.go_to(TOTAL, &mut view);
        assert!(!nav.next(&mut view));
        assert_eq!(nav.current(), TOTAL);
    }

    #[test]
    fn test_progress_fraction() {
        let (mut nav, mut view) = setup();
        nav.go_to(5, &mut view);
        assert_eq!(nav.progress(), 0.25);
        assert_eq!(view.progress, 0.25);
        nav.go_to(TOTAL, &mut view);
        assert_eq!(view.progress, 1.0);
    }

    #[test]
    fn test_controls_follow_bounds() {
        let (mut nav, mut view) = setup();
        assert!(!view.previous_enabled);
        assert!(view.next_enabled);
        nav.next(&mut view);
        assert!(view.previous_enabled);
        assert!(view.next_enabled);
        nav.go_to(TOTAL, &mut view);
        assert!(view.previous_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn test_slide_statuses_and_transitions() {
        let (mut nav, mut view) = setup();
        nav.go_to(3, &mut view);
        assert_eq!(view.slides[0].status, SlideStatus::Prior);
        assert_eq!(view.slides[1].status, SlideStatus::Prior);
        assert_eq!(view.slides[2].status, SlideStatus::Active);
        assert_eq!(view.slides[3].status, SlideStatus::Upcoming);
        assert_eq!(view.slides[2].transition, Some(Transition::SlideRight));
        assert_eq!(view.slides[6].transition, Some(Transition::Rotate));
    }

    #[test]
    fn test_single_slide_deck() {
        let mut nav = Navigator::new(1);
        let mut view = DeckView::new(1);
        nav.render(&mut view);
        assert!(!view.previous_enabled);
        assert!(!view.next_enabled);
        assert_eq!(view.progress, 1.0);
        assert!(!nav.next(&mut view));
    }

    #[test]
    fn test_auto_advance_stops_at_last_slide() {
        let (mut nav, mut view) = setup();
        let period = Duration::from_secs(5);
        let t0 = Instant::now();
        nav.go_to(TOTAL - 1, &mut view);
        assert!(nav.start_auto_advance(period, t0));

        assert_eq!(nav.tick(t0 + Duration::from_secs(1), &mut view), Tick::Idle);
        assert_eq!(nav.tick(t0 + period, &mut view), Tick::Advanced);
        assert_eq!(nav.current(), TOTAL);
        assert!(nav.is_auto_advancing());

        assert_eq!(nav.tick(t0 + period * 2, &mut view), Tick::Stopped);
        assert!(!nav.is_auto_advancing());
        assert_eq!(nav.current(), TOTAL);
        assert_eq!(nav.tick(t0 + period * 3, &mut view), Tick::Idle);
    }

    #[test]
    fn test_toggle_auto_advance() {
        let (mut nav, _view) = setup();
        let t0 = Instant::now();
        assert!(nav.toggle_auto_advance(Duration::from_secs(5), t0));
        assert!(!nav.start_auto_advance(Duration::from_secs(10), t0));
        assert_eq!(nav.auto_advance_period(), Some(Duration::from_secs(5)));
        assert!(!nav.toggle_auto_advance(Duration::from_secs(5), t0));
        assert!(!nav.is_auto_advancing());
    }
}
