// SPDX-License-Identifier: MPL-2.0
//! Hold-to-clear confirmation gesture.
//!
//! Clearing the board is destructive, so it requires a sustained press:
//!
//! ```text
//! Idle ──press──▶ Holding ──release / leave──▶ Idle      (no mutation)
//!                    │
//!                    └──tick, elapsed ≥ threshold──▶ Fired ──▶ Idle
//! ```
//!
//! The state machine takes `Instant`s from the caller instead of reading the
//! clock, so tests drive it with virtual time. The periodic tick itself is a
//! subscription that the application only keeps alive while
//! [`HoldToClear::is_holding`] is true; any tick that still arrives after a
//! release is ignored here.

use crate::config::{
    DEFAULT_CLEAR_HOLD_MS, DEFAULT_PROGRESS_INTERVAL_MS, MAX_CLEAR_HOLD_MS,
    MAX_PROGRESS_INTERVAL_MS, MIN_CLEAR_HOLD_MS, MIN_PROGRESS_INTERVAL_MS,
};
use std::time::{Duration, Instant};

/// How long the clear control must be held, in milliseconds.
///
/// # Example
///
/// ```
/// use guess_board::board::HoldThreshold;
///
/// assert_eq!(HoldThreshold::new(1500).value(), 1500);
/// assert_eq!(HoldThreshold::new(0).value(), 200); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldThreshold(u64);

impl HoldThreshold {
    /// Creates a threshold, clamping to the supported range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_CLEAR_HOLD_MS, MAX_CLEAR_HOLD_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HoldThreshold {
    fn default() -> Self {
        Self(DEFAULT_CLEAR_HOLD_MS)
    }
}

/// Interval between progress samples while holding, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleInterval(u64);

impl SampleInterval {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_PROGRESS_INTERVAL_MS, MAX_PROGRESS_INTERVAL_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SampleInterval {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS_INTERVAL_MS)
    }
}

/// Hold progress as a percentage, always within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct HoldProgress(f32);

impl HoldProgress {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Progress of `elapsed` towards `threshold`.
    #[must_use]
    pub fn of(elapsed: Duration, threshold: HoldThreshold) -> Self {
        let total = threshold.as_duration().as_secs_f32();
        Self::new(elapsed.as_secs_f32() / total * 100.0)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Progress as a 0.0–1.0 fraction.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

/// Result of feeding a tick to the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldOutcome {
    /// Not holding; the tick was stale.
    Idle,
    /// Still holding, progress updated.
    Holding(HoldProgress),
    /// Threshold reached. The caller clears the board.
    Fired,
}

/// Hold-to-clear gesture state.
#[derive(Debug, Clone, Default)]
pub struct HoldToClear {
    threshold: HoldThreshold,
    interval: SampleInterval,
    started_at: Option<Instant>,
    progress: HoldProgress,
}

impl HoldToClear {
    #[must_use]
    pub fn new(threshold: HoldThreshold, interval: SampleInterval) -> Self {
        Self {
            threshold,
            interval,
            started_at: None,
            progress: HoldProgress::ZERO,
        }
    }

    pub fn threshold(&self) -> HoldThreshold {
        self.threshold
    }

    /// How often the application should sample progress while holding.
    pub fn interval(&self) -> SampleInterval {
        self.interval
    }

    pub fn progress(&self) -> HoldProgress {
        self.progress
    }

    pub fn is_holding(&self) -> bool {
        self.started_at.is_some()
    }

    /// Pointer pressed on the clear control. A second press while already
    /// holding keeps the original start time.
    pub fn press(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            self.progress = HoldProgress::ZERO;
            tracing::debug!("clear hold started");
        }
    }

    /// Pointer released or left the control before the threshold.
    ///
    /// Returns `true` if a hold was actually aborted.
    pub fn cancel(&mut self) -> bool {
        let was_holding = self.started_at.take().is_some();
        self.progress = HoldProgress::ZERO;
        if was_holding {
            tracing::debug!("clear hold cancelled");
        }
        was_holding
    }

    /// Samples the hold at `now`.
    pub fn tick(&mut self, now: Instant) -> HoldOutcome {
        let Some(started_at) = self.started_at else {
            return HoldOutcome::Idle;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.threshold.as_duration() {
            self.started_at = None;
            self.progress = HoldProgress::ZERO;
            tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "clear hold fired");
            return HoldOutcome::Fired;
        }

        self.progress = HoldProgress::of(elapsed, self.threshold);
        HoldOutcome::Holding(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Ticks every `interval` ms from `start` up to and including `until` ms.
    fn run_ticks(hold: &mut HoldToClear, start: Instant, interval: u64, until: u64) -> usize {
        let mut fired = 0;
        let mut t = interval;
        while t <= until {
            if hold.tick(start + ms(t)) == HoldOutcome::Fired {
                fired += 1;
            }
            t += interval;
        }
        fired
    }

    #[test]
    fn threshold_clamps_to_valid_range() {
        assert_eq!(HoldThreshold::new(0).value(), MIN_CLEAR_HOLD_MS);
        assert_eq!(HoldThreshold::new(u64::MAX).value(), MAX_CLEAR_HOLD_MS);
        assert_eq!(HoldThreshold::default().value(), DEFAULT_CLEAR_HOLD_MS);
    }

    #[test]
    fn interval_clamps_to_valid_range() {
        assert_eq!(SampleInterval::new(1).value(), MIN_PROGRESS_INTERVAL_MS);
        assert_eq!(SampleInterval::new(10_000).value(), MAX_PROGRESS_INTERVAL_MS);
        assert_eq!(SampleInterval::default().as_duration(), ms(50));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(HoldProgress::new(-5.0).value(), 0.0);
        assert_eq!(HoldProgress::new(250.0).value(), 100.0);
        assert_eq!(HoldProgress::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn progress_of_half_threshold_is_fifty_percent() {
        let progress = HoldProgress::of(ms(500), HoldThreshold::new(1000));
        assert!((progress.value() - 50.0).abs() < 0.01);
        assert!((progress.fraction() - 0.5).abs() < 0.0001);
    }

    #[test]
    fn full_hold_fires_exactly_once() {
        let mut hold = HoldToClear::default();
        let start = Instant::now();
        hold.press(start);

        let fired = run_ticks(&mut hold, start, 50, 1500);

        assert_eq!(fired, 1);
        assert!(!hold.is_holding());
        assert_eq!(hold.progress(), HoldProgress::ZERO);
    }

    #[test]
    fn progress_grows_while_holding() {
        let mut hold = HoldToClear::default();
        let start = Instant::now();
        hold.press(start);

        let HoldOutcome::Holding(early) = hold.tick(start + ms(250)) else {
            panic!("expected holding");
        };
        let HoldOutcome::Holding(late) = hold.tick(start + ms(750)) else {
            panic!("expected holding");
        };

        assert!(late > early);
        assert!((late.value() - 75.0).abs() < 0.01);
    }

    #[test]
    fn release_before_threshold_resets_progress() {
        let mut hold = HoldToClear::default();
        let start = Instant::now();
        hold.press(start);
        run_ticks(&mut hold, start, 50, 500);
        assert!(hold.progress().value() > 0.0);

        assert!(hold.cancel());

        assert!(!hold.is_holding());
        assert_eq!(hold.progress(), HoldProgress::ZERO);
    }

    #[test]
    fn stale_tick_after_release_does_not_fire() {
        let mut hold = HoldToClear::default();
        let start = Instant::now();
        hold.press(start);
        hold.cancel();

        assert_eq!(hold.tick(start + ms(5000)), HoldOutcome::Idle);
    }

    #[test]
    fn cancel_when_idle_reports_nothing() {
        let mut hold = HoldToClear::default();
        assert!(!hold.cancel());
    }

    #[test]
    fn repeated_press_keeps_original_start() {
        let mut hold = HoldToClear::default();
        let start = Instant::now();
        hold.press(start);
        hold.press(start + ms(800));

        assert_eq!(hold.tick(start + ms(1000)), HoldOutcome::Fired);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut hold = HoldToClear::new(HoldThreshold::new(2000), SampleInterval::default());
        let start = Instant::now();
        hold.press(start);

        assert!(matches!(hold.tick(start + ms(1500)), HoldOutcome::Holding(_)));
        assert_eq!(hold.tick(start + ms(2000)), HoldOutcome::Fired);
    }
}
