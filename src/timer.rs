//! Elapsed-time accumulator with start/stop/reset semantics.
//!
//! Elapsed time is always a single difference between two clock readings.
//! Resuming after a pause shifts the start reference forward by the length
//! of the pause instead of keeping a running total, so repeated
//! pause/resume cycles never accumulate rounding error.

use std::time::{Duration, Instant};

// ============================================================================
// CLOCKS
// ============================================================================

/// A monotonic time source, measured from an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// The process monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ManualClock {
    now: std::cell::Cell<Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn at_secs(secs: f64) -> Self {
        let clock = ManualClock::default();
        clock.set_secs(secs);
        clock
    }

    pub(crate) fn set_secs(&self, secs: f64) {
        self.now.set(Duration::from_secs_f64(secs));
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// ============================================================================
// TIMER
// ============================================================================

/// Stopwatch state.
///
/// While started, elapsed = now − start reference. While stopped,
/// elapsed = stop reference − start reference. A missing start reference
/// means the timer has never run since the last reset.
#[derive(Debug)]
pub struct Timer<C = MonotonicClock> {
    clock: C,
    started: bool,
    start_ref: Option<Duration>,
    stop_ref: Duration,
}

impl Default for Timer<MonotonicClock> {
    fn default() -> Self {
        Timer::new(MonotonicClock::new())
    }
}

impl<C: Clock> Timer<C> {
    pub fn new(clock: C) -> Self {
        Timer {
            clock,
            started: false,
            start_ref: None,
            stop_ref: Duration::ZERO,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Clear both references and stop. Elapsed reads zero afterwards.
    pub fn reset(&mut self) {
        self.started = false;
        self.start_ref = None;
        self.stop_ref = Duration::ZERO;
    }

    /// Start, or resume after a stop without losing accumulated time.
    ///
    /// Calling this while already started only re-marks the timer as
    /// started; the start reference is left alone.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        let now = self.clock.now();
        self.start_ref = Some(match self.start_ref {
            // Shift forward by the pause so the difference keeps the old total.
            Some(start) => start + now.saturating_sub(self.stop_ref),
            None => now,
        });
        self.started = true;
    }

    /// Freeze elapsed time at the current clock reading.
    ///
    /// Stopping an already stopped timer does nothing; the frozen total
    /// stays put.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.stop_ref = self.clock.now();
        self.started = false;
    }

    /// Accumulated running time since the last reset.
    pub fn elapsed(&self) -> Duration {
        let Some(start) = self.start_ref else {
            return Duration::ZERO;
        };
        let end = if self.started { self.clock.now() } else { self.stop_ref };
        end.saturating_sub(start)
    }

    /// [`Timer::elapsed`] in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-6;

    fn assert_secs(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn new_timer_is_stopped_at_zero() {
        let clock = ManualClock::at_secs(3.0);
        let timer = Timer::new(&clock);
        assert!(!timer.is_started());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn start_stop_resume_scenario() {
        let clock = ManualClock::at_secs(0.0);
        let mut timer = Timer::new(&clock);

        timer.start();
        clock.set_secs(1.23);
        assert_secs(timer.elapsed_secs(), 1.23);

        timer.stop();
        clock.set_secs(5.0);
        assert_secs(timer.elapsed_secs(), 1.23);

        timer.start();
        clock.set_secs(6.0);
        assert_secs(timer.elapsed_secs(), 2.23);
    }

    #[test]
    fn start_at_clock_zero_still_counts_as_started() {
        let clock = ManualClock::at_secs(0.0);
        let mut timer = Timer::new(&clock);
        timer.start();
        timer.stop();
        clock.set_secs(2.0);
        timer.start();
        clock.set_secs(3.0);
        assert_secs(timer.elapsed_secs(), 1.0);
    }

    #[test]
    fn elapsed_is_frozen_while_stopped() {
        let clock = ManualClock::at_secs(10.0);
        let mut timer = Timer::new(&clock);
        timer.start();
        clock.advance(Duration::from_millis(500));
        timer.stop();
        let frozen = timer.elapsed();
        clock.advance(Duration::from_secs(60));
        assert_eq!(timer.elapsed(), frozen);
    }

    #[test]
    fn double_start_does_not_double_count() {
        let clock = ManualClock::at_secs(1.0);
        let mut timer = Timer::new(&clock);
        timer.start();
        clock.set_secs(2.0);
        timer.start();
        clock.set_secs(4.0);
        assert_secs(timer.elapsed_secs(), 3.0);
        assert!(timer.is_started());
    }

    #[test]
    fn reset_from_any_state_reads_zero() {
        let clock = ManualClock::at_secs(1.0);
        let mut timer = Timer::new(&clock);

        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.start();
        clock.set_secs(4.0);
        timer.reset();
        assert!(!timer.is_started());
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.start();
        clock.set_secs(6.0);
        timer.stop();
        timer.reset();
        assert!(!timer.is_started());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn start_after_reset_begins_fresh() {
        let clock = ManualClock::at_secs(0.0);
        let mut timer = Timer::new(&clock);
        timer.start();
        clock.set_secs(5.0);
        timer.stop();
        timer.reset();

        clock.set_secs(20.0);
        timer.start();
        clock.set_secs(21.5);
        assert_secs(timer.elapsed_secs(), 1.5);
    }

    #[test]
    fn second_stop_keeps_elapsed_frozen() {
        let clock = ManualClock::at_secs(0.0);
        let mut timer = Timer::new(&clock);
        timer.start();
        clock.set_secs(1.0);
        timer.stop();
        clock.set_secs(5.0);
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::from_secs(1));
        assert!(!timer.is_started());
    }

    #[test]
    fn stop_before_any_start_reads_zero() {
        let clock = ManualClock::at_secs(3.0);
        let mut timer = Timer::new(&clock);
        timer.stop();
        clock.set_secs(4.0);
        timer.start();
        clock.set_secs(4.5);
        assert_eq!(timer.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    proptest! {
        /// For any mix of start and stop calls, elapsed equals the total
        /// time spent started.
        #[test]
        fn elapsed_matches_time_spent_started(
            ops in proptest::collection::vec((any::<bool>(), 0u64..10_000), 1..40)
        ) {
            let clock = ManualClock::default();
            let mut timer = Timer::new(&clock);
            let mut running = false;
            let mut expected = Duration::ZERO;

            for (start, wait_ms) in ops {
                if start {
                    timer.start();
                    running = true;
                } else {
                    timer.stop();
                    running = false;
                }
                prop_assert_eq!(timer.elapsed(), expected);

                let wait = Duration::from_millis(wait_ms);
                clock.advance(wait);
                if running {
                    expected += wait;
                }
                prop_assert_eq!(timer.is_started(), running);
                prop_assert_eq!(timer.elapsed(), expected);
            }
        }

        /// Elapsed never decreases while the timer runs.
        #[test]
        fn elapsed_is_monotonic_while_running(
            steps in proptest::collection::vec(0u64..1_000, 1..50)
        ) {
            let clock = ManualClock::default();
            let mut timer = Timer::new(&clock);
            timer.start();
            let mut last = timer.elapsed();
            for step in steps {
                clock.advance(Duration::from_millis(step));
                let now = timer.elapsed();
                prop_assert!(now >= last);
                last = now;
            }
        }
    }
}
