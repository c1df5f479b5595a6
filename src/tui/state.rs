//! TUI state algebra.
//!
//! `App` owns everything that lives for the whole session: the timer, the
//! hue, the palette and the quit flag. The input state machine programs
//! against `Phase`, `Action` and `Command`; only `App::apply` touches the
//! timer.

use crate::config::Config;
use crate::hue::{self, HueCycler};
use crate::timer::{Clock, MonotonicClock, Timer};

use super::theme::Palette;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model, constructed once in the entry point.
#[derive(Debug)]
pub struct App<C = MonotonicClock> {
    pub timer: Timer<C>,
    pub hue: HueCycler,
    /// Color slots; the dynamic slot follows `hue`.
    pub palette: Palette,
    pub lightness: f64,
    pub saturation: f64,
    /// Set when the loop should end after the current tick.
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(clock: C, config: &Config) -> Self {
        let hue = HueCycler::new();
        let dynamic = hue::to_rgb(hue.hue(), config.lightness, config.saturation);
        App {
            timer: Timer::new(clock),
            hue,
            palette: Palette::new(dynamic, config.accent),
            lightness: config.lightness,
            saturation: config.saturation,
            should_quit: false,
        }
    }

    /// Where the stopwatch sits in the input state machine.
    pub fn phase(&self) -> Phase {
        if self.timer.is_started() {
            Phase::Running
        } else if self.timer.elapsed().is_zero() {
            Phase::StoppedAtZero
        } else {
            Phase::StoppedNonZero
        }
    }

    /// Reprogram the dynamic color slot from the current hue.
    pub fn sync_color(&mut self) {
        let rgb = hue::to_rgb(self.hue.hue(), self.lightness, self.saturation);
        self.palette.set_dynamic(rgb);
    }

    /// Execute a command produced by the state machine.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => {
                self.timer.start();
                tracing::debug!(elapsed = ?self.timer.elapsed(), "timer started");
            }
            Command::Stop => {
                self.timer.stop();
                tracing::debug!(elapsed = ?self.timer.elapsed(), "timer stopped");
            }
            Command::Reset => {
                self.timer.reset();
                self.hue.reset();
                self.sync_color();
                tracing::debug!("timer reset");
            }
            Command::Quit => self.should_quit = true,
            Command::Ignore => {}
        }
    }
}

// ============================================================================
// INPUT STATE MACHINE
// ============================================================================

/// Coarse stopwatch state as seen by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh or just reset.
    StoppedAtZero,
    Running,
    /// Paused with time on the clock.
    StoppedNonZero,
}

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start if stopped, stop if running.
    ToggleRun,
    /// Zero the timer and the hue. Honored only while stopped.
    Reset,
    Quit,
}

/// What the effects layer should do in response to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    Quit,
    /// Request denied or meaningless in this phase.
    Ignore,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::timer::ManualClock;

    fn app(clock: &ManualClock) -> App<&ManualClock> {
        App::new(clock, &Config::default())
    }

    #[test]
    fn new_app_is_stopped_at_zero() {
        let clock = ManualClock::default();
        let app = app(&clock);
        assert_eq!(app.phase(), Phase::StoppedAtZero);
        assert_eq!(app.hue.hue(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn new_app_programs_dynamic_slot_from_hue_zero() {
        let clock = ManualClock::default();
        let app = app(&clock);
        assert_eq!(app.palette.dynamic(), hue::to_rgb(0, 0.6, 1.0));
    }

    #[test]
    fn phase_follows_timer() {
        let clock = ManualClock::default();
        let mut app = app(&clock);

        app.apply(Command::Start);
        assert_eq!(app.phase(), Phase::Running);

        clock.advance(Duration::from_millis(250));
        app.apply(Command::Stop);
        assert_eq!(app.phase(), Phase::StoppedNonZero);

        app.apply(Command::Reset);
        assert_eq!(app.phase(), Phase::StoppedAtZero);
    }

    #[test]
    fn reset_command_zeroes_hue_and_color() {
        let clock = ManualClock::default();
        let mut app = app(&clock);
        for _ in 0..42 {
            app.hue.advance();
        }
        app.sync_color();
        assert_ne!(app.palette.dynamic(), hue::to_rgb(0, 0.6, 1.0));

        app.apply(Command::Reset);
        assert_eq!(app.hue.hue(), 0);
        assert_eq!(app.palette.dynamic(), hue::to_rgb(0, 0.6, 1.0));
    }

    #[test]
    fn quit_command_sets_flag() {
        let clock = ManualClock::default();
        let mut app = app(&clock);
        app.apply(Command::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn ignore_changes_nothing() {
        let clock = ManualClock::default();
        let mut app = app(&clock);
        app.apply(Command::Start);
        clock.advance(Duration::from_secs(1));
        app.apply(Command::Ignore);
        assert_eq!(app.phase(), Phase::Running);
        assert_eq!(app.timer.elapsed(), Duration::from_secs(1));
    }
}
