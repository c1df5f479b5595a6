//! Pure state transitions: (Phase, Action) → Command, plus the per-tick
//! update phase.
//!
//! Fully testable without a terminal. Requests that make no sense in the
//! current phase come back as `Command::Ignore`.

use crate::timer::Clock;

use super::state::{Action, App, Command, Phase};

/// Input state machine.
///
/// Quit is accepted everywhere. Toggle flips between running and stopped.
/// Reset is honored only while stopped.
pub fn update(phase: Phase, action: Action) -> Command {
    match (phase, action) {
        (_, Action::Quit) => Command::Quit,
        (Phase::Running, Action::ToggleRun) => Command::Stop,
        (Phase::StoppedAtZero | Phase::StoppedNonZero, Action::ToggleRun) => Command::Start,
        (Phase::Running, Action::Reset) => Command::Ignore,
        (Phase::StoppedAtZero | Phase::StoppedNonZero, Action::Reset) => Command::Reset,
    }
}

/// Feed one action through the state machine and apply the result.
pub fn handle_action<C: Clock>(app: &mut App<C>, action: Action) {
    let command = update(app.phase(), action);
    if command == Command::Ignore {
        tracing::debug!(?action, phase = ?app.phase(), "action ignored");
    }
    app.apply(command);
}

/// Update phase: while running, advance the hue one degree and reprogram
/// the dynamic color slot. Frozen otherwise.
pub fn tick<C: Clock>(app: &mut App<C>) {
    if app.timer.is_started() {
        app.hue.advance();
        app.sync_color();
    }
}

// ============================================================================
// TESTS
// ============================================================================
