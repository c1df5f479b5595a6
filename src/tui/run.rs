//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: each tick waits at most one tick interval for a key,
//! then always updates and draws. Quit is checked at the tick boundary.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::ExecutableCommand;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::config::Config;
use crate::error::Result;
use crate::glyph::GlyphTable;
use crate::timer::{Clock, MonotonicClock};

use super::state::{Action, App};
use super::update::{handle_action, tick};
use super::view::{FrameModel, render};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Bindings are case-insensitive. Returns None for anything else,
/// including key release and repeat events.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('s' | 'S') => Some(Action::ToggleRun),
        KeyCode::Char('r' | 'R') => Some(Action::Reset),
        KeyCode::Char('q' | 'Q') => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// If anything fails after raw mode is on, the terminal is restored
/// before the error is returned.
fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    restore_on_error(enter_tui, restore_terminal)
}

/// Run `enter`; if it fails, run `restore` and return the original error.
fn restore_on_error<T>(
    enter: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    enter().inspect_err(|_| {
        if let Err(e) = restore() {
            tracing::warn!(error = %e, "failed to restore terminal after setup error");
        }
    })
}

fn enter_tui() -> io::Result<Tui> {
    io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to its original cursor and display mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?.execute(Show)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the stopwatch until the user quits.
///
/// Decodes the digit font, takes over the terminal, and runs the loop.
/// The terminal is restored on every way out of the loop.
pub fn run(config: &Config) -> Result<()> {
    let glyphs = GlyphTable::builtin()?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(MonotonicClock::new(), config);
    tracing::info!(tick = ?config.tick, "stopwatch started");

    let result = event_loop(&mut terminal, &mut app, &glyphs, config.tick);

    let restored = restore_terminal();
    if let Err(e) = &restored {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    tracing::info!(elapsed = ?app.timer.elapsed(), "stopwatch stopped");

    result?;
    restored?;
    Ok(())
}

/// Input, update, draw; once per tick until quit.
fn event_loop<C: Clock>(
    terminal: &mut Tui,
    app: &mut App<C>,
    glyphs: &GlyphTable,
    interval: Duration,
) -> Result<()> {
    while !app.should_quit {
        let action = poll_action(interval)?;
        step(terminal, app, glyphs, action, wall_clock())?;
    }
    Ok(())
}

/// One tick: apply the polled action, advance the hue, draw the frame.
fn step<B, C>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
    glyphs: &GlyphTable,
    action: Option<Action>,
    wall: Duration,
) -> io::Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    C: Clock,
{
    if let Some(action) = action {
        handle_action(app, action);
    }

    tick(app);

    let model = FrameModel::capture(app, wall);
    terminal
        .draw(|frame| render(&model, glyphs, frame))
        .map_err(io::Error::other)?;
    Ok(())
}

/// Wait up to `timeout` for one key and map it.
///
/// Resize, mouse and focus events are dropped; the next frame picks up
/// the new size on its own.
fn poll_action(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Time since the Unix epoch, for the separator blink.
fn wall_clock() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================
