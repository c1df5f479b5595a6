//! TUI module for the full-screen stopwatch.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: app model and the input state machine's types
//! - `update`: pure transitions and the per-tick update phase
//! - `view`: pure rendering into a cell buffer
//! - `theme`: color slots and pairs
//! - `run`: effects (terminal, input, loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
