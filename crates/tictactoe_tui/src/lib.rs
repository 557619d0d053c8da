//! Terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`tictactoe::Game`] and turns key presses into game events
//! - **UI**: stateless ratatui rendering of the latest snapshot
//! - **Config**: TOML settings, CLI overrides and logging setup
//! - **Replay**: non-interactive play-through for scripting

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use logging::{LogTarget, init_logging};
pub use replay::{ReplayError, render_text, replay};
pub use terminal::run_interactive;
