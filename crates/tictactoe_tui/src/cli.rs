//! Command-line interface for tictactoe_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Tic-tac-toe with time travel, in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a sequence of cells and print the final position
    Replay {
        /// Cell indices (0-8, row-major) in the order they are clicked
        cells: Vec<usize>,

        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
