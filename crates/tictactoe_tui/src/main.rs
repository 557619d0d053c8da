//! Tic-tac-toe with time travel - terminal front end.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{
    Cli, Command, LogTarget, TuiConfig, init_logging, render_text, replay, run_interactive,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.log_file {
        config = config.with_log_file(path);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_logging(&config, LogTarget::File)?;
            run_interactive(&config)
        }
        Command::Replay { cells, json } => {
            init_logging(&config, LogTarget::Stderr)?;
            info!(moves = cells.len(), "Replaying cells");
            let snapshot = replay(&cells, *config.sort_order())?;
            if json {
                let out = serde_json::to_string_pretty(&snapshot)
                    .context("Failed to serialize snapshot")?;
                println!("{}", out);
            } else {
                println!("{}", render_text(&snapshot));
            }
            Ok(())
        }
    }
}
