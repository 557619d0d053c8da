//! Interactive terminal session.

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip(config))]
pub fn run_interactive(config: &TuiConfig) -> Result<()> {
    info!("Starting interactive session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_restore(
        execute!(stdout, EnterAlternateScreen).map_err(anyhow::Error::from),
        disable_raw_mode,
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(Terminal::new(backend).map_err(anyhow::Error::from), || {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)
    })?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Session ended");
    res
}

/// Runs `restore` when a setup step failed, then hands the result back.
fn or_restore<T>(result: Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if let Err(e) = &result {
        warn!(error = %e, "Terminal setup failed, restoring");
        restore()?;
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = or_restore(Err(anyhow::anyhow!("no tty")), || {
            restored.set(true);
            Ok(())
        });
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let res = or_restore(Ok(7), || {
            restored.set(true);
            Ok(())
        });
        assert_eq!(res.expect("setup succeeded"), 7);
        assert!(!restored.get());
    }
}
