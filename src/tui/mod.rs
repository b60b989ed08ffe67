//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, InputMode};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_rules::GameSession;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Sends tracing output to `log_file` so it does not corrupt the screen.
///
/// Call before anything else logs; a subscriber installed earlier wins.
pub fn init_logging(log_file: &Path) -> Result<()> {
    let log = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the terminal UI until the user quits.
pub fn run_tui(session: GameSession) -> Result<()> {
    info!("Starting noughts TUI");

    let mut guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_game(&mut terminal, App::new(session));

    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Puts the terminal back into cooked mode on the main screen when dropped.
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        let mut guard = Self {
            out,
            raw_mode: false,
            alternate_screen: false,
        };
        enable_raw_mode()?;
        guard.raw_mode = true;
        guard.alternate_screen = true;
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode()?;
        }
        if self.alternate_screen {
            self.alternate_screen = false;
            execute!(self.out, LeaveAlternateScreen, DisableMouseCapture)?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

#[instrument(skip_all)]
fn run_game(terminal: &mut Tui, mut app: App) -> Result<()> {
    let mut cells = [Rect::default(); 9];

    while !app.should_quit() {
        terminal.draw(|frame| cells = ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(&cells, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    info!(
        score_one = app.session().player_score(noughts_rules::Seat::One),
        score_two = app.session().player_score(noughts_rules::Seat::Two),
        "Leaving TUI"
    );
    Ok(())
}
