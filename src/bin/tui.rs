//! Screenwall TUI (Terminal User Interface)
//!
//! A terminal wall of screens: navigate tiles with the keyboard or mouse and
//! open any of them fullscreen.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use screenwall::tui::{ui::ui, App};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Event poll interval, also the smooth scroll step
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "screenwall", version, about = "A grid of screens in your terminal")]
struct Args {
    /// Wall manifest (JSON)
    #[arg(default_value = "wall.json")]
    manifest: PathBuf,

    /// Log file; the terminal itself is taken by the UI
    #[arg(long, default_value = "screenwall.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    screenwall::init_with_log_file(&args.log_file)
        .with_context(|| format!("Failed to open log file {}", args.log_file.display()))?;

    // Load before touching the terminal so manifest errors print normally
    let mut app = App::from_manifest(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI loop failed: {}", err);
    }
    res.context("TUI loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.resize(terminal.size()?);
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => app.handle_key(key, now),
                Event::Mouse(mouse) => app.handle_mouse(mouse, now),
                Event::Resize(width, height) => {
                    app.resize(ratatui::layout::Rect::new(0, 0, width, height));
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
