mod app;
mod config;
mod job;
mod report;
mod schedule;
mod source;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // The terminal belongs to the TUI, so logs go to a file.
    let _log_guard = init_logging()?;

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let snapshot = if args.len() > 2 && args[1] == "--file" {
        Some(PathBuf::from(&args[2]))
    } else {
        None
    };

    let config = Config::load(None)?;
    let mut app = App::new(config, snapshot);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("atom-jobs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log dir: {:?}", log_dir))?;

    let appender = tracing_appender::rolling::never(&log_dir, "atom-jobs.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                        break;
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
                    KeyCode::Left | KeyCode::Char('h') => app.select_prev_source(),
                    KeyCode::Right | KeyCode::Char('l') => app.select_next_source(),
                    KeyCode::Enter => app.load_selected(),
                    KeyCode::Tab => app.next_view(),
                    KeyCode::Char('r') => app.refresh(),
                    KeyCode::Esc => app.message = None,
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
