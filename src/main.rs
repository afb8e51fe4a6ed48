// seatboard: console seat reservation board

use std::fs::File;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seatboard::board::SeatBoard;
use seatboard::config::{Cli, Config, UiMode};
use seatboard::console::{self, ConsoleOptions, FAREWELL};
use seatboard::menu::Session;
use seatboard::render::{AnsiColors, TextMarkers};
use seatboard::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?)?;

    init_tracing(&config)?;
    info!(
        seats = config.board.seat_count,
        per_row = config.board.seats_per_row,
        ui = ?config.app.ui,
        "starting seat board"
    );

    let board = SeatBoard::new(config.board.seat_count)?;
    let mut session = Session::new(board);

    match config.app.ui {
        UiMode::Plain => run_console(&mut session, &config)?,
        UiMode::Tui => run_tui(session, &config)?,
    }

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.app.rust_log)
        .with_context(|| format!("invalid log filter '{}'", config.app.rust_log))?;
    let registry = tracing_subscriber::registry().with(filter);

    match (&config.app.log_file, config.app.ui) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        (None, UiMode::Plain) => registry.with(fmt::layer().with_writer(io::stderr)).init(),
        // stderr would draw over the alternate screen
        (None, UiMode::Tui) => {}
    }

    Ok(())
}

fn run_console(session: &mut Session, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let options = ConsoleOptions {
        per_row: config.board.seats_per_row,
        clear_screen: stdout.is_terminal(),
    };
    let input = io::stdin().lock();
    let mut output = stdout.lock();

    if config.app.color {
        console::run(session, input, &mut output, &AnsiColors::default(), &options)?;
    } else {
        console::run(session, input, &mut output, &TextMarkers, &options)?;
    }

    Ok(())
}

fn run_tui(session: Session, config: &Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, config.board.seats_per_row);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "TUI event loop failed");
        return Err(err.into());
    }

    println!("{}", FAREWELL);
    Ok(())
}
