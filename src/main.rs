use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};
use torus_snake::config::{FRAME_INTERVAL_MS, LOG_LEVEL};
use torus_snake::error::AppError;
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, poll_input};
use torus_snake::session::Session;
use torus_snake::settings::Settings;
use torus_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON settings file; missing fields keep their defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Run without a terminal UI and print one JSON snapshot per tick.
    #[arg(long)]
    headless: bool,

    /// Number of ticks to simulate in headless mode.
    #[arg(long, default_value_t = 100, requires = "headless")]
    ticks: u64,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("torus-snake: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if cli.headless {
        run_headless(&settings, cli.seed, cli.ticks)
    } else {
        run_terminal(settings, cli.seed)
    }
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(LOG_LEVEL, Config::default(), file)?;
    info!("logging to {}", path.display());
    Ok(())
}

fn run_headless(settings: &Settings, seed: Option<u64>, ticks: u64) -> Result<(), AppError> {
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(settings, seed),
        None => GameState::new(settings),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..ticks {
        state.advance();
        serde_json::to_writer(&mut out, &state.snapshot())?;
        writeln!(out)?;
        if state.is_game_over() {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_terminal(settings: Settings, seed: Option<u64>) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut session = Session::new(settings, seed);
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(session.state())?;

        if let Some(input) = poll_input(frame_interval)? {
            match input {
                GameInput::Quit => break,
                GameInput::Restart if session.state().is_game_over() => session.restart(),
                GameInput::Direction(direction) if !session.state().is_game_over() => {
                    let _ = session.steer(direction);
                }
                GameInput::Restart | GameInput::Direction(_) => {}
            }
        }

        let now = Instant::now();
        let _ = session.frame(now.duration_since(last_frame));
        last_frame = now;
    }

    info!("quit with score {}", session.state().score());
    Ok(())
}
