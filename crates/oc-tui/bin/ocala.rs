//! The Story of Ocala
//!
//! Main entry point for the game.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oc_core::world::GameOptions;
use oc_core::{GameLoop, GameLoopResult, GameState};
use oc_tui::App;

/// The Story of Ocala, a tile-based terminal RPG
#[derive(Parser, Debug)]
#[command(name = "ocala")]
#[command(author, version, about = "The Story of Ocala - Explore, fight, level up!", long_about = None)]
struct Args {
    /// Options file (OPTIONS=name:Adrian,seed:42,...)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// RNG seed, for reproducible games
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Pause between battle rounds, in milliseconds
    #[arg(long = "pace-ms")]
    pace_ms: Option<u64>,

    /// Write diagnostics to this file (filtered by RUST_LOG)
    #[arg(long = "log")]
    log: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let options = load_options(&args)?;
    if let Some(path) = &args.log {
        init_logging(path)?;
    }
    let state = GameState::new(options).map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut app = App::new(Terminal::new(CrosstermBackend::new(stdout))?);

    let mut game = GameLoop::new(state);
    let result = game.run(&mut app);

    // Restore terminal before reporting anything, errors included
    let mut terminal = app.into_terminal();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let state = game.state();
    match result? {
        GameLoopResult::PlayerDied(cause) => {
            println!("{} was {}.", state.player.base.name, cause);
        }
        GameLoopResult::PlayerQuit => {
            println!("Goodbye, {}.", state.player.base.name);
        }
        GameLoopResult::Continue => {}
    }
    println!("{}", state.status_line());
    Ok(())
}

/// Options file first, then command-line overrides
fn load_options(args: &Args) -> io::Result<GameOptions> {
    let mut options = match &args.config {
        Some(path) => GameOptions::load_from_file(path).map_err(io::Error::other)?,
        None => GameOptions::default(),
    };
    if let Some(name) = &args.name {
        options.name = name.clone();
    }
    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    if let Some(pace) = args.pace_ms {
        options.battle_pace_ms = pace;
    }
    Ok(options)
}

/// Send tracing output to a file; the terminal belongs to the game
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ocala=info,oc_core=info")),
        )
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}
