//! codetalk Entry Point
//!
//! Usage:
//!   codetalk [OPTIONS]
//!
//! Options:
//!   --config <FILE>     Configuration file (default: ~/.config/codetalk/config.toml)
//!   --tick-ms <MS>      Scheduler period in milliseconds
//!   --no-sound          Silence the typing bell
//!   --log-file <PATH>   Where logs are written
//!
//! Logs never go to the terminal the lesson draws on. Set `RUST_LOG` to
//! change the level, e.g. `RUST_LOG=scene_core=debug codetalk`.

use std::fs;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scene_core::config::{default_config_path, load_config_from_path};
use scene_core::ConfigOverrides;

/// codetalk - an interactive lesson in the terminal
#[derive(Parser, Debug)]
#[command(name = "codetalk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "CODETALK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scheduler period in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Disable typing sounds
    #[arg(long)]
    no_sound: bool,

    /// Log file path
    #[arg(short = 'l', long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(ms) = self.tick_ms {
            overrides = overrides.with_tick_ms(ms);
        }
        if self.no_sound {
            overrides = overrides.with_sound_enabled(false);
        }
        if let Some(path) = &self.log_file {
            overrides = overrides.with_log_file(path.clone());
        }
        overrides
    }
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("codetalk")
        .join("codetalk.log")
}

fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {parent:?}"))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {path:?}"))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file),
        )
        .with(filter)
        .init();
    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config_from_path(args.config.clone().or_else(default_config_path))?;
    args.overrides().apply(&mut config);
    config.validate()?;

    let log_path = config.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;
    info!(source = ?config.source(), log = %log_path.display(), "configuration loaded");

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: codetalk requires a terminal (TTY)");
        eprintln!();
        eprintln!("Run it interactively, or over SSH with -t.");
        std::process::exit(1);
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = codetalk_tui::run(&config, terminal).await;

    restore_terminal();
    let mut terminal = result?;
    terminal.show_cursor()?;

    info!("goodbye");
    Ok(())
}
