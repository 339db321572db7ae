//! Terminal Pong: one human paddle against a tracking computer paddle

mod app;
mod input;
mod render;
mod terminal;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pong", version, about = "Play Pong against the computer in your terminal")]
struct Cli {
    /// TOML file overriding the default game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}"))?,
    };

    // The terminal belongs to the game, so logs never go to stdout/stderr
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        terminal::restore(true);
        tracing::error!(%info, "panic");
        default_hook(info);
    }));

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("couldn't load config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let config = load_config(cli.config.as_deref())?;
    tracing::info!(
        width = config.arena_width,
        height = config.arena_height,
        tick_rate = config.tick_rate,
        "starting"
    );

    let mut guard = terminal::TerminalGuard::enter().context("couldn't initialize terminal")?;
    let mut app = app::App::new(config, guard.enhanced);
    app.run(&mut guard.terminal)
}
