//! `hotseat`: two players, one terminal.

use clap::Parser;
use hotseat_cli::config::{Config, GlyphStyle};
use hotseat_cli::session::{self, SessionOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player chess in the terminal")]
struct Cli {
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    letters: bool,
    /// Print one JSON snapshot per line instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(Config::default_path);
    let config = match Config::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut display = config.display;
    if cli.letters {
        display.glyphs = GlyphStyle::Letters;
    }
    let options = SessionOptions {
        display,
        json: cli.json,
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    match session::run(stdin.lock(), &mut stdout, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("session failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
