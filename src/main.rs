use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use deckhand::core::config::{self, CliOverrides};
use deckhand::core::deck::Deck;
use deckhand::tui;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "deckhand", about = "Terminal slide presenter")]
struct Args {
    /// Markdown deck with `---` separated slides (defaults to the built-in talk)
    #[arg(short, long, value_name = "PATH")]
    deck: Option<PathBuf>,

    /// Slide to open on (1-based)
    #[arg(short, long, value_name = "N")]
    start: Option<usize>,

    /// Start auto-advancing at launch, SECS per slide (10 when bare)
    #[arg(short, long, value_name = "SECS", num_args = 0..=1, default_missing_value = "10")]
    auto: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to deckhand.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("deckhand.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().inspect_err(|e| error!("{e}"))?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            deck: args.deck,
            start: args.start,
            auto_advance_secs: args.auto,
        },
    );

    let deck = match &resolved.deck_file {
        Some(path) => Deck::load(path),
        None => Deck::builtin(),
    }
    .inspect_err(|e| error!("Failed to load deck: {e}"))?;

    info!(
        "Deckhand starting: deck '{}' ({} slides), platform '{}'",
        deck.name,
        deck.len(),
        resolved.platform
    );

    tui::run(deck, resolved)?;
    Ok(())
}
