//! Mushaf main entry point
//!
//! Command-line interface for the Mushaf terminal Quran reader.

use clap::Parser;
use mushaf::config::{load_config_with_hash, validate, Config};
use mushaf::output::display;
use mushaf::reader::{parse_reference, run_session, ReaderController};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mushaf: a terminal Quran reader
///
/// Mushaf lists the chapters of the Quran and reads verse text, translation,
/// transliteration, and recitation audio from a public REST API. Without a
/// mode flag it starts an interactive reading session.
#[derive(Parser, Debug)]
#[command(name = "mushaf")]
#[command(version)]
#[command(about = "A terminal Quran reader", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the chapter list and exit
    #[arg(long, conflicts_with = "read")]
    chapters: bool,

    /// Fetch a single verse reference (e.g. 2:255) and exit
    #[arg(long, value_name = "REF", conflicts_with = "chapters")]
    read: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            let cfg = Config::default();
            validate(&cfg)?;
            cfg
        }
    };

    // Handle different modes
    if cli.chapters {
        handle_chapters(&config).await?;
    } else if let Some(reference) = &cli.read {
        handle_read(&config, reference).await?;
    } else {
        handle_session(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mushaf=warn"),
            1 => EnvFilter::new("mushaf=info,warn"),
            2 => EnvFilter::new("mushaf=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --chapters mode: prints the chapter list and exits
async fn handle_chapters(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let controller = ReaderController::new(config).await?;
    let chapters: Vec<_> = controller.chapters().iter().collect();
    println!("{}", display::format_chapter_list(&chapters, 0));
    Ok(())
}

/// Handles the --read mode: fetches one verse reference and exits
async fn handle_read(config: &Config, reference: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (chapter, verse) = parse_reference(reference)
        .ok_or_else(|| format!("Invalid verse reference '{}', expected C:V (e.g. 2:255)", reference))?;

    let mut controller = ReaderController::new(config).await?;
    controller.goto(chapter, verse).await?;

    if let Some(bundle) = controller.current() {
        println!(
            "{}",
            display::format_verse(
                bundle,
                controller.theme(),
                controller.can_rewind(),
                controller.can_advance()
            )
        );
    }

    Ok(())
}

/// Handles the default mode: interactive reading session
async fn handle_session(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = ReaderController::new(config).await?;
    run_session(&mut controller).await?;
    Ok(())
}
