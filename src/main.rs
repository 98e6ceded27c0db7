use std::error::Error;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use ollama_jan_sync::config::Settings;
use ollama_jan_sync::sync::{self, SyncOptions};

/// Sync Ollama models to Jan.
#[derive(Parser, Debug)]
#[command(name = "ollama-jan-sync", version, about)]
struct Cli {
    /// The model(s) to sync. Use regexp to sync matched ones and empty to sync all.
    #[arg(short = 'm', long = "model", default_value = "")]
    model: String,
}

/// Entry point: load settings, set up file logging, run one sync and print
/// the summary.
///
/// # Errors
/// Returns an error if configuration is invalid, the filter does not compile
/// or Ollama cannot be listed. Per-model failures do not affect the exit code.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    // Load settings first
    let settings = Settings::new()?;

    std::fs::create_dir_all(&settings.logging.directory)?;
    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        &settings.logging.directory,
        "ollama-jan-sync",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        // Disable ANSI colors for cleaner log files
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_max_level(settings.log_level())
        .init();

    info!("ollama-jan-sync starting");
    info!("Ollama host: {}", settings.ollama.host);
    info!("Jan models directory: {}", settings.jan.directory.display());
    if !cli.model.is_empty() {
        info!("Model filter: {}", cli.model);
    }

    let options = SyncOptions::from_settings(&settings);
    let report = sync::sync_models(&options, &cli.model).await?;
    sync::display_sync_report(&report);

    Ok(())
}
