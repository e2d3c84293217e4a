//! iio-presence: calibrated IIO sensor readings over plain HTTP
//!
//! Reads temperature and relative humidity from `iio:device0` and the
//! accelerometer from `iio:device1`, and answers every HTTP request with a
//! three-line text report.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// === Modules ===

mod config;
mod sensors;
mod server;
mod shared;

// === CLI ===

#[derive(Parser)]
#[command(name = "iio-presence")]
#[command(about = "Serve calibrated IIO sensor readings over plain HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the config file in your editor
    Config,
    /// Print one report to stdout and exit
    Read,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config) => {
            run_config_command()?;
        }
        Some(Commands::Read) => {
            init_tracing();
            run_read_command();
        }
        None => {
            init_tracing();
            run_server().await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();
}

/// Open config file in user's editor
fn run_config_command() -> anyhow::Result<()> {
    let config_path = config::Config::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !config_path.exists() {
        let template = include_str!("../config.toml.example");
        std::fs::write(&config_path, template)?;
        println!("Created config file: {}", config_path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "nano".to_string());

    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()?;

    Ok(())
}

/// Take a single snapshot with the configured reader
fn run_read_command() {
    let reader = config::Config::load().reader();
    print!("{}", sensors::snapshot::Snapshot::take(&reader));
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing::info!("Starting iio-presence server");

    let config = config::Config::load();
    server::run(config.listen, config.reader()).await?;

    tracing::info!("iio-presence server stopped");
    Ok(())
}
