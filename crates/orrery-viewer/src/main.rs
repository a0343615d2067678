//! Orrery - explorable scene viewer
//!
//! Click an object (or press 1-9) to fly to it, then orbit with the mouse
//! or fly freely with WASD / arrow keys and Shift to boost.

mod app;
mod catalog;
mod config;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "Explore a 3D scene with fly-to transitions and free flight")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "orrery.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Orrery v{}", env!("CARGO_PKG_VERSION"));

    if args.write_default_config {
        config::save_default_config(&args.config)?;
        return Ok(());
    }

    let config = config::load_config(&args.config)?;
    info!(
        objects = config.objects.len(),
        transition_ms = config.navigation.transition.duration_ms,
        "Configuration loaded"
    );

    if app::run(config).is_error() {
        bail!("Viewer exited with an error");
    }
    Ok(())
}
