use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use controlbar::sim::{build_simulation, parse_script, run_script, DEMO_SCRIPT};
use controlbar::utils::{load_config, BarShowByMouse, ControlConfig};

/// Controlbar - replay control bar interactions against a simulated player
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Event script to replay (built-in demo when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the hide delay in milliseconds
    #[arg(long, value_name = "MS")]
    hide_bar_time: Option<u64>,

    /// Override the mouse mode (move or enter)
    #[arg(short, long, value_name = "MODE")]
    mode: Option<String>,

    /// Simulated media duration in seconds
    #[arg(long, default_value = "120")]
    duration: f64,

    /// Keep ticking this long after the last step, in milliseconds
    #[arg(long, default_value = "2500")]
    linger: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting controlbar v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => ControlConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => load_config().context("loading configuration")?,
    };
    if let Some(ms) = args.hide_bar_time {
        config.hide_bar_time = ms;
    }
    if let Some(mode) = args.mode {
        config.bar_show_by_mouse = BarShowByMouse::from(mode);
    }
    config.validate()?;

    let source = match &args.script {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEMO_SCRIPT.to_string(),
    };
    let steps = parse_script(&source)?;
    info!("Replaying {} steps", steps.len());

    let (controller, media) = build_simulation(config, args.duration)?;
    let summary = run_script(controller, media, steps, Duration::from_millis(args.linger)).await;

    info!(
        "Done: {} steps, {} media events, {} visibility changes",
        summary.steps, summary.media_events, summary.phase_changes
    );
    Ok(())
}
