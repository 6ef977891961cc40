//! Push-up counter: replays recorded body landmark streams and counts reps.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use pushup_counter::app::{InputSource, ReplayApp, ReplayConfig};
use pushup_counter::config::{Config, EXAMPLE_CONFIG};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON Lines landmark stream to replay ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Feed every frame to the counter, even poorly tracked ones
    #[arg(long)]
    no_quality_gate: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Load configuration if provided
    let settings = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    settings.validate().context("Invalid configuration")?;

    let config = ReplayConfig {
        input: InputSource::from_arg(&args.input),
        quality_gate: !args.no_quality_gate,
    };

    let mut app = ReplayApp::new(config, &settings);
    let summary = app.run().context("Replay failed")?;
    info!("Total reps: {}", summary.reps);

    Ok(())
}
