use clap::Parser;
use log::error;
use std::path::PathBuf;

use energy_sim::init_config::AppConfig;

/// Interactive potential/kinetic energy calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file (defaults to ./energy_sim.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// JSON file the inputs are mirrored to
    #[arg(long)]
    settings: Option<PathBuf>,
    /// JSON file saved simulations are loaded from and written back to
    #[arg(long)]
    snapshots: Option<PathBuf>,
    /// Number of samples kept for the energy chart
    #[arg(long)]
    chart_capacity: Option<usize>,
    /// Do not touch the disk for settings
    #[arg(long, default_value_t = false)]
    memory: bool,
}

fn load_config(args: &Args) -> AppConfig {
    let loaded = match &args.config {
        Some(path) => AppConfig::load_from_file(path).map(Some),
        None => AppConfig::load_default(),
    };
    let mut config = match loaded {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            error!("{}; using defaults", e);
            AppConfig::default()
        }
    };

    if let Some(path) = &args.settings {
        config.storage.settings_path = Some(path.clone());
    }
    if let Some(path) = &args.snapshots {
        config.storage.snapshot_path = Some(path.clone());
    }
    if let Some(capacity) = args.chart_capacity {
        config.chart.capacity = Some(capacity);
    }
    if args.memory {
        config.storage.memory_only = true;
    }
    config
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args);

    if let Err(e) = energy_sim::app::run(config) {
        error!("Console session failed: {}", e);
        std::process::exit(1);
    }
}
