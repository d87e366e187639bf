use anyhow::{Context, Result};
use clap::Parser;
use plantmap::{config, data::Dataset, data::PlantId, tui};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "plantmap=info";

#[derive(Parser, Debug)]
#[command(name = "plantmap")]
#[command(about = "Terminal dashboard for industrial plants on a map and their projects")]
#[command(version)]
struct Args {
    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Path to a JSON dataset (plants and projects) instead of the built-in one
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// Start with the projects of this plant selected
    #[arg(long, short)]
    plant: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging()?;

    if args.init {
        let path = match args.config {
            Some(path) => path,
            None => config::default_config_path()?,
        };
        config::write_default(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = config::load(args.config.as_deref())?;
    let data_path = args.data.or_else(|| config.data.path.clone());
    let dataset = Dataset::load(data_path.as_deref())?;

    // Run TUI
    tui::run(config, dataset, args.plant.map(PlantId))
}

/// Log to a file: the terminal belongs to the TUI.
fn init_logging() -> Result<()> {
    let path = config::default_log_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// `RUST_LOG` directives when set and valid, `plantmap=info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "plantmap=info");
        assert_eq!(log_filter(Some("  ")).to_string(), "plantmap=info");
    }

    #[test]
    fn test_rust_log_overrides_default() {
        assert_eq!(log_filter(Some("plantmap=debug")).to_string(), "plantmap=debug");

        let filter = log_filter(Some("warn,plantmap=trace")).to_string();
        assert!(filter.contains("plantmap=trace"), "{}", filter);
        assert!(!filter.contains("plantmap=info"), "{}", filter);
    }
}
