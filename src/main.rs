//! Rhymefinder - Entry Point

use clap::Parser;
use rhymefinder::model::FilterOption;
use std::path::PathBuf;
use tracing::info;

/// Rhymefinder - search song lyrics by word
#[derive(Parser, Debug)]
#[command(name = "rhymefinder")]
#[command(version)]
#[command(about = "TUI word search over song lyrics")]
pub struct Args {
    /// Start with this search query
    #[arg(short, long)]
    pub search: Option<String>,

    /// Initial part-of-speech filter
    #[arg(long, value_parser = ["all", "noun", "verb", "adjective"])]
    pub filter: Option<String>,

    /// Minimum scrollbar thumb length in rows
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub min_thumb: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The `--filter` value as a filter option.
    fn filter_option(&self) -> Option<FilterOption> {
        self.filter.as_deref().and_then(|f| f.parse().ok())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rhymefinder::config::load_config_with_precedence(args.config.clone())?;
        let merged = rhymefinder::config::merge_config(config_file);
        let with_env = rhymefinder::config::apply_env_overrides(merged);
        rhymefinder::config::apply_cli_overrides(with_env, args.filter_option(), args.min_thumb)
    };

    rhymefinder::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let cli_args = rhymefinder::view::CliArgs::new(args.search.unwrap_or_default(), args.no_color);

    rhymefinder::view::run_with_config(&config, cli_args)?;

    Ok(())
}
