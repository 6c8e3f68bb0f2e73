//! eventdeck - Entry Point

use clap::Parser;
use eventdeck::model::AppError;
use eventdeck::source::CatalogSource;
use eventdeck::state::{AppState, DiscoveryState, Focus};
use eventdeck::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// eventdeck - browse and search fitness events in the terminal
#[derive(Parser, Debug)]
#[command(name = "eventdeck")]
#[command(version)]
#[command(about = "Paged carousel and live search over an event catalog")]
pub struct Args {
    /// Path to a JSON event catalog (uses the bundled sample if omitted)
    pub catalog: Option<PathBuf>,

    /// Cards per carousel page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = eventdeck::config::load_config_with_precedence(args.config.clone())
            .map_err(AppError::from)?;
        let merged = eventdeck::config::merge_config(config_file);
        let with_env = eventdeck::config::apply_env_overrides(merged);

        let page_size_override = args
            .page_size
            .map(usize::try_from)
            .transpose()
            .map_err(|e| format!("--page-size: {e}"))?;

        eventdeck::config::apply_cli_overrides(with_env, page_size_override, args.catalog.clone())
    };

    eventdeck::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let catalog = CatalogSource::detect(config.catalog_path.clone())
        .load()
        .map_err(AppError::from)?;

    let discovery = DiscoveryState::new(catalog, config.page_size)
        .map_err(AppError::from)?
        .with_wheel_threshold(config.wheel_threshold);

    let mut app_state = AppState::new(discovery).with_heading(config.heading);
    if let Some(query) = args.search {
        app_state.discovery.set_query(query);
        app_state.focus = Focus::Search;
    }

    let colors = ColorConfig::from_env_and_args(args.no_color);
    eventdeck::view::run_with_state(app_state, colors)?;

    Ok(())
}
