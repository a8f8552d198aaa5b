use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use song_analytics_server::config::{AppConfig, CliConfig, FileConfig};
use song_analytics_server::server::metrics;
use song_analytics_server::{load_catalog, run_server, RequestsLoggingLevel, SongCatalog};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the column-oriented JSON dataset. Defaults to data/playlist.json.
    #[clap(long, value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping), 0 disables it.
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of song responses in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the dashboard directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Validate the dataset, print a report and exit.
    #[clap(long)]
    pub check_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        dataset_path: cli_args.dataset.or_else(SongCatalog::infer_path),
        bind_address: cli_args.bind_address,
        port: cli_args.port,
        metrics_port: cli_args.metrics_port,
        logging_level: cli_args.logging_level,
        content_cache_age_sec: cli_args.content_cache_age_sec,
        frontend_dir_path: cli_args.frontend_dir_path,
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    let catalog = load_catalog(&app_config.dataset_path)?;

    if cli_args.check_only {
        print!("{}", catalog.check_report());
        return Ok(());
    }

    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::init_catalog_metrics(catalog.get_songs_count());

    run_server(Arc::new(catalog), app_config.server_config()).await
}
