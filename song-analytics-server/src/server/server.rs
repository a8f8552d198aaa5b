use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use tracing::{error, info};

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::{
    http_cache, log_requests, make_songs_routes, metrics::metrics_handler, state::*, ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub uptime: String,
    pub hash: String,
    pub songs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        status: "online",
        message: "Song Analytics API is running",
        version: env!("CARGO_PKG_VERSION"),
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        songs: state.catalog.get_songs_count(),
    };
    Json(stats)
}

impl ServerState {
    fn new(config: ServerConfig, catalog: SharedCatalog) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(config: ServerConfig, catalog: SharedCatalog) -> Router {
    let state = ServerState::new(config.clone(), catalog);

    let songs_routes: Router = make_songs_routes(state.clone()).layer(
        middleware::from_fn_with_state(config.content_cache_age_sec, http_cache),
    );

    let health_routes: Router = Router::new()
        .route("/health", get(home))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)).with_state(state.clone()),
    };

    home_router
        .merge(health_routes)
        .merge(songs_routes)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(state, log_requests))
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

pub async fn run_server(catalog: SharedCatalog, config: ServerConfig) -> Result<()> {
    let app = make_app(config.clone(), catalog);

    let address = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Could not bind to {}", address))?;

    if let Some(metrics_port) = config.metrics_port {
        let metrics_address = format!("{}:{}", config.bind_address, metrics_port);
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_address)
            .await
            .with_context(|| format!("Could not bind metrics to {}", metrics_address))?;
        tokio::spawn(async move {
            if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
                error!("Metrics server stopped: {}", err);
            }
        });
        info!("Metrics available at {}/metrics", metrics_address);
    }

    info!("Ready to serve at {}!", address);
    Ok(axum::serve(listener, app).await?)
}
