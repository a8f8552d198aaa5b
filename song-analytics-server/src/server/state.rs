use axum::extract::FromRef;

use crate::catalog::SongCatalog;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The catalog never changes after startup, so handlers share it without a lock.
pub type SharedCatalog = Arc<SongCatalog>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: SharedCatalog,
    pub hash: String,
}

impl FromRef<ServerState> for SharedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
