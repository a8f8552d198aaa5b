//! Song API routes

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::debug;

use super::metrics::record_title_lookup;
use super::state::{ServerState, SharedCatalog};
use crate::catalog::{CatalogError, PageRequest};

// Raw string parameters: a malformed page or size must fall back to the
// defaults instead of being rejected by the extractor.
type RawQuery = Query<HashMap<String, String>>;

/// GET /songs/all - The whole dataset, in row order
async fn get_all_songs(State(catalog): State<SharedCatalog>) -> Response {
    Json(catalog.get_all()).into_response()
}

/// GET /songs?page=&size= - One page of songs plus pagination metadata
async fn get_songs_page(
    State(catalog): State<SharedCatalog>,
    Query(params): RawQuery,
) -> Response {
    let request = PageRequest::from_raw(
        params.get("page").map(String::as_str),
        params.get("size").map(String::as_str),
    );
    debug!("Serving songs page {:?}", request);
    Json(catalog.get_page(request)).into_response()
}

/// GET /songs/title?title= - Single song by exact, case-insensitive title
async fn get_song_by_title(
    State(catalog): State<SharedCatalog>,
    Query(params): RawQuery,
) -> Response {
    let lookup = catalog.get_by_title(params.get("title").map(String::as_str));
    match lookup {
        Ok(song) => {
            record_title_lookup("found");
            Json(song).into_response()
        }
        Err(err) => {
            let result = match err {
                CatalogError::NotFound => "not_found",
                _ => "rejected",
            };
            record_title_lookup(result);
            err.into_response()
        }
    }
}

pub fn make_songs_routes(state: ServerState) -> Router {
    Router::new()
        .route("/songs", get(get_songs_page))
        .route("/songs/all", get(get_all_songs))
        .route("/songs/title", get(get_song_by_title))
        .with_state(state)
}
