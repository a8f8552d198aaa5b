//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Health
    // ========================================================================

    pub async fn get_health(&self) -> Response {
        self.get("/health", &[]).await
    }

    // ========================================================================
    // Songs Endpoints
    // ========================================================================

    pub async fn get_all_songs(&self) -> Response {
        self.get("/songs/all", &[]).await
    }

    /// GET /songs with raw query values, so tests can send malformed ones
    pub async fn get_songs_page(&self, page: Option<&str>, size: Option<&str>) -> Response {
        let mut query = vec![];
        if let Some(page) = page {
            query.push(("page", page));
        }
        if let Some(size) = size {
            query.push(("size", size));
        }
        self.get("/songs", &query).await
    }

    pub async fn get_song_by_title(&self, title: &str) -> Response {
        self.get("/songs/title", &[("title", title)]).await
    }

    pub async fn get_song_without_title(&self) -> Response {
        self.get("/songs/title", &[]).await
    }
}
