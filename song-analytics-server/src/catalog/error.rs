use thiserror::Error;

/// Errors produced while loading the dataset or answering song queries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("{0} query parameter is required")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Song not found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// True for errors caused by the request rather than by the loaded data.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingArgument(_) | CatalogError::InvalidArgument(_)
        )
    }
}
