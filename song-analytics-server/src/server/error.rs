//! JSON error responses for song queries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::metrics::record_error;
use crate::catalog::CatalogError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::MissingArgument(_) | CatalogError::InvalidArgument(_) => {
                StatusCode::BAD_REQUEST
            }
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::MalformedDataset(_) | CatalogError::Io(_) | CatalogError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            CatalogError::MissingArgument(_) => "missing_argument",
            CatalogError::InvalidArgument(_) => "invalid_argument",
            CatalogError::NotFound => "not_found",
            CatalogError::MalformedDataset(_) => "malformed_dataset",
            CatalogError::Io(_) => "io",
            CatalogError::Json(_) => "json",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        record_error(self.error_type(), "songs");

        let message = if status.is_server_error() {
            error!("Failed to serve song query: {}", self);
            "Internal Server Error".to_owned()
        } else {
            debug!("Rejected song query: {}", self);
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
