//! HTTP API handlers for psalter-dr

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub mod health;
pub mod manuscripts;
pub mod sheets;
pub mod similarity;
pub mod statistics;

pub use health::health_routes;
pub use manuscripts::{get_manuscript_metadata, get_verse, list_verses};
pub use sheets::{get_sheet_manuscripts, get_sheet_words, list_sheets};
pub use similarity::{get_clusters, get_similarity_pairs, get_similarity_summary};
pub use statistics::{get_distribution, get_profiles, get_rankings};

/// API errors, rendered as `{"error": message}` JSON bodies
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
