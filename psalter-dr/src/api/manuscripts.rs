//! Manuscript metadata and verse translation API

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use psalter_common::metadata::{ManuscriptMetadata, VerseTranslation};

use crate::api::ApiError;
use crate::AppState;

/// Query parameters for verse lookup; verse ids contain spaces and commas
/// ("Ps 6,2") so they travel as a query parameter rather than a path segment
#[derive(Debug, Deserialize)]
pub struct VerseQuery {
    pub id: String,
}

/// GET /api/manuscripts
///
/// Full metadata map plus translation-family grouping, passed through
/// unchanged from the upstream resource.
pub async fn get_manuscript_metadata(State(state): State<AppState>) -> Json<ManuscriptMetadata> {
    Json(state.data.metadata.clone())
}

/// GET /api/verses
///
/// All known verse identifiers, sorted.
pub async fn list_verses(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.data.verses.keys().cloned().collect())
}

/// GET /api/verse?id=Ps+6,2
pub async fn get_verse(
    State(state): State<AppState>,
    Query(query): Query<VerseQuery>,
) -> Result<Json<VerseTranslation>, ApiError> {
    state
        .data
        .verses
        .get(&query.id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("verse '{}'", query.id)))
}
