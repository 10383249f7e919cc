//! psalter-dr library - Psalter Data Review module
//!
//! Read-only HTTP JSON API over the decoded psalter corpus: word variants,
//! per-manuscript statistics, pairwise similarity digests, and manuscript
//! metadata. All data is loaded once at startup and served from an
//! immutable in-memory snapshot.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod loader;
pub mod pagination;

use loader::LoadedData;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable data snapshot, loaded once at startup
    pub data: Arc<LoadedData>,
}

impl AppState {
    /// Create new application state
    pub fn new(data: LoadedData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/sheets", get(api::list_sheets))
        .route("/api/sheets/:name/manuscripts", get(api::get_sheet_manuscripts))
        .route("/api/sheets/:name/words", get(api::get_sheet_words))
        .route("/api/statistics/profiles", get(api::get_profiles))
        .route("/api/statistics/rankings", get(api::get_rankings))
        .route("/api/statistics/distribution", get(api::get_distribution))
        .route("/api/similarity/summary", get(api::get_similarity_summary))
        .route("/api/similarity/pairs", get(api::get_similarity_pairs))
        .route("/api/similarity/clusters", get(api::get_clusters))
        .route("/api/manuscripts", get(api::get_manuscript_metadata))
        .route("/api/verses", get(api::list_verses))
        .route("/api/verse", get(api::get_verse))
        .merge(api::health_routes())
        // The dashboard frontend is served from elsewhere
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
