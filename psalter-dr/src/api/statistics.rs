//! Per-manuscript statistics API
//!
//! All responses come from digests precomputed at load time over the
//! aggregate all-psalms sheet.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use psalter_common::stats::{Distribution, ManuscriptProfile};

use crate::AppState;

/// Top-10 ranking lists by variation rate
#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub most_innovative: Vec<ManuscriptProfile>,
    pub most_conservative: Vec<ManuscriptProfile>,
}

/// GET /api/statistics/profiles
///
/// One profile per manuscript, in the aggregate sheet's declared order.
pub async fn get_profiles(State(state): State<AppState>) -> Json<Vec<ManuscriptProfile>> {
    Json(state.data.digests.profiles.clone())
}

/// GET /api/statistics/rankings
pub async fn get_rankings(State(state): State<AppState>) -> Json<RankingsResponse> {
    Json(RankingsResponse {
        most_innovative: state.data.digests.most_innovative.clone(),
        most_conservative: state.data.digests.most_conservative.clone(),
    })
}

/// GET /api/statistics/distribution
///
/// Overall four-category change distribution across all manuscripts.
pub async fn get_distribution(State(state): State<AppState>) -> Json<Distribution> {
    Json(state.data.digests.distribution)
}
