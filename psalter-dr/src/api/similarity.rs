//! Pairwise similarity API

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use psalter_common::similarity::{MatrixStats, PairwiseSummary, SimilarityPair};

use crate::AppState;

/// Pair distribution digest plus the upstream matrix stats
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: PairwiseSummary,
    pub stats: MatrixStats,
}

/// Top-10 most and least similar pair lists
#[derive(Debug, Serialize)]
pub struct PairsResponse {
    pub most_similar: Vec<SimilarityPair>,
    pub least_similar: Vec<SimilarityPair>,
}

/// Cluster groups at the fixed >= 98% threshold
#[derive(Debug, Serialize)]
pub struct ClustersResponse {
    pub threshold: f64,
    pub clusters: Vec<Vec<String>>,
}

/// GET /api/similarity/summary
pub async fn get_similarity_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        summary: state.data.digests.pairwise.clone(),
        stats: state.data.similarity.stats,
    })
}

/// GET /api/similarity/pairs
pub async fn get_similarity_pairs(State(state): State<AppState>) -> Json<PairsResponse> {
    Json(PairsResponse {
        most_similar: state.data.digests.most_similar.clone(),
        least_similar: state.data.digests.least_similar.clone(),
    })
}

/// GET /api/similarity/clusters
pub async fn get_clusters(State(state): State<AppState>) -> Json<ClustersResponse> {
    Json(ClustersResponse {
        threshold: psalter_common::similarity::CLUSTER_THRESHOLD,
        clusters: state.data.digests.clusters.clone(),
    })
}
