//! Pairwise similarity analysis over the externally computed matrix
//!
//! The similarity matrix, distance matrix and linkage matrix are produced by
//! the upstream alignment pipeline and consumed read-only. All analysis here
//! enumerates the upper triangle once (`i < j` in canonical manuscript
//! order) so each unordered pair is counted exactly once.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How many entries the pair rankings carry
const RANKING_SIZE: usize = 10;

/// Fixed threshold for cluster extraction, in percent
pub const CLUSTER_THRESHOLD: f64 = 98.0;

/// Similarity resource as shipped by the upstream pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityData {
    /// Canonical manuscript order; indexes the matrices
    pub manuscripts: Vec<String>,
    /// Symmetric percentage matrix in [0, 100]; diagonal implicitly 100
    pub similarity_matrix: Vec<Vec<f64>>,
    pub distance_matrix: Vec<Vec<f64>>,
    /// Hierarchical clustering linkage rows, passed through for rendering
    pub linkage_matrix: Vec<Vec<f64>>,
    pub stats: MatrixStats,
}

/// Corpus-level counts attached to the similarity resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatrixStats {
    pub num_manuscripts: usize,
    pub num_words: usize,
}

impl SimilarityData {
    /// Validate the similarity matrix dimensions against the declared
    /// manuscript list.
    ///
    /// A resource declaring N manuscripts but shipping a smaller or ragged
    /// matrix is a contract violation of the upstream producer, surfaced as
    /// a descriptive error before any analysis indexes into the matrix.
    pub fn validate(&self) -> Result<()> {
        let n = self.manuscripts.len();
        if self.similarity_matrix.len() != n {
            return Err(Error::Decode(format!(
                "similarity matrix has {} rows for {} manuscripts",
                self.similarity_matrix.len(),
                n
            )));
        }
        for (i, row) in self.similarity_matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::Decode(format!(
                    "similarity matrix row {} has {} columns for {} manuscripts",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        Ok(())
    }
}

/// One unordered manuscript pair; `a` precedes `b` in canonical order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityPair {
    pub a: String,
    pub b: String,
    pub similarity: f64,
}

/// Digest of the pairwise similarity distribution
#[derive(Debug, Clone, Serialize)]
pub struct PairwiseSummary {
    pub pair_count: usize,
    pub average_similarity: f64,
    pub min_similarity: f64,
    pub max_similarity: f64,
    /// Pairs with similarity >= 95
    pub highly_similar: usize,
    /// Pairs with similarity >= 90
    pub similar: usize,
    /// Pairs with similarity < 80
    pub divergent: usize,
}

/// Enumerate all unordered pairs from the upper triangle of the matrix
pub fn enumerate_pairs(data: &SimilarityData) -> Vec<SimilarityPair> {
    let n = data.manuscripts.len();
    let mut pairs = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push(SimilarityPair {
                a: data.manuscripts[i].clone(),
                b: data.manuscripts[j].clone(),
                similarity: data.similarity_matrix[i][j],
            });
        }
    }
    pairs
}

/// Summarize the pair distribution; zero-valued for an empty pair set
pub fn pairwise_summary(pairs: &[SimilarityPair]) -> PairwiseSummary {
    if pairs.is_empty() {
        return PairwiseSummary {
            pair_count: 0,
            average_similarity: 0.0,
            min_similarity: 0.0,
            max_similarity: 0.0,
            highly_similar: 0,
            similar: 0,
            divergent: 0,
        };
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut highly_similar = 0;
    let mut similar = 0;
    let mut divergent = 0;

    for pair in pairs {
        sum += pair.similarity;
        min = min.min(pair.similarity);
        max = max.max(pair.similarity);
        if pair.similarity >= 95.0 {
            highly_similar += 1;
        }
        if pair.similarity >= 90.0 {
            similar += 1;
        }
        if pair.similarity < 80.0 {
            divergent += 1;
        }
    }

    PairwiseSummary {
        pair_count: pairs.len(),
        average_similarity: sum / pairs.len() as f64,
        min_similarity: min,
        max_similarity: max,
        highly_similar,
        similar,
        divergent,
    }
}

/// Top 10 most similar pairs; stable descending sort, ties keep
/// first-encountered pair order
pub fn most_similar(pairs: &[SimilarityPair]) -> Vec<SimilarityPair> {
    let mut ranked = pairs.to_vec();
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(RANKING_SIZE);
    ranked
}

/// Top 10 least similar pairs; stable ascending sort
pub fn least_similar(pairs: &[SimilarityPair]) -> Vec<SimilarityPair> {
    let mut ranked = pairs.to_vec();
    ranked.sort_by(|a, b| {
        a.similarity
            .partial_cmp(&b.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(RANKING_SIZE);
    ranked
}

/// Greedy cluster extraction at the fixed >= 98% threshold.
///
/// Scans qualifying pairs in enumeration order (lower manuscript index
/// first, then higher). A pair starts a new cluster when neither member is
/// assigned, joins the existing cluster when exactly one member is
/// assigned, and is dropped when both already are. Distinct clusters are
/// never merged, even when a later pair bridges them; this order-dependent,
/// non-transitive grouping is the documented behavior and is reproduced
/// deliberately rather than replaced with true single-linkage clustering.
pub fn extract_clusters(data: &SimilarityData) -> Vec<Vec<String>> {
    let n = data.manuscripts.len();
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    // manuscript index -> cluster index
    let mut assigned: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if data.similarity_matrix[i][j] < CLUSTER_THRESHOLD {
                continue;
            }
            match (assigned[i], assigned[j]) {
                (None, None) => {
                    clusters.push(vec![i, j]);
                    let c = clusters.len() - 1;
                    assigned[i] = Some(c);
                    assigned[j] = Some(c);
                }
                (Some(c), None) => {
                    clusters[c].push(j);
                    assigned[j] = Some(c);
                }
                (None, Some(c)) => {
                    clusters[c].push(i);
                    assigned[i] = Some(c);
                }
                // Both already clustered: dropped, never merged
                (Some(_), Some(_)) => {}
            }
        }
    }

    clusters
        .into_iter()
        .map(|members| {
            members
                .into_iter()
                .map(|idx| data.manuscripts[idx].clone())
                .collect()
        })
        .collect()
}
