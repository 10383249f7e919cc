//! Data loading layer for psalter-dr
//!
//! Retrieves the four JSON resources concurrently, decodes the compact
//! word-variant resource, and precomputes the statistics digests the API
//! serves. Loading is all-or-nothing: the first failed resource fails the
//! whole load with the underlying error, and a failed load is terminal for
//! the process. No retry, no partial-success state.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use psalter_common::codec::{self, PsalterData, AGGREGATE_SHEET};
use psalter_common::config::DataSource;
use psalter_common::metadata::{ManuscriptMetadata, VerseData};
use psalter_common::similarity::{self, PairwiseSummary, SimilarityData, SimilarityPair};
use psalter_common::stats::{self, Distribution, ManuscriptProfile};

/// Resource file names, fixed by the upstream pipeline
pub const PSALTER_RESOURCE: &str = "psalter_data.json";
pub const SIMILARITY_RESOURCE: &str = "similarity_analysis.json";
pub const METADATA_RESOURCE: &str = "manuscript_metadata.json";
pub const VERSES_RESOURCE: &str = "verse_translations.json";

/// Immutable snapshot of everything the API serves
#[derive(Debug)]
pub struct LoadedData {
    pub psalter: PsalterData,
    pub similarity: SimilarityData,
    pub metadata: ManuscriptMetadata,
    pub verses: VerseData,
    pub digests: Digests,
}

/// Statistics digests precomputed from the loaded snapshot.
///
/// All of these are cheap pure derivations and could be recomputed on every
/// request; computing them once at load time keeps handlers allocation-free.
#[derive(Debug)]
pub struct Digests {
    /// Per-manuscript profiles over the aggregate sheet, in declared order
    pub profiles: Vec<ManuscriptProfile>,
    pub most_innovative: Vec<ManuscriptProfile>,
    pub most_conservative: Vec<ManuscriptProfile>,
    pub distribution: Distribution,
    pub pairwise: PairwiseSummary,
    pub most_similar: Vec<SimilarityPair>,
    pub least_similar: Vec<SimilarityPair>,
    pub clusters: Vec<Vec<String>>,
}

/// Load all four resources from the data source and build the snapshot
pub async fn load(source: &DataSource) -> Result<LoadedData> {
    let (psalter_raw, similarity_raw, metadata_raw, verses_raw) = match source {
        DataSource::Dir(dir) => tokio::try_join!(
            read_resource(dir, PSALTER_RESOURCE),
            read_resource(dir, SIMILARITY_RESOURCE),
            read_resource(dir, METADATA_RESOURCE),
            read_resource(dir, VERSES_RESOURCE),
        )?,
        DataSource::Url(base) => {
            let client = reqwest::Client::new();
            tokio::try_join!(
                fetch_resource(&client, base, PSALTER_RESOURCE),
                fetch_resource(&client, base, SIMILARITY_RESOURCE),
                fetch_resource(&client, base, METADATA_RESOURCE),
                fetch_resource(&client, base, VERSES_RESOURCE),
            )?
        }
    };

    let psalter = codec::decode_json(&psalter_raw)
        .with_context(|| format!("decoding {}", PSALTER_RESOURCE))?;
    let similarity: SimilarityData = serde_json::from_str(&similarity_raw)
        .with_context(|| format!("parsing {}", SIMILARITY_RESOURCE))?;
    similarity
        .validate()
        .with_context(|| format!("validating {}", SIMILARITY_RESOURCE))?;
    let metadata: ManuscriptMetadata = serde_json::from_str(&metadata_raw)
        .with_context(|| format!("parsing {}", METADATA_RESOURCE))?;
    let verses: VerseData = serde_json::from_str(&verses_raw)
        .with_context(|| format!("parsing {}", VERSES_RESOURCE))?;

    let digests = compute_digests(&psalter, &similarity);

    Ok(LoadedData {
        psalter,
        similarity,
        metadata,
        verses,
        digests,
    })
}

/// Derive all statistics digests from the decoded snapshot
pub fn compute_digests(psalter: &PsalterData, similarity: &SimilarityData) -> Digests {
    let profiles = match psalter.sheet(AGGREGATE_SHEET) {
        Some(sheet) => stats::manuscript_profiles(sheet),
        None => {
            warn!(
                sheet = AGGREGATE_SHEET,
                "aggregate sheet missing, statistics will be empty"
            );
            Vec::new()
        }
    };

    let pairs = similarity::enumerate_pairs(similarity);

    Digests {
        most_innovative: stats::most_innovative(&profiles),
        most_conservative: stats::most_conservative(&profiles),
        distribution: stats::overall_distribution(&profiles),
        pairwise: similarity::pairwise_summary(&pairs),
        most_similar: similarity::most_similar(&pairs),
        least_similar: similarity::least_similar(&pairs),
        clusters: similarity::extract_clusters(similarity),
        profiles,
    }
}

async fn read_resource(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))
}

async fn fetch_resource(client: &reqwest::Client, base: &str, name: &str) -> Result<String> {
    let url = format!("{}/{}", base, name);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("fetching {}", url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", url))?;
    response
        .text()
        .await
        .with_context(|| format!("reading body of {}", url))
}
