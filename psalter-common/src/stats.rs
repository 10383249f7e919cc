//! Derived per-manuscript statistics
//!
//! Pure reductions over a decoded sheet (conventionally the aggregate
//! all-psalms sheet). Nothing here raises: empty inputs and absent
//! manuscripts resolve to zero-valued profiles.

use serde::Serialize;

use crate::codec::{Sheet, VariantKind};

/// How many entries the ranking lists carry
const RANKING_SIZE: usize = 10;

/// Aggregated variation profile for one manuscript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManuscriptProfile {
    pub name: String,
    /// Count of words with a non-empty variant for this manuscript
    pub total_words: usize,
    pub identical_count: usize,
    pub autosemantic_count: usize,
    pub synsemantic_count: usize,
    pub other_count: usize,
    /// Percentage of attested words that differ from the reference form;
    /// 0.0 when the manuscript attests no words at all
    pub variation_rate: f64,
}

/// Overall four-category change distribution across all manuscripts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub identical: usize,
    pub autosemantic: usize,
    pub synsemantic: usize,
    pub other: usize,
}

/// Compute one profile per manuscript, in the sheet's declared order
pub fn manuscript_profiles(sheet: &Sheet) -> Vec<ManuscriptProfile> {
    sheet
        .manuscripts
        .iter()
        .map(|ms| profile_for(sheet, ms))
        .collect()
}

fn profile_for(sheet: &Sheet, manuscript: &str) -> ManuscriptProfile {
    let mut total_words = 0usize;
    let mut identical_count = 0usize;
    let mut autosemantic_count = 0usize;
    let mut synsemantic_count = 0usize;
    let mut other_count = 0usize;

    for word in &sheet.words {
        let Some(variant) = word.variant(manuscript) else {
            continue;
        };
        // Empty text means the manuscript does not attest this word
        if variant.text.is_empty() {
            continue;
        }
        total_words += 1;
        match variant.kind {
            VariantKind::Identical => identical_count += 1,
            VariantKind::Autosemantic => autosemantic_count += 1,
            VariantKind::Synsemantic => synsemantic_count += 1,
            VariantKind::Unknown => other_count += 1,
        }
    }

    let variation_rate = if total_words > 0 {
        (total_words - identical_count) as f64 / total_words as f64 * 100.0
    } else {
        0.0
    };

    ManuscriptProfile {
        name: manuscript.to_string(),
        total_words,
        identical_count,
        autosemantic_count,
        synsemantic_count,
        other_count,
        variation_rate,
    }
}

/// Top 10 manuscripts by variation rate, descending.
///
/// The sort is stable, so ties keep the declared manuscript order and
/// repeated runs over identical input produce identical lists.
pub fn most_innovative(profiles: &[ManuscriptProfile]) -> Vec<ManuscriptProfile> {
    let mut ranked = profiles.to_vec();
    ranked.sort_by(|a, b| {
        b.variation_rate
            .partial_cmp(&a.variation_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(RANKING_SIZE);
    ranked
}

/// Top 10 manuscripts by variation rate, ascending; same tie behavior as
/// [`most_innovative`]
pub fn most_conservative(profiles: &[ManuscriptProfile]) -> Vec<ManuscriptProfile> {
    let mut ranked = profiles.to_vec();
    ranked.sort_by(|a, b| {
        a.variation_rate
            .partial_cmp(&b.variation_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(RANKING_SIZE);
    ranked
}

/// Sum the per-manuscript category counts into the overall distribution
pub fn overall_distribution(profiles: &[ManuscriptProfile]) -> Distribution {
    profiles.iter().fold(Distribution::default(), |acc, p| Distribution {
        identical: acc.identical + p.identical_count,
        autosemantic: acc.autosemantic + p.autosemantic_count,
        synsemantic: acc.synsemantic + p.synsemantic_count,
        other: acc.other + p.other_count,
    })
}
