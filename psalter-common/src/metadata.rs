//! Manuscript metadata and verse translation resources
//!
//! Both resources come from the upstream pipeline and are consumed
//! read-only for display enrichment; nothing here is transformed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Catalog entry for one manuscript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManuscriptInfo {
    pub full_name: String,
    pub date: String,
    pub location: String,
    /// Library shelfmark, where known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Manuscript metadata resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManuscriptMetadata {
    /// Keyed by manuscript abbreviation
    pub metadata: BTreeMap<String, ManuscriptInfo>,
    /// Translation-family grouping: family name -> member abbreviations
    pub translation_families: BTreeMap<String, Vec<String>>,
}

/// One verse's Latin text and per-manuscript translations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseTranslation {
    pub latin: String,
    /// Keyed by older-manuscript abbreviation
    pub translations: BTreeMap<String, String>,
}

/// Verse translation resource, keyed by verse identifier (e.g. "Ps 6,2")
pub type VerseData = BTreeMap<String, VerseTranslation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_parses_with_optional_signature() {
        let json = r#"{
            "metadata": {
                "PsKlem": {
                    "full_name": "Žaltář klementinský",
                    "date": "ca 1330",
                    "location": "Praha",
                    "signature": "NK ČR XVII A 12"
                },
                "PsPod": {
                    "full_name": "Žaltář poděbradský",
                    "date": "1396",
                    "location": "Lund"
                }
            },
            "translation_families": {
                "first": ["PsKlem", "PsWit"],
                "second": ["PsPod"]
            }
        }"#;

        let meta: ManuscriptMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.metadata.len(), 2);
        assert!(meta.metadata["PsKlem"].signature.is_some());
        assert!(meta.metadata["PsPod"].signature.is_none());
        assert_eq!(meta.translation_families["first"], vec!["PsKlem", "PsWit"]);
    }

    #[test]
    fn test_verse_data_parses() {
        let json = r#"{
            "Ps 6,2": {
                "latin": "Domine ne in furore tuo arguas me",
                "translations": {
                    "PsKlem": "Hospodine, v hněvě tvém netresci mne"
                }
            }
        }"#;

        let verses: VerseData = serde_json::from_str(json).unwrap();
        let verse = &verses["Ps 6,2"];
        assert!(verse.latin.starts_with("Domine"));
        assert_eq!(verse.translations.len(), 1);
    }
}
