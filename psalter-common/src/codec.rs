//! Variant codec: compact wire format -> normalized word entries
//!
//! The upstream alignment pipeline ships one JSON object per corpus, mapping
//! sheet name (one sheet per psalm, plus the aggregate sheet) to a compact
//! encoding that avoids repeating manuscript keys for every word. Each word
//! carries a positional variant sequence aligned to the sheet's declared
//! `manuscripts` order; a `null` position means "identical to the reference
//! form" and is expanded to the `"X"` sentinel.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Name of the aggregate all-psalms sheet produced by the upstream pipeline.
/// Statistics are conventionally computed over this sheet.
pub const AGGREGATE_SHEET: &str = "Všechny";

/// Sentinel text meaning "identical to the reference form"
pub const IDENTICAL_SENTINEL: &str = "X";

/// Classification of one manuscript's rendering of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Matches the reference form
    Identical,
    /// Substitutive change carrying independent lexical meaning
    Autosemantic,
    /// Grammatical / functional-word change
    Synsemantic,
    /// Unclassified by the editors
    Unknown,
}

impl VariantKind {
    /// Map a single-letter wire code to a kind.
    ///
    /// Unrecognized codes degrade to `Unknown` rather than failing the
    /// decode; the classification is editorial and a bad code should not
    /// take the whole corpus down.
    pub fn from_code(code: &str) -> Self {
        match code {
            "a" => VariantKind::Autosemantic,
            "s" => VariantKind::Synsemantic,
            "i" => VariantKind::Identical,
            "u" => VariantKind::Unknown,
            other => {
                tracing::warn!(code = other, "unrecognized variant kind code, treating as unknown");
                VariantKind::Unknown
            }
        }
    }
}

/// One manuscript's rendering of one word, plus its classification.
///
/// Invariant: `text == "X"` implies `kind == Identical`. The reverse does
/// not hold; a manuscript may spell the reference form out literally and
/// still be classified identical via an explicit `i` code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub text: String,
    pub kind: VariantKind,
}

impl Variant {
    /// The sentinel variant: identical to the reference form
    pub fn identical() -> Self {
        Variant {
            text: IDENTICAL_SENTINEL.to_string(),
            kind: VariantKind::Identical,
        }
    }
}

/// Compact word record as shipped on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct CompactWord {
    /// Canonical Latin lemma
    #[serde(rename = "l")]
    pub latin: String,
    /// Normalized reference-orthography form ("BiblPad")
    #[serde(rename = "b")]
    pub reference_form: String,
    /// Positional variant sequence aligned to the sheet's manuscript order;
    /// `null` marks "no variation"
    #[serde(rename = "v")]
    pub variants: Vec<Option<(String, String)>>,
}

/// Compact per-sheet encoding as shipped on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct CompactSheet {
    /// Ordered manuscript abbreviations; establishes positional indices
    pub manuscripts: Vec<String>,
    pub words: Vec<CompactWord>,
}

/// One source word's attestation across manuscripts
#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub latin: String,
    pub reference_form: String,
    /// Keyed by manuscript abbreviation; total over the sheet's manuscript
    /// list. Iterate via [`Sheet::manuscripts`] when order matters.
    pub variants: HashMap<String, Variant>,
}

impl WordEntry {
    /// Variant for one manuscript, if the manuscript belongs to the sheet
    pub fn variant(&self, manuscript: &str) -> Option<&Variant> {
        self.variants.get(manuscript)
    }
}

/// Decoded sheet: declared manuscript order plus expanded word entries
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub name: String,
    /// Declared manuscript order for this sheet; different sheets may carry
    /// different manuscript sets in different orders
    pub manuscripts: Vec<String>,
    pub words: Vec<WordEntry>,
}

/// Fully decoded corpus, sheets in wire order
#[derive(Debug, Clone, Default, Serialize)]
pub struct PsalterData {
    pub sheets: Vec<Sheet>,
}

impl PsalterData {
    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Manuscript list declared for a sheet, in wire order.
    ///
    /// Downstream components use this to know the selectable manuscript set
    /// without re-deriving it from word data.
    pub fn manuscripts(&self, sheet_name: &str) -> Option<&[String]> {
        self.sheet(sheet_name).map(|s| s.manuscripts.as_slice())
    }
}

/// Decode the compact wire encoding into normalized word entries.
///
/// Pure and total over well-formed input. Sheet order and word order are
/// preserved exactly; each word's variant mapping is total over the sheet's
/// manuscript list. A structurally malformed sheet, or a word whose variant
/// sequence does not line up with the declared manuscripts, is a contract
/// violation of the upstream producer and fails the whole decode.
pub fn decode(raw: serde_json::Map<String, Value>) -> Result<PsalterData> {
    let mut sheets = Vec::with_capacity(raw.len());

    for (name, value) in raw {
        let compact: CompactSheet = serde_json::from_value(value)
            .map_err(|e| Error::Decode(format!("sheet '{}': {}", name, e)))?;

        let mut words = Vec::with_capacity(compact.words.len());
        for (word_idx, word) in compact.words.into_iter().enumerate() {
            if word.variants.len() != compact.manuscripts.len() {
                return Err(Error::Decode(format!(
                    "sheet '{}' word {} ('{}'): {} variant positions for {} manuscripts",
                    name,
                    word_idx,
                    word.latin,
                    word.variants.len(),
                    compact.manuscripts.len()
                )));
            }

            let mut variants = HashMap::with_capacity(compact.manuscripts.len());
            for (manuscript, position) in compact.manuscripts.iter().zip(word.variants) {
                let variant = match position {
                    None => Variant::identical(),
                    Some((text, code)) => Variant {
                        text,
                        kind: VariantKind::from_code(&code),
                    },
                };
                variants.insert(manuscript.clone(), variant);
            }

            words.push(WordEntry {
                latin: word.latin,
                reference_form: word.reference_form,
                variants,
            });
        }

        sheets.push(Sheet {
            name,
            manuscripts: compact.manuscripts,
            words,
        });
    }

    Ok(PsalterData { sheets })
}

/// Parse and decode a raw JSON document holding the compact encoding
pub fn decode_json(json: &str) -> Result<PsalterData> {
    let raw: serde_json::Map<String, Value> = serde_json::from_str(json)?;
    decode(raw)
}
