//! Data models for the corpus statistics tool.
//!
//! This module contains the input record structures as they appear in the
//! corpus file and the output report structures that are serialized into
//! the statistics report.

use serde::{Deserialize, Serialize};

/// Speaker attribution attached to a sentence record.
///
/// All fields default to the empty string when absent; an unset language is
/// ordinary data, not a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Speaker {
    /// Speaker identifier from the source transcript.
    #[serde(default)]
    pub id: String,
    /// Display name of the speaker.
    #[serde(default)]
    pub name: String,
    /// Declared language of the speaker, possibly empty.
    #[serde(default)]
    pub language: String,
}

/// A single aligned sentence record from the corpus.
///
/// Only the speaker attribution is consulted; the aligned sentence texts and
/// any other fields a record carries are skipped by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentenceRecord {
    #[serde(default)]
    pub speaker: Speaker,
}

/// Tally entry for one distinct language value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    /// Exact language string as it appeared in the corpus ("" for unset).
    pub language: String,
    /// Number of sentence records carrying this language.
    pub count: u64,
}

/// The complete statistics report.
///
/// Field order matters: it is the key order of the serialized JSON report,
/// which is stable across runs over the same corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    /// Sentence records with an empty speaker language, counted per record.
    pub sentences_without_language: u64,
    /// Speaker names with at least one empty-language record, first-seen order.
    pub speakers_without_language: Vec<String>,
    /// Per-language counts in first-seen order of the language values.
    pub languages: Vec<LanguageCount>,
}

impl CorpusStats {
    /// Sum of all per-language counts, i.e. the number of records observed.
    pub fn total_sentences(&self) -> u64 {
        self.languages.iter().map(|l| l.count).sum()
    }
}
