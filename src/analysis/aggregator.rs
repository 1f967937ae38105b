//! Single-pass aggregation of language and speaker statistics.
//!
//! One `CorpusTally` is constructed per run, owned by the pipeline, and fed
//! every record exactly once in arrival order. First-seen order of language
//! values and of missing-language speakers is observable in the report, so
//! both tables keep an ordered key list next to their lookup structure.

use crate::models::{CorpusStats, LanguageCount, SentenceRecord};
use std::collections::{HashMap, HashSet};

/// Accumulators for one pass over the corpus.
#[derive(Debug, Default)]
pub struct CorpusTally {
    /// Count per distinct language value, keyed by exact string.
    language_counts: HashMap<String, u64>,
    /// Distinct language values in first-seen order.
    language_order: Vec<String>,
    /// Speakers already recorded as missing a language.
    missing_seen: HashSet<String>,
    /// The same speaker names in first-seen order.
    missing_order: Vec<String>,
    /// Empty-language records, counted per sentence (not per speaker).
    sentences_without_language: u64,
}

impl CorpusTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the accumulators.
    ///
    /// The missing-sentence counter advances on every empty-language record,
    /// while the speaker list is de-duplicated; a speaker with many unset
    /// sentences appears once but contributes to the counter each time.
    pub fn observe(&mut self, record: &SentenceRecord) {
        let speaker = &record.speaker;

        match self.language_counts.get_mut(&speaker.language) {
            Some(count) => *count += 1,
            None => {
                self.language_counts.insert(speaker.language.clone(), 1);
                self.language_order.push(speaker.language.clone());
            }
        }

        if speaker.language.is_empty() {
            self.sentences_without_language += 1;
            if self.missing_seen.insert(speaker.name.clone()) {
                self.missing_order.push(speaker.name.clone());
            }
        }
    }

    /// Render the accumulators into the final report.
    pub fn into_stats(self) -> CorpusStats {
        let mut counts = self.language_counts;
        let languages = self
            .language_order
            .into_iter()
            .map(|language| {
                let count = counts.remove(&language).unwrap_or(0);
                LanguageCount { language, count }
            })
            .collect();

        CorpusStats {
            sentences_without_language: self.sentences_without_language,
            speakers_without_language: self.missing_order,
            languages,
        }
    }
}
