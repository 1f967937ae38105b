//! Streaming record source for JSON array corpora.
//!
//! The corpus file holds a single top-level JSON array that may be far larger
//! than available memory, so the array is never materialized: a buffered
//! reader feeds serde's incremental deserializer, and a visitor hands each
//! element to the caller's callback as soon as it has been parsed. Once
//! consumed the sequence is exhausted; a later run re-opens the file.

use crate::models::SentenceRecord;
use serde::de::{DeserializeSeed, SeqAccess, Visitor};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Fatal failures while reading the corpus.
///
/// There is no recovery path: any of these aborts the run before a report
/// is written.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The corpus file is missing or unreadable.
    #[error("cannot open corpus file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The corpus is not valid JSON, or its top level is not an array.
    #[error("malformed corpus: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Stream the top-level array at `path`, invoking `on_record` once per
/// element in document order. Returns the number of records consumed.
pub fn for_each_record<F>(path: &Path, on_record: F) -> Result<u64, SourceError>
where
    F: FnMut(SentenceRecord),
{
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    let count = RecordSink { on_record }.deserialize(&mut deserializer)?;
    // Trailing bytes after the closing bracket make the document invalid.
    deserializer.end()?;

    debug!("Consumed {} records from {}", count, path.display());
    Ok(count)
}

/// Drives the callback over the top-level sequence without collecting it.
struct RecordSink<F> {
    on_record: F,
}

impl<'de, F> DeserializeSeed<'de> for RecordSink<F>
where
    F: FnMut(SentenceRecord),
{
    type Value = u64;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, F> Visitor<'de> for RecordSink<F>
where
    F: FnMut(SentenceRecord),
{
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a top-level array of sentence records")
    }

    fn visit_seq<A>(mut self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut count = 0u64;
        while let Some(record) = seq.next_element::<SentenceRecord>()? {
            (self.on_record)(record);
            count += 1;
        }
        Ok(count)
    }
}
