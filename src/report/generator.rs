//! Statistics report generation.
//!
//! JSON is the canonical format: pretty-printed with 2-space indentation and
//! a fixed key order, so two runs over an unchanged corpus produce
//! byte-identical files. Markdown is a human-readable summary of the same
//! numbers.

use crate::models::CorpusStats;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

/// Generate the JSON report.
pub fn generate_json_report(stats: &CorpusStats) -> Result<String> {
    serde_json::to_string_pretty(stats).map_err(Into::into)
}

/// Generate a Markdown summary report.
pub fn generate_markdown_report(stats: &CorpusStats) -> String {
    let mut output = String::new();

    output.push_str("# Corpus Language Statistics\n\n");
    output.push_str(&format!(
        "*Generated: {}*\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output.push_str(&generate_totals_section(stats));
    output.push_str(&generate_languages_section(stats));
    output.push_str(&generate_missing_speakers_section(stats));

    output
}

/// Generate the totals section.
fn generate_totals_section(stats: &CorpusStats) -> String {
    let mut section = String::new();

    section.push_str("## Totals\n\n");
    section.push_str(&format!("- **Sentences:** {}\n", stats.total_sentences()));
    section.push_str(&format!(
        "- **Sentences without language:** {}\n",
        stats.sentences_without_language
    ));
    section.push_str(&format!(
        "- **Speakers without language:** {}\n",
        stats.speakers_without_language.len()
    ));
    section.push('\n');

    section
}

/// Generate the per-language table, in first-seen corpus order.
fn generate_languages_section(stats: &CorpusStats) -> String {
    let mut section = String::new();

    section.push_str("## Languages\n\n");

    if stats.languages.is_empty() {
        section.push_str("The corpus contains no records.\n\n");
        return section;
    }

    section.push_str("| Language | Sentences |\n");
    section.push_str("|:---|---:|\n");

    for entry in &stats.languages {
        let label = if entry.language.is_empty() {
            "*(unset)*"
        } else {
            entry.language.as_str()
        };
        section.push_str(&format!("| {} | {} |\n", label, entry.count));
    }
    section.push('\n');

    section
}

/// Generate the list of speakers with no declared language.
fn generate_missing_speakers_section(stats: &CorpusStats) -> String {
    if stats.speakers_without_language.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Speakers Without Language\n\n");
    for (i, name) in stats.speakers_without_language.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, name));
    }
    section.push('\n');

    section
}

/// Write a rendered report to `path`, fully replacing any existing file.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguageCount;

    fn create_test_stats() -> CorpusStats {
        CorpusStats {
            sentences_without_language: 2,
            speakers_without_language: vec!["B".to_string()],
            languages: vec![
                LanguageCount {
                    language: "en".to_string(),
                    count: 2,
                },
                LanguageCount {
                    language: String::new(),
                    count: 2,
                },
            ],
        }
    }

    #[test]
    fn test_json_report_uses_two_space_indentation() {
        let json = generate_json_report(&create_test_stats()).unwrap();

        assert!(json.starts_with("{\n  \"sentencesWithoutLanguage\": 2"));
        assert!(json.contains("\n  \"speakersWithoutLanguage\": [\n    \"B\"\n  ]"));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_json_report_is_deterministic() {
        let stats = create_test_stats();
        assert_eq!(
            generate_json_report(&stats).unwrap(),
            generate_json_report(&stats).unwrap()
        );
    }

    #[test]
    fn test_json_report_empty_corpus() {
        let json = generate_json_report(&CorpusStats::default()).unwrap();
        let expected = "{\n  \"sentencesWithoutLanguage\": 0,\n  \"speakersWithoutLanguage\": [],\n  \"languages\": []\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_markdown_report_sections() {
        let markdown = generate_markdown_report(&create_test_stats());

        assert!(markdown.contains("# Corpus Language Statistics"));
        assert!(markdown.contains("## Totals"));
        assert!(markdown.contains("- **Sentences:** 4"));
        assert!(markdown.contains("- **Sentences without language:** 2"));
        assert!(markdown.contains("| en | 2 |"));
        assert!(markdown.contains("| *(unset)* | 2 |"));
        assert!(markdown.contains("## Speakers Without Language"));
        assert!(markdown.contains("1. B"));
    }

    #[test]
    fn test_markdown_report_empty_corpus() {
        let markdown = generate_markdown_report(&CorpusStats::default());

        assert!(markdown.contains("The corpus contains no records."));
        assert!(!markdown.contains("## Speakers Without Language"));
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        std::fs::write(&path, "stale contents from a previous run").unwrap();

        let json = generate_json_report(&create_test_stats()).unwrap();
        write_report(&path, &json).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), json);
    }

    #[test]
    fn test_pipeline_end_to_end() {
        use crate::analysis::CorpusTally;
        use crate::source;
        use std::io::Write as _;

        let mut input = tempfile::NamedTempFile::new().unwrap();
        input
            .write_all(
                br#"[{"speaker":{"name":"A","language":"en"}},{"speaker":{"name":"B","language":""}},{"speaker":{"name":"B","language":""}},{"speaker":{"name":"C","language":"en"}}]"#,
            )
            .unwrap();

        let mut tally = CorpusTally::new();
        source::for_each_record(input.path(), |record| tally.observe(&record)).unwrap();
        let stats = tally.into_stats();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        write_report(&path, &generate_json_report(&stats).unwrap()).unwrap();

        let written: CorpusStats =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, create_test_stats());
        assert_eq!(
            serde_json::to_string(&written).unwrap(),
            r#"{"sentencesWithoutLanguage":2,"speakersWithoutLanguage":["B"],"languages":[{"language":"en","count":2},{"language":"","count":2}]}"#
        );
    }

    #[test]
    fn test_write_report_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("stats.json");

        let result = write_report(&path, "{}");
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
