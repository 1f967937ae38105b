//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.langstats.toml` files.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Corpus input settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Draw a progress bar when a record total is given on the command line.
    #[serde(default = "default_true")]
    pub progress: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            progress: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Corpus input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the corpus file.
    #[serde(default = "default_input")]
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input(),
        }
    }
}

fn default_input() -> String {
    "./out.json".to_string()
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path the report is written to.
    #[serde(default = "default_report")]
    pub path: String,

    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report(),
            format: OutputFormat::default(),
        }
    }
}

fn default_report() -> String {
    "./stats.json".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".langstats.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; only values
    /// the user actually supplied override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.input.path = input.display().to_string();
        }
        if let Some(ref output) = args.output {
            self.report.path = output.display().to_string();
        }
        if let Some(format) = args.format {
            self.report.format = format;
        }
    }

    /// Effective corpus path after merging.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(&self.input.path)
    }

    /// Effective report path after merging.
    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.report.path)
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.path, "./out.json");
        assert_eq!(config.report.path, "./stats.json");
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.general.progress);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
progress = false

[input]
path = "./corpus/aligned.json"

[report]
path = "./reports/languages.md"
format = "markdown"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(!config.general.progress);
        assert_eq!(config.input.path, "./corpus/aligned.json");
        assert_eq!(config.report.path, "./reports/languages.md");
        assert_eq!(config.report.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[input]\npath = \"./big.json\"\n").unwrap();
        assert_eq!(config.input.path, "./big.json");
        assert_eq!(config.report.path, "./stats.json");
        assert!(config.general.progress);
    }

    #[test]
    fn test_merge_with_args_cli_wins() {
        let mut config = Config::default();
        let args = Args {
            total: None,
            input: Some(std::path::PathBuf::from("./other.json")),
            output: None,
            format: Some(OutputFormat::Markdown),
            config: None,
            dry_run: false,
            init_config: false,
            verbose: false,
            quiet: false,
        };

        config.merge_with_args(&args);

        assert_eq!(config.input.path, "./other.json");
        // Untouched by the CLI: the file's value stays.
        assert_eq!(config.report.path, "./stats.json");
        assert_eq!(config.report.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[report]"));

        // Round-trips through the parser.
        let config: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.input.path, "./out.json");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Config::load(Path::new("./no-such-config.toml"));
        assert!(result.is_err());
    }
}
