#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_dir_name, validate_extension, validate_path, validate_report_formats, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_root() -> PathBuf {
    PathBuf::from(crate::corpus::DEFAULT_ROOT)
}

fn default_extension() -> String {
    "rs".to_string()
}

fn default_refactored_dir() -> String {
    "refactored".to_string()
}

/// Where the corpus lives and how its files are named. The `[corpus]` table of the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSettings {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_refactored_dir")]
    pub refactored_dir: String,
    #[serde(default)]
    pub include_originals: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            refactored_dir: default_refactored_dir(),
            include_originals: false,
            categories: Vec::new(),
        }
    }
}

impl ConfigProvider for CorpusSettings {
    fn corpus_root(&self) -> &Path {
        &self.root
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn refactored_dir(&self) -> &str {
        &self.refactored_dir
    }

    fn include_originals(&self) -> bool {
        self.include_originals
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Validate for CorpusSettings {
    fn validate(&self) -> Result<()> {
        validate_path("corpus.root", &self.root.to_string_lossy())?;
        validate_extension("corpus.extension", &self.extension)?;
        validate_dir_name("corpus.refactored_dir", &self.refactored_dir)?;
        for category in &self.categories {
            validate_dir_name("corpus.categories", category)?;
        }
        Ok(())
    }
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string(), "json".to_string()]
}

/// The `[report]` table. Reports are only written when an output path is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    pub output_path: Option<String>,
    #[serde(default = "default_formats")]
    pub output_formats: Vec<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_path: None,
            output_formats: default_formats(),
        }
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("report.output_path", path)?;
        }
        validate_report_formats("report.output_formats", &self.output_formats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_builtin_corpus() {
        let settings = CorpusSettings::default();
        assert!(settings.root.ends_with("src/corpus"));
        assert_eq!(settings.tests_suffix(), ".tests.rs");
        assert!(!settings.include_originals);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_extension_fails_validation() {
        let settings = CorpusSettings {
            extension: ".js".to_string(),
            ..CorpusSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
