use crate::config::{CorpusSettings, ReportSettings};
use crate::core::ConfigProvider;
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub corpus: CorpusSettings,
    pub report: Option<ReportSettings>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HarnessError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| HarnessError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.corpus.validate()?;
        if let Some(report) = &self.report {
            // A [report] table only makes sense with somewhere to write to.
            validate_required_field("report.output_path", &report.output_path)?;
            report.validate()?;
        }
        Ok(())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.output_path.as_deref())
    }

    pub fn output_formats(&self) -> Vec<String> {
        self.report
            .clone()
            .unwrap_or_default()
            .output_formats
    }
}

impl ConfigProvider for TomlConfig {
    fn corpus_root(&self) -> &Path {
        self.corpus.corpus_root()
    }

    fn extension(&self) -> &str {
        self.corpus.extension()
    }

    fn refactored_dir(&self) -> &str {
        self.corpus.refactored_dir()
    }

    fn include_originals(&self) -> bool {
        self.corpus.include_originals()
    }

    fn categories(&self) -> &[String] {
        self.corpus.categories()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[corpus]
root = "./corpus"
extension = "js"
include_originals = true
categories = ["loops", "data_clumps"]

[report]
output_path = "./reports"
output_formats = ["csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.corpus_root(), Path::new("./corpus"));
        assert_eq!(config.extension(), "js");
        assert_eq!(config.tests_suffix(), ".tests.js");
        assert_eq!(config.refactored_dir(), "refactored");
        assert!(config.include_originals());
        assert_eq!(config.categories(), ["loops", "data_clumps"]);
        assert_eq!(config.output_path(), Some("./reports"));
        assert_eq!(config.output_formats(), vec!["csv"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.extension(), "rs");
        assert!(!config.include_originals());
        assert!(config.categories().is_empty());
        assert_eq!(config.output_path(), None);
        assert_eq!(config.output_formats(), vec!["csv", "json"]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMELL_CORPUS_TEST_ROOT", "/tmp/smells");

        let toml_content = r#"
[corpus]
root = "${SMELL_CORPUS_TEST_ROOT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.corpus_root(), Path::new("/tmp/smells"));

        std::env::remove_var("SMELL_CORPUS_TEST_ROOT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[corpus]
refactored_dir = "a/b"

[report]
output_path = "./reports"
output_formats = ["xml"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_report_table_needs_output_path() {
        let config = TomlConfig::from_toml_str("[report]\noutput_formats = [\"json\"]\n").unwrap();

        assert!(matches!(
            config.validate(),
            Err(HarnessError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[corpus\nroot = ");
        assert!(matches!(
            result,
            Err(HarnessError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[corpus]
categories = ["global_data"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.categories(), ["global_data"]);
    }
}
