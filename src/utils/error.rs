use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Cannot list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No test specification found in category '{category}'")]
    NoTestSpecs { category: String },

    #[error("Test specification for {category}-{sample} is empty")]
    EmptyTestSpec { category: String, sample: String },

    #[error("No implementation registered for {id} ({})", path.display())]
    UnresolvedImplementation { id: String, path: PathBuf },

    #[error("Implementation for {id} is already registered")]
    DuplicateBinding { id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Discovery,
    Registry,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HarnessError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HarnessError::IoError(_) | HarnessError::Listing { .. } => ErrorCategory::Filesystem,
            HarnessError::NoTestSpecs { .. } | HarnessError::EmptyTestSpec { .. } => {
                ErrorCategory::Discovery
            }
            HarnessError::UnresolvedImplementation { .. } | HarnessError::DuplicateBinding { .. } => {
                ErrorCategory::Registry
            }
            HarnessError::ConfigError { .. }
            | HarnessError::ConfigValidationError { .. }
            | HarnessError::InvalidConfigValueError { .. }
            | HarnessError::MissingConfigError { .. } => ErrorCategory::Configuration,
            HarnessError::SerializationError(_) | HarnessError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Discovery => ErrorSeverity::Low,
            ErrorCategory::Registry => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Filesystem | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HarnessError::Listing { .. } | HarnessError::IoError(_) => {
                "Check that the corpus root exists and is readable"
            }
            HarnessError::NoTestSpecs { .. } => {
                "Add a <sample>.tests file to the category or remove the directory"
            }
            HarnessError::EmptyTestSpec { .. } => "Write the sample's tests before asking for a refactoring",
            HarnessError::UnresolvedImplementation { .. } => {
                "Register the implementation in the category's register() function"
            }
            HarnessError::DuplicateBinding { .. } => "Remove the second register() call for this suite",
            HarnessError::ConfigError { .. }
            | HarnessError::ConfigValidationError { .. }
            | HarnessError::InvalidConfigValueError { .. }
            | HarnessError::MissingConfigError { .. } => "Fix the configuration file or command line flags",
            HarnessError::SerializationError(_) | HarnessError::CsvError(_) => {
                "Check that the report output path is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Filesystem => format!("Could not read the corpus: {}", self),
            ErrorCategory::Discovery => format!("Corpus layout problem: {}", self),
            ErrorCategory::Registry => format!("Implementation registry problem: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_error_is_critical_filesystem() {
        let err = HarnessError::Listing {
            path: PathBuf::from("corpus/loops"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("corpus/loops"));
    }

    #[test]
    fn test_unresolved_is_medium() {
        let err = HarnessError::UnresolvedImplementation {
            id: "loops-1-9".to_string(),
            path: PathBuf::from("loops/refactored/1_9.rs"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("loops-1-9"));
    }
}
