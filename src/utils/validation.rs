use crate::utils::error::{HarnessError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const SUPPORTED_REPORT_FORMATS: [&str; 2] = ["csv", "json"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A bare file extension: `rs`, not `.rs` or `tests.rs`.
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;

    if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be alphanumeric and given without a leading dot".to_string(),
        });
    }

    Ok(())
}

/// Directory names used inside a category, such as `refactored`.
pub fn validate_dir_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a single directory name".to_string(),
        });
    }

    Ok(())
}

pub fn validate_report_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let allowed: HashSet<&str> = SUPPORTED_REPORT_FORMATS.iter().copied().collect();

    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(HarnessError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_REPORT_FORMATS.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| HarnessError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HarnessError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("corpus.extension", "rs").is_ok());
        assert!(validate_extension("corpus.extension", "js").is_ok());
        assert!(validate_extension("corpus.extension", ".rs").is_err());
        assert!(validate_extension("corpus.extension", "tests.rs").is_err());
        assert!(validate_extension("corpus.extension", "  ").is_err());
    }

    #[test]
    fn test_validate_dir_name() {
        assert!(validate_dir_name("corpus.refactored_dir", "refactored").is_ok());
        assert!(validate_dir_name("corpus.refactored_dir", "a/b").is_err());
        assert!(validate_dir_name("corpus.refactored_dir", "..").is_err());
    }

    #[test]
    fn test_validate_report_formats() {
        let formats = vec!["csv".to_string(), "json".to_string()];
        assert!(validate_report_formats("report.output_formats", &formats).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_report_formats("report.output_formats", &invalid).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("out".to_string());
        assert_eq!(validate_required_field("report.output_path", &present).unwrap(), "out");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("report.output_path", &missing),
            Err(HarnessError::MissingConfigError { .. })
        ));
    }
}
