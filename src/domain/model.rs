use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VariantTag {
    Original,
    Refactored(String),
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantTag::Original => f.write_str("original"),
            VariantTag::Refactored(tag) => f.write_str(tag),
        }
    }
}

/// Identifies one implementation of one sample: `<category>-<sample>-<tag>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SuiteId {
    pub category: String,
    pub sample: String,
    pub variant: VariantTag,
}

impl SuiteId {
    pub fn original(category: &str, sample: &str) -> Self {
        Self {
            category: category.to_string(),
            sample: sample.to_string(),
            variant: VariantTag::Original,
        }
    }

    pub fn refactored(category: &str, sample: &str, tag: &str) -> Self {
        Self {
            category: category.to_string(),
            sample: sample.to_string(),
            variant: VariantTag::Refactored(tag.to_string()),
        }
    }

    pub fn description(&self) -> String {
        format!("{}-{}-{}", self.category, self.sample, self.variant)
    }
}

impl fmt::Display for SuiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// An implementation file found on disk together with the spec it is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredSuite {
    pub id: SuiteId,
    pub path: PathBuf,
    pub spec_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlanEntry {
    Suite(DiscoveredSuite),
    /// Sentinel for a category (or sample) whose tests could not be discovered.
    Placeholder { label: String, reason: String },
}

impl PlanEntry {
    pub fn label(&self) -> String {
        match self {
            PlanEntry::Suite(suite) => suite.id.description(),
            PlanEntry::Placeholder { label, .. } => label.clone(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PlanEntry::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
}

impl CaseReport {
    pub fn passed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outcome: CaseOutcome::Passed,
        }
    }

    pub fn failed(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            outcome: CaseOutcome::Failed {
                message: message.into(),
            },
        }
    }

    pub fn is_passed(&self) -> bool {
        self.outcome == CaseOutcome::Passed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteKind {
    Original,
    Variant,
    Placeholder,
    Unresolved,
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuiteKind::Original => "original",
            SuiteKind::Variant => "variant",
            SuiteKind::Placeholder => "placeholder",
            SuiteKind::Unresolved => "unresolved",
        };
        f.write_str(name)
    }
}

pub const PLACEHOLDER_CASE: &str = "should run tests for code smell";
pub const UNRESOLVED_CASE: &str = "should resolve an implementation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub description: String,
    pub kind: SuiteKind,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn new(description: &str, kind: SuiteKind, cases: Vec<CaseReport>) -> Self {
        Self {
            description: description.to_string(),
            kind,
            cases,
        }
    }

    /// One guaranteed failure, so a category without discoverable tests shows up in the results.
    pub fn placeholder(label: &str, reason: &str) -> Self {
        Self::new(
            label,
            SuiteKind::Placeholder,
            vec![CaseReport::failed(PLACEHOLDER_CASE, reason)],
        )
    }

    pub fn unresolved(description: &str, reason: &str) -> Self {
        Self::new(
            description,
            SuiteKind::Unresolved,
            vec![CaseReport::failed(UNRESOLVED_CASE, reason)],
        )
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub suites: Vec<SuiteReport>,
}

impl RunSummary {
    pub fn suite(&self, description: &str) -> Option<&SuiteReport> {
        self.suites.iter().find(|s| s.description == description)
    }

    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    pub fn passed_cases(&self) -> usize {
        self.suites.iter().map(SuiteReport::passed).sum()
    }

    pub fn failed_cases(&self) -> usize {
        self.suites.iter().map(SuiteReport::failed).sum()
    }

    pub fn failed_suites(&self) -> Vec<&SuiteReport> {
        self.suites.iter().filter(|s| !s.is_success()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.suites.iter().all(SuiteReport::is_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_id_description() {
        assert_eq!(
            SuiteId::refactored("loops", "1", "opt-4").description(),
            "loops-1-opt-4"
        );
        assert_eq!(
            SuiteId::original("data_clumps", "1").description(),
            "data_clumps-1-original"
        );
    }

    #[test]
    fn test_placeholder_always_fails() {
        let report = SuiteReport::placeholder("global_data", "permission denied");
        assert_eq!(report.kind, SuiteKind::Placeholder);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(report.cases[0].name, PLACEHOLDER_CASE);
    }

    #[test]
    fn test_case_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(CaseReport::failed("adds", "expected 2")).unwrap();
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["outcome"]["message"], "expected 2");
    }
}
