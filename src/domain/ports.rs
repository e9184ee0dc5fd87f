use crate::domain::model::{PlanEntry, RunSummary, SuiteReport};
use crate::utils::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub is_dir: bool,
}

impl TreeEntry {
    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: false,
        }
    }

    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: true,
        }
    }
}

/// Read/write access to a corpus tree. Listing errors surface as `HarnessError::Listing`.
pub trait CorpusTree {
    fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>>;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_file(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn corpus_root(&self) -> &Path;
    fn extension(&self) -> &str;
    fn refactored_dir(&self) -> &str;
    fn include_originals(&self) -> bool;
    /// Empty means every category.
    fn categories(&self) -> &[String];

    fn tests_suffix(&self) -> String {
        format!(".tests.{}", self.extension())
    }
}

/// Where the harness sends its output. Swappable so tests can assert on structured reports.
pub trait Reporter {
    fn plan_ready(&mut self, plan: &[PlanEntry]);
    fn suite_finished(&mut self, report: &SuiteReport);
    fn run_finished(&mut self, summary: &RunSummary);
}

impl<T: CorpusTree + ?Sized> CorpusTree for &T {
    fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>> {
        (**self).list_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write_file(path, contents)
    }
}

impl<C: ConfigProvider + ?Sized> ConfigProvider for &C {
    fn corpus_root(&self) -> &Path {
        (**self).corpus_root()
    }

    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn refactored_dir(&self) -> &str {
        (**self).refactored_dir()
    }

    fn include_originals(&self) -> bool {
        (**self).include_originals()
    }

    fn categories(&self) -> &[String] {
        (**self).categories()
    }
}
