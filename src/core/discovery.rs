use crate::core::naming::{
    base_sample_file, is_spec_file, sample_number, sample_order_key, variant_tag,
};
use crate::core::{ConfigProvider, CorpusTree, DiscoveredSuite, PlanEntry, SuiteId};
use crate::utils::error::{HarnessError, Result};
use std::path::{Path, PathBuf};

/// Walks a corpus tree and produces the ordered list of suites to run.
pub struct Discovery<T: CorpusTree, C: ConfigProvider> {
    tree: T,
    config: C,
}

impl<T: CorpusTree, C: ConfigProvider> Discovery<T, C> {
    pub fn new(tree: T, config: C) -> Self {
        Self { tree, config }
    }

    /// Only a failure to list the root itself is an error. Anything that goes wrong inside a
    /// category becomes a placeholder entry and the walk continues.
    pub fn discover(&self) -> Result<Vec<PlanEntry>> {
        let root = self.config.corpus_root();
        tracing::debug!("Scanning corpus root: {}", root.display());

        let mut categories: Vec<String> = self
            .tree
            .list_dir(root)?
            .into_iter()
            .filter(|entry| entry.is_dir && self.is_selected(&entry.name))
            .map(|entry| entry.name)
            .collect();
        categories.sort();

        tracing::info!("Running tests for code smells: {:?}", categories);

        let mut plan = Vec::new();
        for category in &categories {
            match self.discover_category(category) {
                Ok(entries) => {
                    tracing::debug!("{}: {} suite(s) planned", category, entries.len());
                    plan.extend(entries);
                }
                Err(e) => {
                    tracing::warn!("No tests run for {}: {}", category, e);
                    plan.push(PlanEntry::Placeholder {
                        label: category.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(plan)
    }

    fn is_selected(&self, category: &str) -> bool {
        let filter = self.config.categories();
        filter.is_empty() || filter.iter().any(|c| c == category)
    }

    fn discover_category(&self, category: &str) -> Result<Vec<PlanEntry>> {
        let category_dir = self.config.corpus_root().join(category);
        let entries = self.tree.list_dir(&category_dir)?;
        let suffix = self.config.tests_suffix();
        let extension = self.config.extension();

        let mut specs: Vec<&str> = entries
            .iter()
            .filter(|entry| !entry.is_dir && is_spec_file(&entry.name, &suffix))
            .map(|entry| entry.name.as_str())
            .collect();

        if specs.is_empty() {
            return Err(HarnessError::NoTestSpecs {
                category: category.to_string(),
            });
        }
        specs.sort_by_key(|name| sample_order_key(name));

        let mut plan = Vec::new();
        for spec in specs {
            let sample = sample_number(spec);
            let spec_path = category_dir.join(spec);

            if self.config.include_originals() {
                let base = base_sample_file(sample, extension);
                if entries.iter().any(|entry| !entry.is_dir && entry.name == base) {
                    plan.push(PlanEntry::Suite(DiscoveredSuite {
                        id: SuiteId::original(category, sample),
                        path: category_dir.join(&base),
                        spec_path: spec_path.clone(),
                    }));
                } else {
                    tracing::debug!("{}-{} has no original sample", category, sample);
                }
            }

            plan.extend(self.discover_variants(category, sample, &category_dir, &spec_path));
        }

        Ok(plan)
    }

    fn discover_variants(
        &self,
        category: &str,
        sample: &str,
        category_dir: &Path,
        spec_path: &Path,
    ) -> Vec<PlanEntry> {
        let refactored_dir = category_dir.join(self.config.refactored_dir());

        // No refactored folder yet is a normal state, not a failure.
        if !self.tree.is_dir(&refactored_dir) {
            tracing::debug!("{} has no {} directory", category, self.config.refactored_dir());
            return Vec::new();
        }

        let files = match self.tree.list_dir(&refactored_dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("No tests run for {}-{}: {}", category, sample, e);
                return vec![PlanEntry::Placeholder {
                    label: format!("{}-{}", category, sample),
                    reason: e.to_string(),
                }];
            }
        };

        let mut variants: Vec<(String, PathBuf)> = Vec::new();
        for file in files.iter().filter(|entry| !entry.is_dir) {
            if let Some(tag) = variant_tag(&file.name, sample, self.config.extension()) {
                variants.push((tag.to_string(), refactored_dir.join(&file.name)));
            }
        }
        variants.sort();

        variants
            .into_iter()
            .map(|(tag, path)| {
                PlanEntry::Suite(DiscoveredSuite {
                    id: SuiteId::refactored(category, sample, &tag),
                    path,
                    spec_path: spec_path.to_path_buf(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TreeEntry;
    use std::collections::{HashMap, HashSet};

    struct TestConfig {
        root: PathBuf,
        include_originals: bool,
        categories: Vec<String>,
    }

    impl TestConfig {
        fn new() -> Self {
            Self {
                root: PathBuf::from("/corpus"),
                include_originals: false,
                categories: Vec::new(),
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn corpus_root(&self) -> &Path {
            &self.root
        }

        fn extension(&self) -> &str {
            "rs"
        }

        fn refactored_dir(&self) -> &str {
            "refactored"
        }

        fn include_originals(&self) -> bool {
            self.include_originals
        }

        fn categories(&self) -> &[String] {
            &self.categories
        }
    }

    #[derive(Default)]
    struct MockTree {
        dirs: HashMap<PathBuf, Vec<TreeEntry>>,
        broken: HashSet<PathBuf>,
    }

    impl MockTree {
        fn with_dir(mut self, path: &str, entries: Vec<TreeEntry>) -> Self {
            self.dirs.insert(PathBuf::from(path), entries);
            self
        }

        fn with_broken_dir(mut self, path: &str) -> Self {
            self.broken.insert(PathBuf::from(path));
            self
        }
    }

    impl CorpusTree for MockTree {
        fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>> {
            if self.broken.contains(path) {
                return Err(HarnessError::Listing {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            self.dirs.get(path).cloned().ok_or_else(|| HarnessError::Listing {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains_key(path) || self.broken.contains(path)
        }

        fn read_file(&self, _path: &Path) -> Result<String> {
            Ok(String::new())
        }

        fn write_file(&self, _path: &Path, _contents: &str) -> Result<()> {
            Ok(())
        }
    }

    fn labels(plan: &[PlanEntry]) -> Vec<String> {
        plan.iter().map(PlanEntry::label).collect()
    }

    fn loops_tree() -> MockTree {
        MockTree::default()
            .with_dir("/corpus", vec![TreeEntry::dir("loops"), TreeEntry::file("mod.rs")])
            .with_dir(
                "/corpus/loops",
                vec![
                    TreeEntry::file("1.rs"),
                    TreeEntry::file("1.tests.rs"),
                    TreeEntry::file("2.tests.rs"),
                    TreeEntry::file("mod.rs"),
                    TreeEntry::dir("refactored"),
                ],
            )
            .with_dir(
                "/corpus/loops/refactored",
                vec![
                    TreeEntry::file("2_opt-4.rs"),
                    TreeEntry::file("1_1.rs"),
                    TreeEntry::file("1_2.txt"),
                ],
            )
    }

    #[test]
    fn test_discovers_variants_in_sample_order() {
        let discovery = Discovery::new(loops_tree(), TestConfig::new());
        let plan = discovery.discover().unwrap();

        assert_eq!(labels(&plan), vec!["loops-1-1", "loops-2-opt-4"]);
        match &plan[0] {
            PlanEntry::Suite(suite) => {
                assert_eq!(suite.path, PathBuf::from("/corpus/loops/refactored/1_1.rs"));
                assert_eq!(suite.spec_path, PathBuf::from("/corpus/loops/1.tests.rs"));
            }
            other => panic!("expected suite, got {:?}", other),
        }
    }

    #[test]
    fn test_originals_only_when_present() {
        let mut config = TestConfig::new();
        config.include_originals = true;

        let plan = Discovery::new(loops_tree(), config).discover().unwrap();

        // 2.rs does not exist, so only sample 1 gets an original suite.
        assert_eq!(
            labels(&plan),
            vec!["loops-1-original", "loops-1-1", "loops-2-opt-4"]
        );
    }

    #[test]
    fn test_category_without_specs_gets_placeholder() {
        let tree = MockTree::default()
            .with_dir("/corpus", vec![TreeEntry::dir("comments")])
            .with_dir("/corpus/comments", vec![TreeEntry::file("1.rs")]);

        let plan = Discovery::new(tree, TestConfig::new()).discover().unwrap();

        assert_eq!(plan.len(), 1);
        assert!(plan[0].is_placeholder());
        assert_eq!(plan[0].label(), "comments");
    }

    #[test]
    fn test_unlistable_refactored_dir_gets_sample_placeholder() {
        let tree = MockTree::default()
            .with_dir("/corpus", vec![TreeEntry::dir("loops")])
            .with_dir("/corpus/loops", vec![TreeEntry::file("1.tests.rs")])
            .with_broken_dir("/corpus/loops/refactored");

        let plan = Discovery::new(tree, TestConfig::new()).discover().unwrap();

        assert_eq!(plan.len(), 1);
        assert!(plan[0].is_placeholder());
        assert_eq!(plan[0].label(), "loops-1");
    }

    #[test]
    fn test_two_categories_two_variants_each() {
        let tree = MockTree::default()
            .with_dir(
                "/corpus",
                vec![TreeEntry::dir("alpha"), TreeEntry::dir("beta"), TreeEntry::dir("gamma")],
            )
            .with_dir("/corpus/alpha", vec![TreeEntry::file("1.tests.rs"), TreeEntry::dir("refactored")])
            .with_dir(
                "/corpus/alpha/refactored",
                vec![TreeEntry::file("1_v2.rs"), TreeEntry::file("1_v1.rs")],
            )
            .with_broken_dir("/corpus/beta")
            .with_dir("/corpus/gamma", vec![TreeEntry::file("1.tests.rs"), TreeEntry::dir("refactored")])
            .with_dir(
                "/corpus/gamma/refactored",
                vec![TreeEntry::file("1_v1.rs"), TreeEntry::file("1_v2.rs")],
            );

        let plan = Discovery::new(tree, TestConfig::new()).discover().unwrap();

        assert_eq!(
            labels(&plan),
            vec!["alpha-1-v1", "alpha-1-v2", "beta", "gamma-1-v1", "gamma-1-v2"]
        );
        assert_eq!(plan.iter().filter(|entry| entry.is_placeholder()).count(), 1);
    }

    #[test]
    fn test_category_without_refactored_dir_plans_nothing() {
        let tree = MockTree::default()
            .with_dir("/corpus", vec![TreeEntry::dir("loops")])
            .with_dir("/corpus/loops", vec![TreeEntry::file("1.rs"), TreeEntry::file("1.tests.rs")]);

        let plan = Discovery::new(tree, TestConfig::new()).discover().unwrap();

        assert!(plan.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let tree = loops_tree().with_dir(
            "/corpus",
            vec![TreeEntry::dir("loops"), TreeEntry::dir("comments")],
        );
        let mut config = TestConfig::new();
        config.categories = vec!["loops".to_string()];

        let plan = Discovery::new(tree, config).discover().unwrap();

        assert!(plan.iter().all(|entry| entry.label().starts_with("loops")));
    }

    #[test]
    fn test_unlistable_root_is_an_error() {
        let tree = MockTree::default().with_broken_dir("/corpus");
        let result = Discovery::new(tree, TestConfig::new()).discover();
        assert!(matches!(result, Err(HarnessError::Listing { .. })));
    }
}
