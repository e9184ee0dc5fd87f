use anyhow::Result;
use smell_corpus::refactor::extract::extract_categories;
use smell_corpus::refactor::{fence_language, ExtractOutcome, RefactorRequest};
use smell_corpus::{CorpusSettings, Discovery, HarnessError, LocalTree, PlanEntry};
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "pub struct Api {\n    items: Vec<i64>,\n}\n";
const SPEC: &str = "pub fn spec<A: Default>() {}\n";

#[test]
fn test_prompt_then_extract_adds_a_variant() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let category_dir = root.join("loops");
    let refactored_dir = category_dir.join("refactored");
    fs::create_dir_all(&refactored_dir)?;
    fs::write(category_dir.join("1.rs"), SAMPLE)?;
    fs::write(category_dir.join("1.tests.rs"), SPEC)?;
    fs::write(refactored_dir.join("1_1.txt"), "No code this time.")?;

    let request = RefactorRequest::load(&LocalTree, &category_dir, "1", "rs")?;
    assert_eq!(request.lang, "rust");
    assert!(request.user_prompt().contains("```rust\npub struct Api {"));

    let completion = request.completion_path(&LocalTree, &refactored_dir)?;
    assert_eq!(completion, refactored_dir.join("1_2.txt"));

    fs::write(
        &completion,
        "Step 1: Loops.\n\n```rust\npub struct Api {\n    total: i64,\n}\n```\n",
    )?;

    let outcomes = extract_categories(
        &LocalTree,
        root,
        &["loops".to_string(), "missing".to_string()],
        "refactored",
        "rs",
        fence_language("rs"),
    )?;

    assert_eq!(
        outcomes,
        vec![
            ExtractOutcome::NoCode {
                completion: refactored_dir.join("1_1.txt"),
            },
            ExtractOutcome::Written {
                completion: refactored_dir.join("1_2.txt"),
                source: refactored_dir.join("1_2.rs"),
            },
        ]
    );
    assert_eq!(
        fs::read_to_string(refactored_dir.join("1_2.rs"))?,
        "pub struct Api {\n    total: i64,\n}\n"
    );

    let settings = CorpusSettings {
        root: root.to_path_buf(),
        ..CorpusSettings::default()
    };
    let plan = Discovery::new(LocalTree, &settings).discover()?;
    let labels: Vec<String> = plan.iter().map(PlanEntry::label).collect();
    assert_eq!(labels, vec!["loops-1-2"]);
    Ok(())
}

#[test]
fn test_empty_spec_refuses_prompt() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let category_dir = temp_dir.path().join("lazy_element");
    fs::create_dir_all(&category_dir)?;
    fs::write(category_dir.join("3.rs"), SAMPLE)?;
    fs::write(category_dir.join("3.tests.rs"), "  \n")?;

    let result = RefactorRequest::load(&LocalTree, &category_dir, "3", "rs");

    match result {
        Err(HarnessError::EmptyTestSpec { category, sample }) => {
            assert_eq!(category, "lazy_element");
            assert_eq!(sample, "3");
        }
        other => panic!("expected EmptyTestSpec, got {:?}", other),
    }
    Ok(())
}
