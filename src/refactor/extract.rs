use crate::core::CorpusTree;
use crate::refactor::prompt::COMPLETION_EXTENSION;
use crate::utils::error::{HarnessError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Written { completion: PathBuf, source: PathBuf },
    NoCode { completion: PathBuf },
}

/// The first fenced block tagged `lang`, trimmed. An unterminated block runs to the end.
pub fn extract_code_block(completion: &str, lang: &str) -> Option<String> {
    let pattern = format!(r"(?s)```{}\b[^\n]*\n(.*?)(?:```|\z)", regex::escape(lang));
    let re = Regex::new(&pattern).ok()?;

    let code = re.captures(completion)?.get(1)?.as_str().trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}

/// Writes `<stem>.<ext>` next to every `<stem>.txt` completion that contains a code block.
/// A missing refactored directory yields no outcomes.
pub fn extract_completions<T: CorpusTree>(
    tree: &T,
    refactored_dir: &Path,
    extension: &str,
    lang: &str,
) -> Result<Vec<ExtractOutcome>> {
    if !tree.is_dir(refactored_dir) {
        tracing::warn!("Refactored directory not found: {}", refactored_dir.display());
        return Ok(Vec::new());
    }

    let dotted = format!(".{}", COMPLETION_EXTENSION);
    let mut completions: Vec<String> = tree
        .list_dir(refactored_dir)?
        .into_iter()
        .filter(|entry| !entry.is_dir && entry.name.ends_with(&dotted))
        .map(|entry| entry.name)
        .collect();
    completions.sort();

    let mut outcomes = Vec::with_capacity(completions.len());
    for name in completions {
        let completion = refactored_dir.join(&name);
        let content = tree.read_file(&completion)?;

        match extract_code_block(&content, lang) {
            Some(code) => {
                let stem = name.trim_end_matches(&dotted);
                let source = refactored_dir.join(format!("{}.{}", stem, extension));
                tree.write_file(&source, &format!("{}\n", code))?;
                tracing::info!("Extracted {} code written to: {}", lang, source.display());
                outcomes.push(ExtractOutcome::Written { completion, source });
            }
            None => {
                tracing::warn!("No {} code found in: {}", lang, completion.display());
                outcomes.push(ExtractOutcome::NoCode { completion });
            }
        }
    }

    Ok(outcomes)
}

/// Runs `extract_completions` over several categories. Categories whose folder cannot be
/// listed are logged and skipped.
pub fn extract_categories<T: CorpusTree>(
    tree: &T,
    root: &Path,
    categories: &[String],
    refactored_dir: &str,
    extension: &str,
    lang: &str,
) -> Result<Vec<ExtractOutcome>> {
    let mut outcomes = Vec::new();

    for category in categories {
        tracing::info!("Extracting {} code for {}...", lang, category);
        let dir = root.join(category).join(refactored_dir);
        match extract_completions(tree, &dir, extension, lang) {
            Ok(found) => outcomes.extend(found),
            Err(e @ HarnessError::Listing { .. }) => {
                tracing::warn!("Skipping {}: {}", category, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalTree;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_first_tagged_block() {
        let completion = "Step 1: Loops.\n\n```text\nnot this\n```\n\n```rust\nfn total() -> i64 {\n    0\n}\n```\n\n```rust\nfn second() {}\n```";

        assert_eq!(
            extract_code_block(completion, "rust").as_deref(),
            Some("fn total() -> i64 {\n    0\n}")
        );
    }

    #[test]
    fn test_extract_ignores_other_languages() {
        assert_eq!(extract_code_block("```rusty\nx\n```", "rust"), None);
        assert_eq!(extract_code_block("no code here", "javascript"), None);
        assert_eq!(
            extract_code_block("```javascript\nclass API {}", "javascript").as_deref(),
            Some("class API {}")
        );
    }

    #[test]
    fn test_extract_completions_writes_sources() {
        let temp_dir = TempDir::new().unwrap();
        let refactored = temp_dir.path().join("refactored");
        fs::create_dir(&refactored).unwrap();
        fs::write(refactored.join("1_1.txt"), "Here:\n```rust\npub struct Api;\n```").unwrap();
        fs::write(refactored.join("1_2.txt"), "I could not refactor this.").unwrap();
        fs::write(refactored.join("1_opt-4.rs"), "pub struct Api;").unwrap();

        let outcomes = extract_completions(&LocalTree, &refactored, "rs", "rust").unwrap();

        assert_eq!(
            outcomes,
            vec![
                ExtractOutcome::Written {
                    completion: refactored.join("1_1.txt"),
                    source: refactored.join("1_1.rs"),
                },
                ExtractOutcome::NoCode {
                    completion: refactored.join("1_2.txt"),
                },
            ]
        );
        assert_eq!(
            fs::read_to_string(refactored.join("1_1.rs")).unwrap(),
            "pub struct Api;\n"
        );
        assert!(!refactored.join("1_2.rs").exists());
    }

    #[test]
    fn test_missing_refactored_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();

        let outcomes =
            extract_completions(&LocalTree, &temp_dir.path().join("refactored"), "rs", "rust")
                .unwrap();

        assert!(outcomes.is_empty());
    }
}
