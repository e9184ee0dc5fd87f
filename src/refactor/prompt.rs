use crate::core::naming::{base_sample_file, next_generation_number as next_tagged_number};
use crate::core::CorpusTree;
use crate::refactor::fence_language;
use crate::utils::error::{HarnessError, Result};
use std::path::{Path, PathBuf};

pub const COMPLETION_EXTENSION: &str = "txt";

const CODE_SMELLS: [&str; 24] = [
    "Alternative Classes with Different Interfaces",
    "Comments",
    "Data Class",
    "Data Clumps",
    "Divergent Change",
    "Duplicated Code",
    "Feature Envy",
    "Global Data",
    "Insider Trading",
    "Large Class",
    "Lazy Element",
    "Long Function",
    "Long Parameter List",
    "Loops",
    "Message Chains",
    "Middle Man",
    "Mutable Data",
    "Mysterious Name",
    "Primitive Obsession",
    "Refused Bequest",
    "Repeated Switches",
    "Shotgun Surgery",
    "Speculative Generality",
    "Temporary Field",
];

pub fn build_system_prompt() -> String {
    let mut prompt = String::from(
        "You are a software engineer proficient in refactoring code. \
         Here is a list of code smells you know:",
    );
    for smell in CODE_SMELLS {
        prompt.push_str("\n- ");
        prompt.push_str(smell);
    }
    prompt
}

pub fn build_user_prompt(code: &str, tests: &str, lang: &str) -> String {
    format!(
        "Refactor the code to improve readability and maintainability. \
         Ensure the refactored code still passes all tests and the test file remains the same. \
         Ensure the external behavior of the code remains the same by maintaining the structure of the API. \
         Let's solve this step by step to be sure you don't miss anything:\n\
         Step 1: Identify the code smell in the code.\n\
         Step 2: Write down the definition of the code smell you identified.\n\
         Step 3: Refactor the code.\n\
         \n\
         Code:\n```{lang}\n{code}\n```\n\
         \n\
         Tests:\n```{lang}\n{tests}\n```",
        lang = lang,
        code = code.trim_end(),
        tests = tests.trim_end(),
    )
}

/// `1 + ` the largest numeric generation among `<sample>_<n>.txt` completions, or 1.
pub fn next_generation_number<'a, I>(existing: I, sample: &str) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    next_tagged_number(existing, sample, COMPLETION_EXTENSION)
}

pub fn completion_file_name(sample: &str, generation: u32) -> String {
    format!("{}_{}.{}", sample, generation, COMPLETION_EXTENSION)
}

/// One sample's code and spec, ready to be sent for refactoring.
#[derive(Debug, Clone)]
pub struct RefactorRequest {
    pub sample: String,
    pub code_path: PathBuf,
    pub code: String,
    pub tests: String,
    pub lang: String,
}

impl RefactorRequest {
    /// Reads `<sample>.<ext>` and `<sample>.tests.<ext>`. An empty spec means there is
    /// nothing to hold a refactoring to, so the sample is refused.
    pub fn load<T: CorpusTree>(
        tree: &T,
        category_dir: &Path,
        sample: &str,
        extension: &str,
    ) -> Result<Self> {
        let code_path = category_dir.join(base_sample_file(sample, extension));
        let tests_path = category_dir.join(format!("{}.tests.{}", sample, extension));

        let code = tree.read_file(&code_path)?;
        let tests = tree.read_file(&tests_path)?;

        if tests.trim().is_empty() {
            let category = category_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(HarnessError::EmptyTestSpec {
                category,
                sample: sample.to_string(),
            });
        }

        Ok(Self {
            sample: sample.to_string(),
            code_path,
            code,
            tests,
            lang: fence_language(extension).to_string(),
        })
    }

    pub fn system_prompt(&self) -> String {
        build_system_prompt()
    }

    pub fn user_prompt(&self) -> String {
        build_user_prompt(&self.code, &self.tests, &self.lang)
    }

    /// Where the next completion for this sample should be saved. A `refactored` folder that
    /// exists but cannot be listed is an error, since guessing could overwrite a completion.
    pub fn completion_path<T: CorpusTree>(
        &self,
        tree: &T,
        refactored_dir: &Path,
    ) -> Result<PathBuf> {
        let existing = if tree.is_dir(refactored_dir) {
            tree.list_dir(refactored_dir)?
        } else {
            Vec::new()
        };

        let generation = next_generation_number(
            existing
                .iter()
                .filter(|entry| !entry.is_dir)
                .map(|entry| entry.name.as_str()),
            &self.sample,
        );
        Ok(refactored_dir.join(completion_file_name(&self.sample, generation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalTree;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_system_prompt_lists_every_smell() {
        let prompt = build_system_prompt();

        assert!(prompt.starts_with("You are a software engineer"));
        assert_eq!(prompt.lines().filter(|line| line.starts_with("- ")).count(), 24);
        assert!(prompt.contains("- Refused Bequest"));
    }

    #[test]
    fn test_user_prompt_fences_code_and_tests() {
        let prompt = build_user_prompt("fn a() {}\n", "fn spec() {}", "rust");

        assert!(prompt.contains("Step 3: Refactor the code."));
        assert!(prompt.contains("Code:\n```rust\nfn a() {}\n```"));
        assert!(prompt.ends_with("Tests:\n```rust\nfn spec() {}\n```"));
    }

    #[test]
    fn test_next_generation_number() {
        assert_eq!(next_generation_number(Vec::<&str>::new(), "1"), 1);
        assert_eq!(
            next_generation_number(["1_1.txt", "1_3.txt", "1_opt-9.txt", "2_7.txt", "1_5.rs"], "1"),
            4
        );
    }

    #[test]
    fn test_load_rejects_empty_spec() {
        let temp_dir = TempDir::new().unwrap();
        let category_dir = temp_dir.path().join("comments");
        fs::create_dir(&category_dir).unwrap();
        fs::write(category_dir.join("1.rs"), "pub struct Api;").unwrap();
        fs::write(category_dir.join("1.tests.rs"), "  \n").unwrap();

        let result = RefactorRequest::load(&LocalTree, &category_dir, "1", "rs");

        match result {
            Err(HarnessError::EmptyTestSpec { category, sample }) => {
                assert_eq!(category, "comments");
                assert_eq!(sample, "1");
            }
            other => panic!("expected EmptyTestSpec, got {:?}", other),
        }
    }

    #[test]
    fn test_completion_path_picks_next_generation() {
        let temp_dir = TempDir::new().unwrap();
        let category_dir = temp_dir.path().join("loops");
        let refactored = category_dir.join("refactored");
        fs::create_dir_all(&refactored).unwrap();
        fs::write(category_dir.join("2.rs"), "pub struct Api;").unwrap();
        fs::write(category_dir.join("2.tests.rs"), "pub fn spec() {}").unwrap();
        fs::write(refactored.join("2_1.txt"), "").unwrap();
        fs::write(refactored.join("2_2.txt"), "").unwrap();

        let request = RefactorRequest::load(&LocalTree, &category_dir, "2", "rs").unwrap();

        assert_eq!(request.lang, "rust");
        assert_eq!(
            request.completion_path(&LocalTree, &refactored).unwrap(),
            refactored.join("2_3.txt")
        );
    }

    #[test]
    fn test_completion_path_without_refactored_dir_starts_at_one() {
        let temp_dir = TempDir::new().unwrap();
        let request = RefactorRequest {
            sample: "4".to_string(),
            code_path: temp_dir.path().join("4.rs"),
            code: String::new(),
            tests: "pub fn spec() {}".to_string(),
            lang: "rust".to_string(),
        };
        let refactored = temp_dir.path().join("refactored");

        assert_eq!(
            request.completion_path(&LocalTree, &refactored).unwrap(),
            refactored.join("4_1.txt")
        );
    }

    struct UnlistableTree;

    impl CorpusTree for UnlistableTree {
        fn list_dir(&self, path: &Path) -> Result<Vec<crate::core::TreeEntry>> {
            Err(HarnessError::Listing {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn is_dir(&self, _path: &Path) -> bool {
            true
        }

        fn read_file(&self, _path: &Path) -> Result<String> {
            Ok(String::new())
        }

        fn write_file(&self, _path: &Path, _contents: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_completion_path_reports_unlistable_dir() {
        let request = RefactorRequest {
            sample: "1".to_string(),
            code_path: PathBuf::from("/corpus/loops/1.rs"),
            code: String::new(),
            tests: "pub fn spec() {}".to_string(),
            lang: "rust".to_string(),
        };

        let result =
            request.completion_path(&UnlistableTree, Path::new("/corpus/loops/refactored"));

        assert!(matches!(result, Err(HarnessError::Listing { .. })));
    }
}
