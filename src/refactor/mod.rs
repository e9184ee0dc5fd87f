//! Tooling around the corpus: building refactoring prompts for a sample and turning saved
//! completions back into variant source files.

pub mod extract;
pub mod prompt;

pub use extract::{extract_code_block, extract_completions, ExtractOutcome};
pub use prompt::{build_system_prompt, build_user_prompt, RefactorRequest};

/// Language tag used on fenced code blocks for files with this extension.
pub fn fence_language(extension: &str) -> &str {
    match extension {
        "rs" => "rust",
        "js" => "javascript",
        "ts" => "typescript",
        "py" => "python",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_language() {
        assert_eq!(fence_language("rs"), "rust");
        assert_eq!(fence_language("js"), "javascript");
        assert_eq!(fence_language("go"), "go");
    }
}
