//! File-name conventions of the corpus layout.
//!
//! ```text
//! <category>/<sample>.<ext>                       base sample
//! <category>/<sample>.tests.<ext>                 shared spec
//! <category>/refactored/<sample>_<tag>.<ext>      refactored variant
//! ```

/// Everything before the first dot: `1.tests.rs` -> `1`.
pub fn sample_number(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

pub fn is_spec_file(file_name: &str, tests_suffix: &str) -> bool {
    file_name.len() > tests_suffix.len() && file_name.ends_with(tests_suffix)
}

pub fn base_sample_file(sample: &str, extension: &str) -> String {
    format!("{}.{}", sample, extension)
}

/// Tag of a refactored variant of `sample`, or `None` when the file belongs elsewhere.
///
/// The tag is the stem after the first underscore, so `7_opt-2-3.rs` gives `opt-2-3`
/// and `10_1.rs` is not a variant of sample `1`.
pub fn variant_tag<'a>(file_name: &'a str, sample: &str, extension: &str) -> Option<&'a str> {
    let dotted_ext = format!(".{}", extension);
    if !file_name.ends_with(&dotted_ext) {
        return None;
    }

    let stem = sample_number(file_name);
    let tag = stem.strip_prefix(sample)?.strip_prefix('_')?;

    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Numeric samples first in numeric order, then anything else by name.
pub fn sample_order_key(file_name: &str) -> (u8, u64, String) {
    match sample_number(file_name).parse::<u64>() {
        Ok(n) => (0, n, file_name.to_string()),
        Err(_) => (1, 0, file_name.to_string()),
    }
}

/// Next `<sample>_<n>.<ext>` generation number among existing completion files.
pub fn next_generation_number<'a, I>(existing: I, sample: &str, extension: &str) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    existing
        .into_iter()
        .filter_map(|name| variant_tag(name, sample, extension))
        .filter_map(|tag| tag.parse::<u32>().ok())
        .max()
        .map_or(1, |n| n + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_number() {
        assert_eq!(sample_number("1.tests.rs"), "1");
        assert_eq!(sample_number("12.rs"), "12");
        assert_eq!(sample_number("mod"), "mod");
    }

    #[test]
    fn test_is_spec_file() {
        assert!(is_spec_file("1.tests.rs", ".tests.rs"));
        assert!(!is_spec_file("1.rs", ".tests.rs"));
        assert!(!is_spec_file(".tests.rs", ".tests.rs"));
        assert!(!is_spec_file("1.tests.js", ".tests.rs"));
    }

    #[test]
    fn test_variant_tag_keeps_hyphens_and_numbers() {
        assert_eq!(variant_tag("7_opt-2-3.rs", "7", "rs"), Some("opt-2-3"));
        assert_eq!(variant_tag("1_1.rs", "1", "rs"), Some("1"));
    }

    #[test]
    fn test_variant_tag_rejects_other_samples_and_extensions() {
        assert_eq!(variant_tag("10_1.rs", "1", "rs"), None);
        assert_eq!(variant_tag("1_1.txt", "1", "rs"), None);
        assert_eq!(variant_tag("1_.rs", "1", "rs"), None);
        assert_eq!(variant_tag("1.rs", "1", "rs"), None);
        assert_eq!(variant_tag("Exploration_1.rs", "1", "rs"), None);
    }

    #[test]
    fn test_sample_order_is_numeric() {
        let mut names = vec!["10.tests.rs", "2.tests.rs", "1.tests.rs", "a.tests.rs"];
        names.sort_by_key(|n| sample_order_key(n));
        assert_eq!(names, vec!["1.tests.rs", "2.tests.rs", "10.tests.rs", "a.tests.rs"]);
    }

    #[test]
    fn test_next_generation_number() {
        assert_eq!(next_generation_number(Vec::<&str>::new(), "1", "txt"), 1);
        assert_eq!(
            next_generation_number(vec!["1_1.txt", "1_3.txt", "1_opt-2.txt", "2_9.txt"], "1", "txt"),
            4
        );
        assert_eq!(next_generation_number(vec!["1_opt-2.txt"], "1", "txt"), 1);
    }
}
