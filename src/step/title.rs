//! Pure functions for cleaning up a resolved process title
//!
//! A title template may still contain `{...}` placeholders after variable
//! resolution when the host did not recognize a variable. The same pattern
//! is used to report and to strip them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for unresolved placeholders, matched non-greedily
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("Valid regex pattern"));

/// Pure: Remove every space character, then trim surrounding whitespace
///
/// ```
/// use rename_process_step::step::title::normalize_title;
///
/// assert_eq!(normalize_title("  foo bar \t"), "foobar");
/// ```
pub fn normalize_title(title: &str) -> String {
    title.replace(' ', "").trim().to_string()
}

/// Pure: Check whether a title still holds a placeholder opening brace
pub fn has_placeholders(title: &str) -> bool {
    title.contains('{')
}

/// Pure: Names inside every `{...}` placeholder, in order of occurrence
///
/// Duplicates are kept, one entry per occurrence.
pub fn unresolved_variables(title: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(title)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Pure: Remove every `{...}` placeholder
pub fn strip_placeholders(title: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(title, "").into_owned()
}

/// Pure: A title is blank when it is empty or whitespace only
pub fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}
