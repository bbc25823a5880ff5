//! Response parser — turns the model's numbered reply into discrete verse entries.
//!
//! The split is lenient: no count check, no citation check, no numbering
//! continuity check. Markers are matched anywhere, not only at line starts,
//! so a citation such as "Psalm 23:4. " also splits.

use std::sync::OnceLock;

use regex::Regex;

/// "<digits>. " list marker, one or more whitespace characters after the period.
const LIST_MARKER_PATTERN: &str = r"[0-9]+\.\s+";

fn list_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(LIST_MARKER_PATTERN).expect("list marker pattern is valid"))
}

/// Removes emphasis asterisks and surrounding whitespace.
fn clean_fragment(fragment: &str) -> String {
    fragment.replace('*', "").trim().to_string()
}

/// Splits raw completion text into verse strings.
///
/// Falls back to the whole cleaned content as a single entry when the split
/// leaves nothing usable.
pub fn parse_verses(content: &str) -> Vec<String> {
    let verses: Vec<String> = list_marker()
        .split(content)
        .map(clean_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if verses.is_empty() {
        return vec![clean_fragment(content)];
    }

    verses
}

/// The verses the UI renders: parser output minus its first element, which
/// is assumed to be the model's introductory sentence.
pub fn display_verses(verses: &[String]) -> Vec<String> {
    verses.iter().skip(1).cloned().collect()
}
