//! Export — renders a displayed verse list as a downloadable Markdown document.

use chrono::{DateTime, Utc};

use crate::verses::localization::ui_strings;
use crate::verses::models::Language;

pub const EXPORT_FILENAME: &str = "verses-for-the-soul.md";
pub const EXPORT_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Builds the document body. Verses are numbered from 1 in the given order.
pub fn render_markdown(verses: &[String], language: Language, generated_at: DateTime<Utc>) -> String {
    let strings = ui_strings(language);
    let mut doc = String::new();

    doc.push_str("# Verses for the Soul\n\n");
    doc.push_str(strings.results_heading);
    doc.push_str("\n\n");

    for (i, verse) in verses.iter().enumerate() {
        // indent continuation lines so multi-line verses stay inside their list item
        let body = verse.trim().replace('\n', "\n   ");
        doc.push_str(&format!("{}. {}\n\n", i + 1, body));
    }

    doc.push_str(&format!(
        "---\n_Generated {}_\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    doc
}
