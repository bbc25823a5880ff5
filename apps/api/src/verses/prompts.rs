// Prompt constants and the prompt builder for verse lookups.

use crate::verses::models::{full_version_name, Language, VerseRequest};

/// Number of verses requested from the model.
pub const VERSE_COUNT: u32 = 21;

/// Verse lookup prompt template.
/// Replace: {problem}, {count}, {version}
pub const VERSE_PROMPT_TEMPLATE: &str = "Search for the solution of the problem: {problem} \
    and give {count} direct answers in the form of Bible verses from the {version} \
    that sympathize and provide guidance. \
    For each verse, expand on its meaning with an additional 20-30 words of explanation \
    or context while preserving the original message. \
    Make sure each verse and explanation are clearly connected.";

/// Suffixed to the problem text for non-English requests. Replace: {language}
pub const LANGUAGE_INSTRUCTION_TEMPLATE: &str = " - generate in {language}";

/// Builds the single user message sent upstream.
///
/// The problem text is embedded as-is; the caller has already ensured it is
/// non-empty.
pub fn build_verse_prompt(request: &VerseRequest) -> String {
    let mut problem = request.problem_text.clone();
    if request.language != Language::En {
        problem.push_str(
            &LANGUAGE_INSTRUCTION_TEMPLATE.replace("{language}", request.language.english_name()),
        );
    }

    VERSE_PROMPT_TEMPLATE
        .replace("{count}", &VERSE_COUNT.to_string())
        .replace("{version}", full_version_name(&request.bible_version))
        // last, so braces inside user text are never treated as placeholders
        .replace("{problem}", &problem)
}
