//! Verse lookup — validates a request, calls the model once, parses the reply.
//!
//! Flow: validate → build prompt → provider.complete → parse_verses → display_verses.
//! Nothing is persisted; a failed call leaves no state behind.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::verses::models::{
    BibleVersion, Language, VerseLookupRequest, VerseLookupResponse, VerseRequest,
};
use crate::verses::parser::{display_verses, parse_verses};
use crate::verses::prompts::build_verse_prompt;

/// Resolves an optional language code, defaulting to English.
pub fn parse_language(code: Option<&str>) -> Result<Language, AppError> {
    match code {
        None => Ok(Language::default()),
        Some(code) => Language::from_code(code).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported language '{code}'. Expected one of: en, es, fr"
            ))
        }),
    }
}

/// Turns the wire request into a `VerseRequest`, rejecting empty problem text.
pub fn validate_lookup(request: VerseLookupRequest) -> Result<VerseRequest, AppError> {
    let problem_text = request.problem_text.trim();
    if problem_text.is_empty() {
        return Err(AppError::Validation(
            "problem_text cannot be empty".to_string(),
        ));
    }

    let language = parse_language(request.language.as_deref())?;

    let bible_version = request
        .bible_version
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| BibleVersion::default().code().to_string());

    Ok(VerseRequest {
        problem_text: problem_text.to_string(),
        bible_version,
        language,
    })
}

/// Runs one lookup against the provider.
pub async fn lookup_verses(
    provider: &dyn CompletionProvider,
    request: VerseRequest,
) -> Result<VerseLookupResponse, AppError> {
    let request_id = Uuid::new_v4();
    info!(
        "Verse lookup {request_id}: version={} language={:?}",
        request.bible_version, request.language
    );

    let prompt = build_verse_prompt(&request);
    debug!("Verse lookup {request_id} prompt: {prompt}");

    let content = provider.complete(&prompt).await?;

    let verses = parse_verses(&content);
    let shown = display_verses(&verses);
    info!(
        "Verse lookup {request_id}: parsed {} fragments, {} displayed",
        verses.len(),
        shown.len()
    );

    Ok(VerseLookupResponse {
        request_id,
        bible_version: request.bible_version,
        language: request.language,
        verses,
        display_verses: shown,
    })
}
