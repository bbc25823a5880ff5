//! Axum route handlers for the Verses API.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::verses::export::{render_markdown, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
use crate::verses::localization::{ui_strings, UiStrings};
use crate::verses::lookup::{lookup_verses, parse_language, validate_lookup};
use crate::verses::models::{
    BibleVersion, ExportRequest, VerseLookupRequest, VerseLookupResponse, VersionInfo,
};

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

/// POST /api/v1/verses
///
/// Builds the prompt, calls the model once and returns the parsed verses.
pub async fn handle_lookup(
    State(state): State<AppState>,
    Json(request): Json<VerseLookupRequest>,
) -> Result<Json<VerseLookupResponse>, AppError> {
    let request = validate_lookup(request)?;
    let response = lookup_verses(state.llm.as_ref(), request).await?;
    Ok(Json(response))
}

/// GET /api/v1/versions
pub async fn handle_list_versions() -> Json<Vec<VersionInfo>> {
    Json(BibleVersion::ALL.into_iter().map(VersionInfo::from).collect())
}

/// GET /api/v1/localization?language=es
pub async fn handle_localization(
    Query(query): Query<LanguageQuery>,
) -> Result<Json<UiStrings>, AppError> {
    let language = parse_language(query.language.as_deref())?;
    Ok(Json(ui_strings(language)))
}

/// POST /api/v1/verses/export
///
/// Returns the given verses as a Markdown attachment.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.verses.is_empty() {
        return Err(AppError::Validation("verses cannot be empty".to_string()));
    }

    let language = parse_language(request.language.as_deref())?;
    let document = render_markdown(&request.verses, language, Utc::now());

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        document,
    ))
}
