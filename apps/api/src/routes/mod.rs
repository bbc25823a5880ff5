pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::verses::handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/versions", get(handlers::handle_list_versions))
        .route("/api/v1/localization", get(handlers::handle_localization))
        .route("/api/v1/verses", post(handlers::handle_lookup))
        .route("/api/v1/verses/export", post(handlers::handle_export))
        .fallback(not_found)
        .with_state(state)
}
