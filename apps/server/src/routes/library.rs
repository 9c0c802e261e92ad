//! Library endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::services::library::LibraryStatus;
use crate::AppState;

/// GET /api/library
pub async fn status(State(state): State<AppState>) -> Result<Json<LibraryResponse>> {
    Ok(Json(to_response(state.library.status().await)))
}

/// POST /api/library/reload
pub async fn reload(State(state): State<AppState>) -> Result<Json<LibraryResponse>> {
    Ok(Json(to_response(state.library.reload().await)))
}

fn to_response(status: LibraryStatus) -> LibraryResponse {
    match status {
        LibraryStatus::Loading => LibraryResponse {
            state: LoadState::Loading,
            message: None,
            updated_at: None,
            word_count: 0,
            sets: Vec::new(),
            skipped: Vec::new(),
        },
        LibraryStatus::Loaded {
            library,
            skipped,
            loaded_at,
        } => LibraryResponse {
            state: LoadState::Loaded,
            message: None,
            updated_at: Some(loaded_at),
            word_count: library.word_count(),
            sets: SetSummary::all(&library),
            skipped,
        },
        LibraryStatus::Failed { message, failed_at } => LibraryResponse {
            state: LoadState::Failed,
            message: Some(message),
            updated_at: Some(failed_at),
            word_count: 0,
            sets: Vec::new(),
            skipped: Vec::new(),
        },
    }
}
