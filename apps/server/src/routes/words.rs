//! Word lookup endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let library = state.library.current().await?;
    let results = vocab_core::search(&library, &query.q)
        .into_iter()
        .map(Flashcard::from)
        .collect();

    Ok(Json(SearchResponse {
        query: query.q,
        results,
    }))
}

/// GET /api/word-of-the-day
pub async fn word_of_the_day(
    State(state): State<AppState>,
) -> Result<Json<WordOfTheDayResponse>> {
    let library = state.library.current().await?;
    let today = Utc::now().date_naive();

    vocab_core::word_of_the_day(&library, today)
        .map(|featured| Json(featured.into()))
        .ok_or_else(|| ApiError::NotFound("no words loaded".to_string()))
}
