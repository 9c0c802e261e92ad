//! Game endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use vocab_core::GameSession;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/sessions/:id/game
///
/// Starts a game over the selected sets. A previous game is discarded even
/// when the new one cannot start.
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StartGameRequest>,
) -> Result<Json<GameResponse>> {
    let library = state.library.current().await?;

    let response = state.sessions.with_session(id, |entry| {
        entry.game = None;
        if entry.selection.is_empty() {
            return Err(ApiError::BadRequest("no sets selected".to_string()));
        }

        let pool = entry.selection.active_pool(&library);
        let game = GameSession::with_entropy(req.mode, pool)?;
        let response = GameResponse::from(&game);
        entry.game = Some(game);
        Ok(response)
    })?;

    tracing::info!(
        session = %id,
        mode = %req.mode,
        pool = response.pool_size,
        "Game started"
    );
    Ok(Json(response))
}

/// GET /api/sessions/:id/game
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameResponse>> {
    let response = state.sessions.with_session(id, |entry| {
        entry
            .game
            .as_ref()
            .map(GameResponse::from)
            .ok_or_else(no_game)
    })?;
    Ok(Json(response))
}

/// DELETE /api/sessions/:id/game
pub async fn stop(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state.sessions.with_session(id, |entry| {
        entry.game = None;
        Ok(())
    })?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/:id/game/actions
pub async fn act(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<GameAction>,
) -> Result<Json<GameResponse>> {
    let response = state.sessions.with_session(id, |entry| {
        let game = entry.game.as_mut().ok_or_else(no_game)?;
        game.dispatch(action)?;
        Ok(GameResponse::from(&*game))
    })?;
    Ok(Json(response))
}

fn no_game() -> ApiError {
    ApiError::Conflict("no game in progress".to_string())
}
