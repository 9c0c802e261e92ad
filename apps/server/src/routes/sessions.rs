//! Session and set selection endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/sessions
pub async fn create(State(state): State<AppState>) -> Result<(StatusCode, Json<SessionResponse>)> {
    let id = state.sessions.create()?;
    let session = load(&state, id).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    Ok(Json(load(&state, id).await?))
}

/// DELETE /api/sessions/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/:id/selection
pub async fn update_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<SelectionView>> {
    let library = state.library.current().await?;

    let view = state.sessions.with_session(id, |entry| {
        entry.selection.retain_known(&library);
        match &req {
            SelectionRequest::Toggle { set_id } => {
                entry.selection.toggle(&library, set_id);
            }
            SelectionRequest::SelectAll => entry.selection.select_all(&library),
            SelectionRequest::ClearAll => entry.selection.clear_all(),
        }
        Ok(SelectionView::new(&entry.selection, &library))
    })?;

    tracing::debug!(session = %id, action = ?req, "Selection updated");
    Ok(Json(view))
}

/// Session state against whatever library is loaded; an empty one if none is.
async fn load(state: &AppState, id: Uuid) -> Result<SessionResponse> {
    let library = state.library.current().await.unwrap_or_default();

    state.sessions.with_session(id, |entry| {
        Ok(SessionResponse {
            id,
            created_at: entry.created_at,
            selection: SelectionView::new(&entry.selection, &library),
            game: entry.game.as_ref().map(GameResponse::from),
        })
    })
}
