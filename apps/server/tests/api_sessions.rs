//! Session and selection API tests.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use common::{create_session, session_with_sets, start_game, TestContext};

#[tokio::test]
async fn test_create_session() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.post("/api/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();

    assert!(body["id"].is_string());
    assert!(body["game"].is_null());
    assert_eq!(body["selection"]["can_prepare"], false);
    assert_eq!(body["selection"]["total_selected_words"], 0);
    assert_eq!(body["selection"]["sets"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_unknown_session() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server
        .get("/api/sessions/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_delete_session() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    server
        .delete(&format!("/api/sessions/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/sessions/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_selection() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    let response = server
        .post(&format!("/api/sessions/{}/selection", id))
        .json(&json!({ "action": "toggle", "set_id": "fruits" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["selected_ids"], json!(["fruits"]));
    assert_eq!(body["total_selected_words"], 3);
    assert_eq!(body["can_prepare"], true);
    assert_eq!(body["sets"][1]["selected"], true);
    assert_eq!(body["sets"][0]["selected"], false);

    let body: Value = server
        .post(&format!("/api/sessions/{}/selection", id))
        .json(&json!({ "action": "toggle", "set_id": "fruits" }))
        .await
        .json();
    assert_eq!(body["selected_ids"], json!([]));
    assert_eq!(body["can_prepare"], false);
}

#[tokio::test]
async fn test_toggle_unknown_set_is_ignored() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    let body: Value = server
        .post(&format!("/api/sessions/{}/selection", id))
        .json(&json!({ "action": "toggle", "set_id": "nope" }))
        .await
        .json();
    assert_eq!(body["selected_ids"], json!([]));
}

#[tokio::test]
async fn test_select_all_and_clear_all() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    let body: Value = server
        .post(&format!("/api/sessions/{}/selection", id))
        .json(&json!({ "action": "select_all" }))
        .await
        .json();
    assert_eq!(body["selected_ids"], json!(["animals", "fruits", "tiny"]));
    assert_eq!(body["total_selected_words"], 11);

    let body: Value = server
        .post(&format!("/api/sessions/{}/selection", id))
        .json(&json!({ "action": "clear_all" }))
        .await
        .json();
    assert_eq!(body["selected_ids"], json!([]));
    assert_eq!(body["total_selected_words"], 0);
}

#[tokio::test]
async fn test_selection_is_reflected_in_session() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = session_with_sets(&server, &["tiny", "animals"]).await;

    let body: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
    assert_eq!(
        body["selection"]["selected_ids"],
        json!(["animals", "tiny"])
    );
    assert_eq!(body["selection"]["total_selected_words"], 8);
}

#[tokio::test]
async fn test_start_game_without_selection() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    let response = server
        .post(&format!("/api/sessions/{}/game", id))
        .json(&json!({ "mode": "matching" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_start_game_with_unknown_mode() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = session_with_sets(&server, &["animals"]).await;

    let response = server
        .post(&format!("/api/sessions/{}/game", id))
        .json(&json!({ "mode": "crossword" }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_game_shows_in_session_and_can_be_stopped() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = session_with_sets(&server, &["animals"]).await;

    start_game(&server, &id, "reverse_match").await;

    let body: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
    assert_eq!(body["game"]["mode"], "reverse_match");
    assert_eq!(body["game"]["rounds_started"], 1);

    server
        .delete(&format!("/api/sessions/{}/game", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
    assert!(body["game"].is_null());

    server
        .get(&format!("/api/sessions/{}/game", id))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_action_without_game_is_conflict() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    let response = server
        .post(&format!("/api/sessions/{}/game/actions", id))
        .json(&json!({ "type": "check" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_insufficient_data_keeps_mode_selection() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = session_with_sets(&server, &["tiny"]).await;

    let response = server
        .post(&format!("/api/sessions/{}/game", id))
        .json(&json!({ "mode": "matching" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "insufficient_data");

    let body: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
    assert!(body["game"].is_null());
}

#[tokio::test]
async fn test_failed_start_discards_previous_game() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = session_with_sets(&server, &["fruits"]).await;

    start_game(&server, &id, "matching").await;

    server
        .post(&format!("/api/sessions/{}/game", id))
        .json(&json!({ "mode": "reverse_match" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = server.get(&format!("/api/sessions/{}", id)).await.json();
    assert!(body["game"].is_null());
}

#[tokio::test]
async fn test_idle_session_expires() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let id = create_session(&server).await;

    ctx.state
        .sessions
        .with_session(id.parse().unwrap(), |entry| {
            entry.last_seen_at = Utc::now() - Duration::hours(1);
            Ok(())
        })
        .unwrap();

    server
        .get(&format!("/api/sessions/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
