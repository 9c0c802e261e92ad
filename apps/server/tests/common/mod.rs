//! Common test utilities for the API integration tests.
//!
//! Each `TestContext` owns a temporary site root holding a manifest and set
//! files, and a router over a library loaded from it.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::Path;

use axum::Router;
use chrono::Duration;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use vocab_quiz_server::config::SourceLocation;
use vocab_quiz_server::services::library::LibraryService;
use vocab_quiz_server::services::sessions::SessionStore;
use vocab_quiz_server::services::source::VocabSource;
use vocab_quiz_server::{router, AppState};

pub const MANIFEST_PATH: &str = "data/manifest.json";

pub struct TestContext {
    pub dir: TempDir,
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context over the default fixtures, already loaded.
    pub async fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_json(MANIFEST_PATH, &fixtures::default_manifest());
        ctx.write_json("data/animals.json", &fixtures::animals_set());
        ctx.write_json("data/fruits.json", &fixtures::fruits_set());
        ctx.write_json("data/tiny.json", &fixtures::tiny_set());
        ctx.state.library.reload().await;
        ctx
    }

    /// Context with an empty site root and nothing loaded yet.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let library = LibraryService::new(
            VocabSource::new(SourceLocation::Directory(dir.path().to_path_buf())),
            MANIFEST_PATH,
        );
        let state = AppState::new(library, SessionStore::new(Duration::minutes(30)));
        let app = router(state.clone());

        Self { dir, state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    pub fn write_json(&self, relative: &str, value: &Value) {
        self.write(relative, &value.to_string());
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(path, content).expect("Failed to write fixture");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.dir.path().join(relative)).expect("Failed to remove fixture");
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Create a session and return its id.
pub async fn create_session(server: &TestServer) -> String {
    let response = server.post("/api/sessions").await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().expect("session id").to_string()
}

/// Create a session with the given sets selected.
pub async fn session_with_sets(server: &TestServer, set_ids: &[&str]) -> String {
    let id = create_session(server).await;
    for set_id in set_ids {
        server
            .post(&format!("/api/sessions/{}/selection", id))
            .json(&json!({ "action": "toggle", "set_id": set_id }))
            .await
            .assert_status_ok();
    }
    id
}

/// Start a game and return the response body.
pub async fn start_game(server: &TestServer, session: &str, mode: &str) -> Value {
    let response = server
        .post(&format!("/api/sessions/{}/game", session))
        .json(&json!({ "mode": mode }))
        .await;
    response.assert_status_ok();
    response.json()
}

/// Send one game action and return the response body.
pub async fn act(server: &TestServer, session: &str, action: &Value) -> Value {
    let response = server
        .post(&format!("/api/sessions/{}/game/actions", session))
        .json(action)
        .await;
    response.assert_status_ok();
    response.json()
}
