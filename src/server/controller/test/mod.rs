use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{
    extract::{ApiJson, ApiQuery},
    state::AppState,
};

mod system;

/// Creates a test context holding every catalog table.
async fn catalog() -> TestContext {
    TestBuilder::new().with_catalog_tables().build().await.unwrap()
}

/// Builds state backed by the test database.
fn state_for(test: &TestContext) -> AppState {
    AppState::new(test.db.clone(), true, Some("modhub".to_string()))
}

/// Builds state for a server whose database never connected.
fn disconnected_state() -> AppState {
    AppState::new(None, false, None)
}

/// Splits a response into its status and JSON body.
async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}
