use super::*;
use crate::server::{
    controller::system::{root, test_database},
    model::diagnostic::{DATABASE_CONNECTED, DATABASE_NOT_INITIALIZED},
};

/// Tests the liveness message.
///
/// Expected: 200 with the running message
#[tokio::test]
async fn root_reports_running() {
    let (status, body) = read_json(root().await.into_response()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API Mod APK Hub berjalan");
}

/// Tests diagnostics against a connected database.
///
/// Expected: 200 with connected status and the catalog tables
#[tokio::test]
async fn reports_connected_database() {
    let test = catalog().await;

    let response = test_database(State(state_for(&test))).await.into_response();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], DATABASE_CONNECTED);
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "modhub");
    assert_eq!(body["collections"].as_array().unwrap().len(), 4);
}

/// Tests diagnostics when the database never connected.
///
/// Expected: 200 with the not-initialized status and null environment fields
#[tokio::test]
async fn reports_missing_database_without_error() {
    let response = test_database(State(disconnected_state())).await.into_response();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], DATABASE_NOT_INITIALIZED);
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], Value::Null);
    assert_eq!(body["collections"], serde_json::json!([]));
}
