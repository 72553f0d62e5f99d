//! City API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_list_cities_without_points_of_interest() {
    let app = TestApp::new();

    let response = app.server.get("/api/cities").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "id": 2, "name": "Antwerp", "description": "The one with the cathedral that was never really finished." },
            { "id": 1, "name": "New York City", "description": "The one with that big park." },
            { "id": 3, "name": "Paris", "description": "The one with that big tower." }
        ])
    );
}

#[tokio::test]
async fn test_get_city_without_points_of_interest() {
    let app = TestApp::new();

    let response = app.server.get("/api/cities/1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "New York City");
    assert!(body.get("pointsOfInterest").is_none());
    assert!(body.get("numberOfPointsOfInterest").is_none());
}

#[tokio::test]
async fn test_get_city_with_points_of_interest() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/cities/1")
        .add_query_param("includePointsOfInterest", true)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["numberOfPointsOfInterest"], 2);
    assert_eq!(body["pointsOfInterest"][0]["name"], "Central Park");
    assert_eq!(body["pointsOfInterest"][1]["name"], "Empire State Building");
}

#[tokio::test]
async fn test_empty_city_with_points_of_interest() {
    let app = TestApp::new();

    let response = app.server.get("/api/cities/3?includePointsOfInterest=true").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["numberOfPointsOfInterest"], 0);
    assert_eq!(body["pointsOfInterest"], json!([]));
}

#[tokio::test]
async fn test_get_missing_city() {
    let app = TestApp::new();

    let response = app.server.get("/api/cities/42").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], 10001);
}

#[tokio::test]
async fn test_unparseable_city_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.get("/api/cities/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid city ID");
}
