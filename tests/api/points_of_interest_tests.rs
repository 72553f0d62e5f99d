//! Point of Interest API Tests

use axum::http::{header, StatusCode};
use futures::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{point_of_interest_path, points_of_interest_path, SentNotice, TestApp};

#[tokio::test]
async fn test_list_points_of_interest_in_insertion_order() {
    let app = TestApp::new();

    let response = app.server.get(&points_of_interest_path(2)).await;

    response.assert_status_ok();
    let names: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["Cathedral of Our Lady", "Antwerp Central Station"]);
}

#[tokio::test]
async fn test_list_points_of_interest_of_empty_city() {
    let app = TestApp::new();

    let response = app.server.get(&points_of_interest_path(3)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_points_of_interest_of_missing_city() {
    let app = TestApp::new();

    app.server
        .get(&points_of_interest_path(42))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_point_of_interest_of_another_city_is_not_found() {
    let app = TestApp::new();

    app.server
        .get(&point_of_interest_path(1, 3))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = TestApp::new();

    let response = app
        .server
        .post(&points_of_interest_path(2))
        .json(&json!({ "name": "Pier", "description": "Old pier" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_i64().unwrap_or_default();
    assert_eq!(id, 5);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/api/cities/2/pointsofinterest/5")
    );

    let fetched: Value = app.server.get(&point_of_interest_path(2, id)).await.json();
    assert_eq!(fetched, created);
    assert_eq!(fetched, json!({ "id": 5, "name": "Pier", "description": "Old pier" }));
}

#[tokio::test]
async fn test_create_without_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.post(&points_of_interest_path(1)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 10002);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let app = TestApp::new();

    app.server
        .post(&points_of_interest_path(1))
        .text("{\"name\": ")
        .content_type("application/json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_in_missing_city_is_not_found() {
    let app = TestApp::new();

    app.server
        .post(&points_of_interest_path(42))
        .json(&json!({ "name": "Pier" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_equal_name_and_description_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post(&points_of_interest_path(1))
        .json(&json!({ "name": "Tower", "description": "Tower" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10007);
    assert_eq!(
        body["errors"],
        json!([{
            "field": "description",
            "message": "The provided description should be different from the name."
        }])
    );

    let listed: Vec<Value> = app.server.get(&points_of_interest_path(1)).await.json();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let app = TestApp::new();

    let response = app
        .server
        .post(&points_of_interest_path(1))
        .json(&json!({ "description": "d".repeat(201) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let fields: Vec<String> = response.json::<Value>()["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["field"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(fields, vec!["description", "name"]);
}

#[tokio::test]
async fn test_create_in_empty_city_then_delete_notifies_once() {
    let app = TestApp::new();

    let created: Value = app
        .server
        .post(&points_of_interest_path(3))
        .json(&json!({ "name": "Tower", "description": "Tall" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap_or_default();
    assert_eq!(id, 5);

    app.server
        .delete(&point_of_interest_path(3, id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(
        app.notifier.sent(),
        vec![SentNotice {
            subject: "Point of interest deleted.".into(),
            body: "Point of interest Tower with id 5 was deleted.".into(),
        }]
    );
    assert_eq!(
        app.server.get(&points_of_interest_path(3)).await.json::<Value>(),
        json!([])
    );
}

#[tokio::test]
async fn test_replace_is_idempotent() {
    let app = TestApp::new();
    let body = json!({ "name": "Central Park", "description": "Updated" });

    for _ in 0..2 {
        app.server
            .put(&point_of_interest_path(1, 1))
            .json(&body)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let fetched: Value = app.server.get(&point_of_interest_path(1, 1)).await.json();
    assert_eq!(fetched, json!({ "id": 1, "name": "Central Park", "description": "Updated" }));
}

#[tokio::test]
async fn test_replace_missing_point_of_interest_is_not_found() {
    let app = TestApp::new();

    app.server
        .put(&point_of_interest_path(1, 99))
        .json(&json!({ "name": "Nothing" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_updates_named_field() {
    let app = TestApp::new();

    app.server
        .patch(&point_of_interest_path(1, 2))
        .json(&json!([
            { "op": "test", "path": "/name", "value": "Empire State Building" },
            { "op": "replace", "path": "/Description", "value": "Art Deco landmark" }
        ]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let fetched: Value = app.server.get(&point_of_interest_path(1, 2)).await.json();
    assert_eq!(fetched["name"], "Empire State Building");
    assert_eq!(fetched["description"], "Art Deco landmark");
}

#[tokio::test]
async fn test_patch_is_validated_after_application() {
    let app = TestApp::new();
    let before: Value = app.server.get(&point_of_interest_path(1, 1)).await.json();

    let response = app
        .server
        .patch(&point_of_interest_path(1, 1))
        .json(&json!([{ "op": "replace", "path": "/description", "value": "Central Park" }]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 10007);
    let after: Value = app.server.get(&point_of_interest_path(1, 1)).await.json();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_patch_with_unknown_path_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .patch(&point_of_interest_path(1, 1))
        .json(&json!([{ "op": "replace", "path": "/rating", "value": "5" }]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 10002);
}

#[tokio::test]
async fn test_patch_with_unsupported_op_is_bad_request() {
    let app = TestApp::new();

    app.server
        .patch(&point_of_interest_path(1, 1))
        .json(&json!([{ "op": "move", "from": "/name", "path": "/description" }]))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let app = TestApp::new();

    app.server
        .delete(&point_of_interest_path(2, 4))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .delete(&point_of_interest_path(2, 4))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(app.notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_storage_outage_is_server_error() {
    let app = TestApp::new();
    app.store.set_available(false);

    let response = app
        .server
        .post(&points_of_interest_path(1))
        .json(&json!({ "name": "Pier" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], 10000);
    assert_eq!(body["message"], "A problem happened while handling your request.");

    app.store.set_available(true);
    let listed: Vec<Value> = app.server.get(&points_of_interest_path(1)).await.json();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let app = TestApp::new();
    let path = points_of_interest_path(1);

    let requests = (0..10).map(|i| {
        app.server
            .post(&path)
            .json(&json!({ "name": format!("Spot {}", i) }))
    });
    let responses = join_all(requests.map(|request| async move { request.await })).await;

    let mut ids: Vec<i64> = responses
        .iter()
        .map(|r| r.json::<Value>()["id"].as_i64().unwrap_or_default())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);

    let listed: Vec<Value> = app.server.get(&path).await.json();
    assert_eq!(listed.len(), 12);
}
