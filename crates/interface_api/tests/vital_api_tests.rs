//! End-to-end tests for the vital record service surface

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use interface_api::config::ApiConfig;
use interface_api::{vital_router, VitalState};
use test_utils::InMemoryVitalStore;

fn test_server() -> (TestServer, Arc<InMemoryVitalStore>) {
    let store = Arc::new(InMemoryVitalStore::new());
    let state = VitalState {
        store: store.clone(),
        config: ApiConfig::default(),
    };
    let server = TestServer::new(vital_router(state)).expect("test server");
    (server, store)
}

fn sample_body() -> Value {
    json!({
        "identifier": ["p1"],
        "weight": "70kg",
        "height": "175cm",
        "generalExamination": "normal"
    })
}

#[tokio::test]
async fn post_then_get_round_trips() {
    let (server, _) = test_server();

    let created = server.post("/api/v1/vital").json(&sample_body()).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);

    let body: Value = created.json();
    let id = body["id"].as_i64().expect("assigned id");
    assert_eq!(body["weight"], "70kg");
    assert_eq!(body["generalExamination"], "normal");

    let fetched = server.get(&format!("/api/v1/vital/{id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), body);
}

#[tokio::test]
async fn post_returns_location_of_the_new_record() {
    let (server, _) = test_server();

    let created = server.post("/api/v1/vital").json(&sample_body()).await;
    let body: Value = created.json();
    let id = body["id"].as_i64().unwrap();

    let location = created.header("location");
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/v1/vital/{id}")
    );
}

#[tokio::test]
async fn post_with_empty_required_field_is_rejected() {
    let (server, store) = test_server();

    let mut body = sample_body();
    body["weight"] = json!("");

    let response = server.post("/api/v1/vital").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let error: Value = response.json();
    assert_eq!(error["error"], "validation_error");
    let details = error["details"].to_string();
    assert!(details.contains("weight"));

    assert!(store.is_empty());
}

#[tokio::test]
async fn put_on_missing_id_returns_422_and_leaves_store_unchanged() {
    let (server, store) = test_server();
    server.post("/api/v1/vital").json(&sample_body()).await;

    let response = server.put("/api/v1/vital/999").json(&sample_body()).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"], "not_found");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn put_overwrites_fields_and_preserves_the_path_id() {
    let (server, _) = test_server();

    let created = server.post("/api/v1/vital").json(&sample_body()).await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    // The id in the body must lose to the path id.
    let update = json!({
        "id": 999,
        "identifier": ["p1", "p2"],
        "weight": "72kg",
        "height": "175cm",
        "generalExamination": "stable"
    });

    let response = server.put(&format!("/api/v1/vital/{id}")).json(&update).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let fetched: Value = server.get(&format!("/api/v1/vital/{id}")).await.json();
    assert_eq!(fetched["id"].as_i64(), Some(id));
    assert_eq!(fetched["weight"], "72kg");
    assert_eq!(fetched["identifier"], json!(["p1", "p2"]));

    let missing = server.get("/api/v1/vital/999").await;
    assert_eq!(missing.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_removes_the_record_permanently() {
    let (server, _) = test_server();

    let created = server.post("/api/v1/vital").json(&sample_body()).await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let deleted = server.delete(&format!("/api/v1/vital/{id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let fetched = server.get(&format!("/api/v1/vital/{id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_on_missing_id_returns_422_and_leaves_store_unchanged() {
    let (server, store) = test_server();
    server.post("/api/v1/vital").json(&sample_body()).await;

    let response = server.delete("/api/v1/vital/999").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn list_returns_bounded_pages_with_total_metadata() {
    let (server, _) = test_server();

    for i in 0..5 {
        let mut body = sample_body();
        body["weight"] = json!(format!("{}kg", 70 + i));
        server.post("/api/v1/vital").json(&body).await;
    }

    let first: Value = server
        .get("/api/v1/vital")
        .add_query_param("page", 0)
        .add_query_param("size", 2)
        .await
        .json();
    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert_eq!(first["totalCount"].as_u64(), Some(5));
    assert_eq!(first["totalPages"].as_u64(), Some(3));
    assert_eq!(first["size"].as_u64(), Some(2));

    let last: Value = server
        .get("/api/v1/vital")
        .add_query_param("page", 2)
        .add_query_param("size", 2)
        .await
        .json();
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
    assert_eq!(last["page"].as_u64(), Some(2));
}

#[tokio::test]
async fn list_honours_the_sort_expression() {
    let (server, _) = test_server();

    for weight in ["73kg", "71kg", "72kg"] {
        let mut body = sample_body();
        body["weight"] = json!(weight);
        server.post("/api/v1/vital").json(&body).await;
    }

    let page: Value = server
        .get("/api/v1/vital")
        .add_query_param("sort", "weight,desc")
        .await
        .json();

    let weights: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["weight"].as_str().unwrap())
        .collect();
    assert_eq!(weights, vec!["73kg", "72kg", "71kg"]);
}

#[tokio::test]
async fn list_rejects_unknown_sort_fields() {
    let (server, _) = test_server();

    let response = server
        .get("/api/v1/vital")
        .add_query_param("sort", "shoeSize")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "bad_request");
}

#[tokio::test]
async fn health_endpoints_respond() {
    let (server, _) = test_server();

    let live = server.get("/health").await;
    assert_eq!(live.status_code(), StatusCode::OK);
    assert_eq!(live.json::<Value>()["status"], "healthy");

    let ready = server.get("/health/ready").await;
    assert_eq!(ready.status_code(), StatusCode::OK);
    assert_eq!(ready.json::<Value>()["status"], "ready");
}
