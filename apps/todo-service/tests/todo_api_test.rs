//! Todo API 統合テスト
//!
//! `build_app` で組み立てた本番と同じルーター（ミドルウェア込み）に
//! インメモリストアを注入し、作成 → 一覧 → 更新 → 削除の一連の流れを検証する。

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use todo_infra::repository::InMemoryTodoRepository;
use todo_service::app::build_app;
use tower::ServiceExt;

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = (!bytes.is_empty()).then(|| serde_json::from_slice(&bytes).unwrap());
    (status, body)
}

#[tokio::test]
async fn test_作成から削除までの一連の流れ() {
    let app = build_app(Arc::new(InMemoryTodoRepository::new()));

    // 作成
    let (status, created) = call(
        &app,
        Method::POST,
        "/todos",
        Some(json!({ "title": "Buy milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = created.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created, json!({ "id": id, "title": "Buy milk" }));

    // 一覧
    let (status, list) = call(&app, Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, Some(json!([{ "id": id, "title": "Buy milk" }])));

    // 更新
    let (status, updated) = call(
        &app,
        Method::PUT,
        &format!("/todos/{id}"),
        Some(json!({ "title": "Buy oat milk", "description": "2%" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        Some(json!({ "id": id, "title": "Buy oat milk", "description": "2%" }))
    );

    // 削除
    let (status, body) = call(&app, Method::DELETE, &format!("/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, None);

    // 削除後の一覧
    let (status, list) = call(&app, Method::GET, "/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, Some(json!([])));
}

#[tokio::test]
async fn test_エラーレスポンスはすべてmessageを持つ() {
    let app = build_app(Arc::new(InMemoryTodoRepository::new()));

    let cases = [
        (
            call(&app, Method::POST, "/todos", Some(json!({}))).await,
            StatusCode::BAD_REQUEST,
            "Title is required",
        ),
        (
            call(&app, Method::PUT, "/todos/123", Some(json!({ "title": "X" }))).await,
            StatusCode::BAD_REQUEST,
            "Invalid ID format",
        ),
        (
            call(&app, Method::DELETE, "/todos/123", None).await,
            StatusCode::BAD_REQUEST,
            "Invalid ID format",
        ),
        (
            call(&app, Method::PUT, "/todos/%FF", Some(json!({ "title": "X" }))).await,
            StatusCode::BAD_REQUEST,
            "Invalid ID format",
        ),
        (
            call(&app, Method::DELETE, "/todos/%FF", None).await,
            StatusCode::BAD_REQUEST,
            "Invalid ID format",
        ),
        (
            call(
                &app,
                Method::PUT,
                "/todos/507F1F77BCF86CD799439011",
                Some(json!({ "title": "X" })),
            )
            .await,
            StatusCode::NOT_FOUND,
            "Todo not found",
        ),
        (
            call(&app, Method::DELETE, "/todos/507f1f77bcf86cd799439011", None).await,
            StatusCode::NOT_FOUND,
            "Todo not found",
        ),
    ];

    for ((status, body), expected_status, expected_message) in cases {
        assert_eq!(status, expected_status);
        assert_eq!(body, Some(json!({ "message": expected_message })));
    }
}

#[tokio::test]
async fn test_作成したidはすべて異なる() {
    let app = build_app(Arc::new(InMemoryTodoRepository::new()));

    for i in 0..20 {
        call(
            &app,
            Method::POST,
            "/todos",
            Some(json!({ "title": format!("todo {i}") })),
        )
        .await;
    }
    let (_, list) = call(&app, Method::GET, "/todos", None).await;

    let mut ids: Vec<String> = list
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), 20);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
