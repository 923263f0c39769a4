//! End-to-end CRUD through the router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use userhub_gateway::{app_state::AppState, config::GatewayConfig, events::EventBus, router};

fn app() -> (AppState, Router) {
    let state = AppState::with_events(GatewayConfig::default(), EventBus::new());
    let app = router::build_router(state.clone());
    (state, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    if body.is_some() {
        req = req.header(header::CONTENT_TYPE, "application/json");
    }
    let req = req
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn create_get_list_delete_scenario() {
    let (_, app) = app();

    let (s, b) = send(&app, Method::POST, "/api/users", Some(r#"{"name":"Alice","email":"a@x.com"}"#)).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(json_of(&b), json!({"id": 1, "name": "Alice", "email": "a@x.com"}));

    let (s, b) = send(&app, Method::POST, "/api/users", Some(r#"{"name":"Bob","email":"b@x.com"}"#)).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(json_of(&b)["id"], 2);

    let (s, b) = send(&app, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(s, StatusCode::NO_CONTENT);
    assert!(b.is_empty());

    let (s, b) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(json_of(&b), json!([{"id": 2, "name": "Bob", "email": "b@x.com"}]));

    let (s, b) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&b)["error"], "NOT_FOUND");
}

#[tokio::test]
async fn create_ignores_client_id() {
    let (state, app) = app();
    let (s, b) = send(&app, Method::POST, "/api/users", Some(r#"{"id":99,"name":"A","email":"a@x.com"}"#)).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(json_of(&b)["id"], 1);
    assert!(state.store().get_by_id(99).is_err());
}

#[tokio::test]
async fn update_replaces_whole_record() {
    let (_, app) = app();
    send(&app, Method::POST, "/api/users", Some(r#"{"name":"A","email":"a@x.com"}"#)).await;

    let (s, b) = send(&app, Method::PUT, "/api/users/1", Some(r#"{"name":"B"}"#)).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(json_of(&b), json!({"id": 1, "name": "B", "email": ""}));

    let (_, b) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(json_of(&b), json!({"id": 1, "name": "B", "email": ""}));
}

#[tokio::test]
async fn create_accepts_json_without_content_type() {
    let (_, app) = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .body(Body::from(r#"{"name":"A","email":"a@x.com"}"#))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(json_of(&body), json!({"id": 1, "name": "A", "email": "a@x.com"}));
}

#[tokio::test]
async fn null_fields_are_stored_empty() {
    let (_, app) = app();
    let (s, b) = send(&app, Method::POST, "/api/users", Some(r#"{"name":null,"email":"a@x.com"}"#)).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(json_of(&b), json!({"id": 1, "name": "", "email": "a@x.com"}));
}

#[tokio::test]
async fn negative_and_zero_ids_are_not_found() {
    let (_, app) = app();
    send(&app, Method::POST, "/api/users", Some(r#"{"name":"A","email":""}"#)).await;

    for uri in ["/api/users/-1", "/api/users/0"] {
        let (s, b) = send(&app, Method::GET, uri, None).await;
        assert_eq!(s, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(json_of(&b)["error"], "NOT_FOUND");
    }
    let (s, _) = send(&app, Method::DELETE, "/api/users/-1", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_body_is_bad_request() {
    let (state, app) = app();
    let big = format!(r#"{{"name":"{}","email":""}}"#, "a".repeat(2 << 20));
    let (s, b) = send(&app, Method::POST, "/api/users", Some(&big)).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&b)["error"], "BAD_REQUEST");
    assert!(state.store().is_empty());
}

#[tokio::test]
async fn update_and_delete_missing_are_not_found() {
    let (state, app) = app();

    let (s, _) = send(&app, Method::PUT, "/api/users/7", Some(r#"{"name":"X","email":""}"#)).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    let (s, _) = send(&app, Method::DELETE, "/api/users/7", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);

    assert!(state.store().is_empty());
}

#[tokio::test]
async fn malformed_input_is_bad_request() {
    let (state, app) = app();

    for (method, uri, body) in [
        (Method::GET, "/api/users/abc", None),
        (Method::GET, "/api/users/99999999999999999999", None),
        (Method::DELETE, "/api/users/1.5", None),
        (Method::POST, "/api/users", Some("{not json")),
        (Method::POST, "/api/users", Some(r#"{"name": 5}"#)),
        (Method::PUT, "/api/users/1", Some("[]")),
    ] {
        let (s, b) = send(&app, method.clone(), uri, body).await;
        assert_eq!(s, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(json_of(&b)["error"], "BAD_REQUEST");
    }

    assert!(state.store().is_empty());
}

#[tokio::test]
async fn requests_are_counted_by_route_template() {
    let (state, app) = app();
    send(&app, Method::POST, "/api/users", Some(r#"{"name":"A","email":""}"#)).await;
    send(&app, Method::GET, "/api/users/1", None).await;
    send(&app, Method::GET, "/api/users/2", None).await;

    let m = state.metrics();
    assert_eq!(m.http_requests.get(&[("method", "POST"), ("endpoint", "/api/users")]), 1);
    assert_eq!(m.http_requests.get(&[("method", "GET"), ("endpoint", "/api/users/:id")]), 2);
    assert_eq!(m.http_duration.count(&[("method", "GET"), ("endpoint", "/api/users/:id")]), 2);

    let (s, b) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(s, StatusCode::OK);
    let text = String::from_utf8(b).unwrap();
    assert!(text.contains(r#"userhub_http_requests_total{endpoint="/api/users/:id",method="GET"} 2"#));
    assert!(text.contains("userhub_users 1\n"));
}

#[tokio::test]
async fn ops_endpoints() {
    let (state, app) = app();

    let (s, b) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!((s, b.as_slice()), (StatusCode::OK, &b"ok"[..]));

    let (s, b) = send(&app, Method::GET, "/readyz", None).await;
    assert_eq!((s, b.as_slice()), (StatusCode::OK, &b"ready"[..]));

    state.set_draining();
    let (s, b) = send(&app, Method::GET, "/readyz", None).await;
    assert_eq!((s, b.as_slice()), (StatusCode::SERVICE_UNAVAILABLE, &b"draining"[..]));
}
