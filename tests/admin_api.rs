//! Admin router tests, driven in-process with `tower::ServiceExt`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use limbo_return::admin::{setup_admin_router, AdminState};
use limbo_return::tracker::BackendNames;
use limbo_return::{PlayerId, ReconnectPolicy, ReconnectTracker};

const KEY: &str = "test-admin-key";

fn app() -> (Router, Arc<ReconnectTracker>, Arc<ReconnectPolicy>) {
    let tracker = Arc::new(ReconnectTracker::new(BackendNames::new("main", "limbo")));
    let policy = Arc::new(ReconnectPolicy::new(true));
    let router = setup_admin_router(AdminState::new(tracker.clone(), policy.clone(), KEY));
    (router, tracker, policy)
}

fn request(method: Method, uri: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", key));
    }
    builder.body(Body::empty()).unwrap()
}

async fn json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_requests_without_key_are_rejected() {
    let (app, _, _) = app();

    let res = app.clone().oneshot(request(Method::GET, "/admin/status", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.oneshot(request(Method::POST, "/admin/toggle", Some("wrong"))).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_status_reports_backends_and_pending() {
    let (app, tracker, _) = app();
    tracker.on_arrived_at_limbo(&PlayerId::new_session(), Some("alpha"));

    let res = app.oneshot(request(Method::GET, "/admin/status", Some(KEY))).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json(res).await;
    assert_eq!(body["main_server"], "main");
    assert_eq!(body["limbo_server"], "limbo");
    assert_eq!(body["auto_reconnect"], true);
    assert_eq!(body["pending_players"], 1);
}

#[tokio::test]
async fn test_pending_lists_players_in_arrival_order() {
    let (app, tracker, _) = app();
    let first = PlayerId::new_session();
    let second = PlayerId::new_session();
    tracker.on_arrived_at_limbo(&first, Some("alpha"));
    tracker.on_arrived_at_limbo(&second, None);

    let res = app.oneshot(request(Method::GET, "/admin/pending", Some(KEY))).await.unwrap();
    let body = json(res).await;
    let list = body.as_array().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["player"], first.to_string());
    assert_eq!(list[0]["target"], "alpha");
    assert_eq!(list[1]["player"], second.to_string());
    assert!(list[1]["target"].is_null());
    assert!(list[1]["pending_secs"].is_u64());
}

#[tokio::test]
async fn test_toggle_flips_policy_and_returns_feedback() {
    let (app, _, policy) = app();

    let res = app.clone().oneshot(request(Method::POST, "/admin/toggle", Some(KEY))).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = json(res).await;
    assert_eq!(body["auto_reconnect"], false);
    assert_eq!(body["message"], "Toggled regular server reconnection to false");
    assert!(!policy.is_enabled());

    let res = app.oneshot(request(Method::POST, "/admin/toggle", Some(KEY))).await.unwrap();
    assert_eq!(json(res).await["auto_reconnect"], true);
    assert!(policy.is_enabled());
}
