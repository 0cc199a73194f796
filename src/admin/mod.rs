//! Admin HTTP API.
//!
//! Every route requires `Authorization: Bearer <admin.api_key>`.

pub mod auth;
pub mod handlers;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::scheduler::ReconnectPolicy;
use crate::tracker::ReconnectTracker;
use self::auth::admin_auth_middleware;
use self::handlers::*;

/// Shared state for admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub tracker: Arc<ReconnectTracker>,
    pub policy: Arc<ReconnectPolicy>,
    pub api_key: Arc<str>,
}

impl AdminState {
    pub fn new(
        tracker: Arc<ReconnectTracker>,
        policy: Arc<ReconnectPolicy>,
        api_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            tracker,
            policy,
            api_key: api_key.into(),
        }
    }
}

pub fn setup_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/pending", get(get_pending))
        .route("/admin/toggle", post(post_toggle))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
