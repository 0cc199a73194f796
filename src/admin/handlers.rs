use axum::{extract::State, Json};
use serde::Serialize;

use crate::admin::AdminState;
use crate::commands::toggle_feedback;
use crate::tracker::PendingPlayer;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub main_server: Option<String>,
    pub limbo_server: Option<String>,
    pub auto_reconnect: bool,
    pub pending_players: usize,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub auto_reconnect: bool,
    pub message: String,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    let backends = state.tracker.backends();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        main_server: backends.main().map(str::to_string),
        limbo_server: backends.limbo().map(str::to_string),
        auto_reconnect: state.policy.is_enabled(),
        pending_players: state.tracker.pending_count(),
    })
}

pub async fn get_pending(State(state): State<AdminState>) -> Json<Vec<PendingPlayer>> {
    Json(state.tracker.pending_players())
}

pub async fn post_toggle(State(state): State<AdminState>) -> Json<ToggleResponse> {
    let enabled = state.policy.toggle();
    Json(ToggleResponse {
        auto_reconnect: enabled,
        message: toggle_feedback(enabled),
    })
}
