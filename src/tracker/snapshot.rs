//! Point-in-time views of the pending set.

use std::time::Duration;

use serde::Serialize;

use crate::host::{BackendHandle, PlayerId};

/// A pending player as recorded, before target resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingPlayer {
    pub player: PlayerId,
    /// Backend recorded on arrival at limbo; `None` means main.
    pub target: Option<String>,
    /// Time spent pending when the snapshot was taken.
    #[serde(rename = "pending_secs", serialize_with = "as_secs")]
    pub pending_for: Duration,
}

impl PendingPlayer {
    /// Backend to reconnect to: the recorded target while it still resolves,
    /// otherwise main.
    pub fn effective_target<F>(&self, main: &BackendHandle, resolve: F) -> BackendHandle
    where
        F: Fn(&str) -> Option<BackendHandle>,
    {
        self.target
            .as_deref()
            .and_then(resolve)
            .unwrap_or_else(|| main.clone())
    }
}

/// A player the scheduler may try to reconnect this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectCandidate {
    pub player: PlayerId,
    pub target: BackendHandle,
    /// True when the recorded target was missing or stale.
    pub fell_back_to_main: bool,
}

fn as_secs<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_secs())
}
