//! Connection lifecycle events from the host.

use std::sync::Arc;

use crate::host::PlayerId;
use crate::tracker::ReconnectTracker;

/// A notification the host delivers when a player's placement changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// The player finished connecting to `server`.
    ServerConnected {
        player: PlayerId,
        server: String,
        previous: Option<String>,
    },
    /// The player left the proxy.
    Disconnected { player: PlayerId },
}

/// Handle the host uses to feed lifecycle events into the tracker.
///
/// Cheap to clone; every clone shares the same tracker.
#[derive(Debug, Clone)]
pub struct LifecycleEvents {
    tracker: Arc<ReconnectTracker>,
}

impl LifecycleEvents {
    pub fn new(tracker: Arc<ReconnectTracker>) -> Self {
        Self { tracker }
    }

    pub fn handle(&self, event: ConnectionEvent) {
        match event {
            ConnectionEvent::ServerConnected {
                player,
                server,
                previous,
            } => self.server_connected(&player, &server, previous.as_deref()),
            ConnectionEvent::Disconnected { player } => self.disconnected(&player),
        }
    }

    pub fn server_connected(&self, player: &PlayerId, server: &str, previous: Option<&str>) {
        tracing::trace!(
            player = %player,
            server = %server,
            previous = ?previous,
            "Server connected"
        );
        self.tracker.on_server_connected(player, server, previous);
    }

    pub fn disconnected(&self, player: &PlayerId) {
        self.tracker.on_player_gone(player);
    }
}
