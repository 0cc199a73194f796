//! Proxy host integration.
//!
//! # Data Flow
//! ```text
//! Host lifecycle notifications
//!     → events.rs (ConnectionEvent)
//!     → tracker (pending set mutations)
//!
//! Scheduler tick
//!     → ProxyHost::resolve_backend / is_active / has_permission
//!     → ProxyHost::connect (async, outside the tracker lock)
//! ```
//!
//! # Design Decisions
//! - The host is a trait so the core can be driven by any proxy or a test double
//! - Backend lookup and permission checks are synchronous; only `connect` awaits
//! - Player identity is the session, never the display name

pub mod backend;
pub mod events;
pub mod player;

use std::future::Future;

pub use backend::{BackendHandle, ConnectionStatus};
pub use events::{ConnectionEvent, LifecycleEvents};
pub use player::PlayerId;

/// Operations the reconnection core needs from the proxy it runs inside.
pub trait ProxyHost: Send + Sync + 'static {
    /// Look up a registered backend by name.
    fn resolve_backend(&self, name: &str) -> Option<BackendHandle>;

    /// Whether the player's proxy session is still alive.
    fn is_active(&self, player: &PlayerId) -> bool;

    /// Permission check for a connected player.
    fn has_permission(&self, player: &PlayerId, permission: &str) -> bool;

    /// Show a transient status line to the player.
    fn send_action_bar(&self, player: &PlayerId, message: &str);

    /// Ask the proxy to move `player` onto `backend`.
    ///
    /// Requesting the backend a player is already on must be harmless.
    fn connect(
        &self,
        player: &PlayerId,
        backend: &BackendHandle,
    ) -> impl Future<Output = ConnectionStatus> + Send;
}
