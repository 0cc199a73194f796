//! Backend handles and connection results.

use std::fmt;

/// A backend the host knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendHandle {
    /// Registered backend name.
    name: String,
}

impl BackendHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Outcome of a connection request, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The player is now on the requested backend.
    Success,
    /// The player was already connected there.
    AlreadyConnected,
    /// Another connection for this player is still in flight.
    InProgress,
    /// The request was cancelled by the host or another plugin.
    Cancelled,
    /// The backend refused or dropped the connection.
    ServerDisconnected(Option<String>),
}

impl ConnectionStatus {
    /// Only a completed move counts; anything else is retried next tick.
    pub fn is_successful(&self) -> bool {
        matches!(self, ConnectionStatus::Success)
    }

    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Success => "success",
            ConnectionStatus::AlreadyConnected => "already_connected",
            ConnectionStatus::InProgress => "in_progress",
            ConnectionStatus::Cancelled => "cancelled",
            ConnectionStatus::ServerDisconnected(_) => "server_disconnected",
        }
    }
}
