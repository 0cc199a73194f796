//! Operator commands.
//!
//! Command registration belongs to the host; this module holds the logic a
//! registered command runs, behind a small `CommandSource` seam.

pub mod toggle;

pub use toggle::{toggle_feedback, toggle_reconnect, CommandError, TOGGLE_COMMAND};

/// Whoever issued a command: a player, the console, or an API caller.
pub trait CommandSource {
    fn has_permission(&self, permission: &str) -> bool;

    fn send_message(&self, message: &str);
}
