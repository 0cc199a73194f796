//! The auto-reconnect toggle command.

use thiserror::Error;

use crate::commands::CommandSource;
use crate::scheduler::policy::{ReconnectPolicy, ADMIN_PERMISSION};

/// Name the host should register the toggle under.
pub const TOGGLE_COMMAND: &str = "togglereconnect";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("missing permission '{0}'")]
    PermissionDenied(&'static str),
}

/// Feedback text for a new toggle state.
pub fn toggle_feedback(enabled: bool) -> String {
    format!("Toggled regular server reconnection to {}", enabled)
}

/// Flip auto-reconnect on behalf of `source` and tell them the new state.
pub fn toggle_reconnect<S>(source: &S, policy: &ReconnectPolicy) -> Result<bool, CommandError>
where
    S: CommandSource + ?Sized,
{
    if !source.has_permission(ADMIN_PERMISSION) {
        tracing::warn!("Toggle command denied");
        return Err(CommandError::PermissionDenied(ADMIN_PERMISSION));
    }

    let enabled = policy.toggle();
    source.send_message(&toggle_feedback(enabled));
    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Console {
        admin: bool,
        messages: RefCell<Vec<String>>,
    }

    impl CommandSource for Console {
        fn has_permission(&self, permission: &str) -> bool {
            self.admin && permission == ADMIN_PERMISSION
        }

        fn send_message(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_admin_toggles_and_gets_feedback() {
        let policy = ReconnectPolicy::new(true);
        let console = Console {
            admin: true,
            messages: RefCell::new(Vec::new()),
        };

        assert_eq!(toggle_reconnect(&console, &policy), Ok(false));
        assert_eq!(toggle_reconnect(&console, &policy), Ok(true));
        assert_eq!(
            console.messages.borrow().as_slice(),
            [
                "Toggled regular server reconnection to false",
                "Toggled regular server reconnection to true",
            ]
        );
    }

    #[test]
    fn test_non_admin_is_denied() {
        let policy = ReconnectPolicy::new(true);
        let player = Console {
            admin: false,
            messages: RefCell::new(Vec::new()),
        };

        assert_eq!(
            toggle_reconnect(&player, &policy),
            Err(CommandError::PermissionDenied(ADMIN_PERMISSION))
        );
        assert!(policy.is_enabled());
        assert!(player.messages.borrow().is_empty());
    }
}
