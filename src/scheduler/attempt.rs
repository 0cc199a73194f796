//! A single reconnection attempt.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time;

use crate::host::{BackendHandle, ConnectionStatus, PlayerId, ProxyHost};
use crate::observability::metrics;
use crate::tracker::{ReconnectCandidate, ReconnectTracker};

/// How an attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Connected; the player is no longer pending.
    Reconnected,
    /// The host reported a non-success status. Retried next tick.
    Failed(ConnectionStatus),
    /// No answer within the attempt timeout. Retried next tick.
    TimedOut,
}

impl AttemptOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            AttemptOutcome::Reconnected => "reconnected",
            AttemptOutcome::Failed(_) => "failed",
            AttemptOutcome::TimedOut => "timed_out",
        }
    }
}

/// Result of one spawned attempt.
#[derive(Debug, Clone)]
pub struct AttemptReport {
    pub player: PlayerId,
    pub target: BackendHandle,
    pub outcome: AttemptOutcome,
    pub elapsed: Duration,
}

/// Connect `candidate` and feed success back into the tracker.
pub async fn run_attempt<H: ProxyHost>(
    host: Arc<H>,
    tracker: Arc<ReconnectTracker>,
    candidate: ReconnectCandidate,
    timeout: Duration,
) -> AttemptReport {
    let started = Instant::now();
    let ReconnectCandidate { player, target, .. } = candidate;

    let outcome = match time::timeout(timeout, host.connect(&player, &target)).await {
        Ok(status) if status.is_successful() => {
            // Same rule as an observed arrival; a no-op if the player already
            // left or the host's own event got there first.
            tracker.on_arrived_at_target(&player, target.name());
            AttemptOutcome::Reconnected
        }
        Ok(status) => {
            tracing::debug!(
                player = %player,
                backend = %target,
                status = status.label(),
                "Reconnect attempt failed"
            );
            AttemptOutcome::Failed(status)
        }
        Err(_) => {
            tracing::warn!(
                player = %player,
                backend = %target,
                timeout = ?timeout,
                "Reconnect attempt timed out"
            );
            AttemptOutcome::TimedOut
        }
    };

    metrics::record_attempt(outcome.label(), started);

    AttemptReport {
        player,
        target,
        outcome,
        elapsed: started.elapsed(),
    }
}
