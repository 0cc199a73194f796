//! Pending reconnection state.
//!
//! # Responsibilities
//! - Own the set of players waiting in limbo
//! - Remember which backend each player came from
//! - Apply lifecycle transitions atomically

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::host::{BackendHandle, PlayerId};
use crate::observability::metrics;
use crate::tracker::{BackendNames, PendingPlayer, ReconnectCandidate};

#[derive(Debug, Clone)]
struct PendingEntry {
    target: Option<String>,
    /// Arrival order; snapshots are sorted by it.
    seq: u64,
    queued_at: Instant,
}

#[derive(Debug, Default)]
struct PendingState {
    entries: HashMap<PlayerId, PendingEntry>,
    next_seq: u64,
}

/// Players waiting to be returned from limbo.
#[derive(Debug)]
pub struct ReconnectTracker {
    backends: BackendNames,
    state: Mutex<PendingState>,
}

impl ReconnectTracker {
    pub fn new(backends: BackendNames) -> Self {
        Self {
            backends,
            state: Mutex::new(PendingState::default()),
        }
    }

    pub fn backends(&self) -> &BackendNames {
        &self.backends
    }

    // Nothing panics while holding the guard, but a poisoned lock still holds
    // a consistent map, so keep using it.
    fn lock(&self) -> MutexGuard<'_, PendingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Route a "player connected to `server`" notification.
    ///
    /// Arrival at limbo starts tracking; arrival anywhere else may end it.
    pub fn on_server_connected(&self, player: &PlayerId, server: &str, previous: Option<&str>) {
        if self.backends.is_limbo(server) {
            self.on_arrived_at_limbo(player, previous);
        } else {
            self.on_arrived_at_target(player, server);
        }
    }

    /// Start tracking a player that just landed on limbo.
    ///
    /// Returns `true` if the player was not already pending.
    pub fn on_arrived_at_limbo(&self, player: &PlayerId, previous: Option<&str>) -> bool {
        let target = previous
            .filter(|name| !name.is_empty() && !self.backends.is_limbo(name))
            .map(str::to_string);

        let (inserted, len) = {
            let mut state = self.lock();
            if state.entries.contains_key(player) {
                (false, state.entries.len())
            } else {
                let seq = state.next_seq;
                state.next_seq += 1;
                state.entries.insert(
                    *player,
                    PendingEntry {
                        target: target.clone(),
                        seq,
                        queued_at: Instant::now(),
                    },
                );
                metrics::record_pending_players(state.entries.len());
                (true, state.entries.len())
            }
        };

        if inserted {
            tracing::info!(
                player = %player,
                backend = target.as_deref().unwrap_or("<main>"),
                pending = len,
                "Player arrived at limbo, queued for reconnection"
            );
        } else {
            tracing::debug!(player = %player, "Duplicate limbo arrival ignored");
        }
        inserted
    }

    /// Stop tracking a player that reached its target or the main backend.
    ///
    /// Returns `true` if an entry was removed.
    pub fn on_arrived_at_target(&self, player: &PlayerId, arrived: &str) -> bool {
        let removed = {
            let mut state = self.lock();
            let reached = match state.entries.get(player) {
                Some(entry) => {
                    entry.target.as_deref() == Some(arrived) || self.backends.is_main(arrived)
                }
                None => false,
            };
            if reached {
                state.entries.remove(player);
                metrics::record_pending_players(state.entries.len());
                Some(state.entries.len())
            } else {
                None
            }
        };

        match removed {
            Some(len) => {
                tracing::info!(
                    player = %player,
                    backend = %arrived,
                    pending = len,
                    "Player returned from limbo"
                );
                true
            }
            None => false,
        }
    }

    /// Forget a player whose session ended. Safe for untracked players.
    pub fn on_player_gone(&self, player: &PlayerId) -> bool {
        let removed = {
            let mut state = self.lock();
            let removed = state.entries.remove(player).map(|_| state.entries.len());
            if let Some(len) = removed {
                metrics::record_pending_players(len);
            }
            removed
        };

        match removed {
            Some(len) => {
                tracing::debug!(player = %player, pending = len, "Pending player disconnected");
                true
            }
            None => false,
        }
    }

    /// Remove a batch of players in one critical section.
    pub fn forget_all(&self, players: &[PlayerId]) -> usize {
        if players.is_empty() {
            return 0;
        }

        let mut state = self.lock();
        let removed = players
            .iter()
            .filter(|player| state.entries.remove(*player).is_some())
            .count();
        if removed > 0 {
            metrics::record_pending_players(state.entries.len());
        }
        removed
    }

    /// Pending players in arrival order, as recorded.
    pub fn pending_players(&self) -> Vec<PendingPlayer> {
        let now = Instant::now();
        let mut entries: Vec<(u64, PendingPlayer)> = {
            let state = self.lock();
            state
                .entries
                .iter()
                .map(|(player, entry)| {
                    (
                        entry.seq,
                        PendingPlayer {
                            player: *player,
                            target: entry.target.clone(),
                            pending_for: now.saturating_duration_since(entry.queued_at),
                        },
                    )
                })
                .collect()
        };
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, pending)| pending).collect()
    }

    /// Copy the pending set and resolve each player's effective target.
    ///
    /// The copy is taken under the lock; `resolve` runs after it is released.
    pub fn snapshot_pending<F>(&self, main: &BackendHandle, resolve: F) -> Vec<ReconnectCandidate>
    where
        F: Fn(&str) -> Option<BackendHandle>,
    {
        self.pending_players()
            .into_iter()
            .map(|pending| {
                let target = pending.effective_target(main, &resolve);
                let fell_back_to_main = pending.target.as_deref() != Some(target.name());
                if fell_back_to_main {
                    if let Some(stale) = pending.target.as_deref() {
                        tracing::debug!(
                            player = %pending.player,
                            stale_target = %stale,
                            "Recorded target unavailable, using main"
                        );
                    }
                }
                ReconnectCandidate {
                    player: pending.player,
                    target,
                    fell_back_to_main,
                }
            })
            .collect()
    }

    pub fn is_pending(&self, player: &PlayerId) -> bool {
        self.lock().entries.contains_key(player)
    }

    /// Recorded target for a pending player.
    pub fn target_of(&self, player: &PlayerId) -> Option<String> {
        self.lock().entries.get(player).and_then(|entry| entry.target.clone())
    }

    pub fn pending_count(&self) -> usize {
        self.lock().entries.len()
    }
}
