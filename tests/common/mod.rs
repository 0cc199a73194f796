//! Shared test host for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use limbo_return::{BackendHandle, ConnectionStatus, PlayerId, ProxyHost};

/// An in-memory proxy with scriptable backends, sessions and outcomes.
#[derive(Default)]
pub struct MockHost {
    backends: Mutex<HashSet<String>>,
    offline: Mutex<HashSet<PlayerId>>,
    bypass: Mutex<HashSet<PlayerId>>,
    outcomes: Mutex<HashMap<String, ConnectionStatus>>,
    connect_delay: Mutex<Duration>,
    panic_next_lookup: AtomicBool,
    lookups: AtomicUsize,
    connects: Mutex<Vec<(PlayerId, String)>>,
    action_bars: Mutex<Vec<(PlayerId, String)>>,
}

impl MockHost {
    pub fn with_backends(names: &[&str]) -> Self {
        let host = Self::default();
        for name in names {
            host.add_backend(name);
        }
        host
    }

    pub fn add_backend(&self, name: &str) {
        self.backends.lock().unwrap().insert(name.to_string());
    }

    pub fn remove_backend(&self, name: &str) {
        self.backends.lock().unwrap().remove(name);
    }

    pub fn set_offline(&self, player: PlayerId) {
        self.offline.lock().unwrap().insert(player);
    }

    pub fn grant_bypass(&self, player: PlayerId) {
        self.bypass.lock().unwrap().insert(player);
    }

    /// Outcome for connections to `backend`; defaults to success.
    pub fn set_outcome(&self, backend: &str, status: ConnectionStatus) {
        self.outcomes.lock().unwrap().insert(backend.to_string(), status);
    }

    pub fn set_connect_delay(&self, delay: Duration) {
        *self.connect_delay.lock().unwrap() = delay;
    }

    pub fn panic_on_next_lookup(&self) {
        self.panic_next_lookup.store(true, Ordering::SeqCst);
    }

    /// Backend lookups made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn connects(&self) -> Vec<(PlayerId, String)> {
        self.connects.lock().unwrap().clone()
    }

    pub fn connects_for(&self, player: &PlayerId) -> Vec<String> {
        self.connects
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == player)
            .map(|(_, backend)| backend.clone())
            .collect()
    }

    pub fn action_bars(&self) -> Vec<(PlayerId, String)> {
        self.action_bars.lock().unwrap().clone()
    }
}

impl ProxyHost for MockHost {
    fn resolve_backend(&self, name: &str) -> Option<BackendHandle> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.panic_next_lookup.swap(false, Ordering::SeqCst) {
            panic!("injected lookup failure");
        }
        self.backends
            .lock()
            .unwrap()
            .contains(name)
            .then(|| BackendHandle::new(name))
    }

    fn is_active(&self, player: &PlayerId) -> bool {
        !self.offline.lock().unwrap().contains(player)
    }

    fn has_permission(&self, player: &PlayerId, permission: &str) -> bool {
        permission == limbo_return::scheduler::BYPASS_PERMISSION
            && self.bypass.lock().unwrap().contains(player)
    }

    fn send_action_bar(&self, player: &PlayerId, message: &str) {
        self.action_bars
            .lock()
            .unwrap()
            .push((*player, message.to_string()));
    }

    fn connect(
        &self,
        player: &PlayerId,
        backend: &BackendHandle,
    ) -> impl Future<Output = ConnectionStatus> + Send {
        self.connects
            .lock()
            .unwrap()
            .push((*player, backend.name().to_string()));
        let status = self
            .outcomes
            .lock()
            .unwrap()
            .get(backend.name())
            .cloned()
            .unwrap_or(ConnectionStatus::Success);
        let delay = *self.connect_delay.lock().unwrap();

        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            status
        }
    }
}
