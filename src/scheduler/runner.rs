//! Periodic reconnect loop.
//!
//! # Responsibilities
//! - Fire ticks on a fixed interval until shutdown
//! - Reconcile sessions that ended without a disconnect event
//! - Spawn attempts for eligible players and keep track of them

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};

use crate::config::ReconnectConfig;
use crate::host::{PlayerId, ProxyHost};
use crate::observability::metrics;
use crate::scheduler::attempt::{run_attempt, AttemptReport};
use crate::scheduler::policy::{ReconnectPolicy, BYPASS_PERMISSION};
use crate::tracker::{ReconnectCandidate, ReconnectTracker};

/// Timing and message settings for the scheduler.
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    pub interval: Duration,
    pub attempt_timeout: Duration,
    pub drain_timeout: Duration,
    pub status_message: String,
}

impl From<&ReconnectConfig> for SchedulerSettings {
    fn from(config: &ReconnectConfig) -> Self {
        Self {
            interval: config.interval(),
            attempt_timeout: config.attempt_timeout(),
            drain_timeout: config.drain_timeout(),
            status_message: config.status_message.clone(),
        }
    }
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self::from(&ReconnectConfig::default())
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Main was unset or unresolvable; nothing was looked at.
    pub inert: bool,
    /// Attempts spawned.
    pub attempted: usize,
    /// Players left pending because auto-reconnect is off.
    pub held: usize,
    /// Players dropped because their session had ended.
    pub removed: usize,
}

impl TickReport {
    fn inert() -> Self {
        Self {
            inert: true,
            ..Self::default()
        }
    }
}

/// Drives reconnection attempts for everyone the tracker lists as pending.
pub struct ReconnectScheduler<H: ProxyHost> {
    host: Arc<H>,
    tracker: Arc<ReconnectTracker>,
    policy: Arc<ReconnectPolicy>,
    settings: SchedulerSettings,
    in_flight: JoinSet<AttemptReport>,
}

impl<H: ProxyHost> ReconnectScheduler<H> {
    pub fn new(
        host: Arc<H>,
        tracker: Arc<ReconnectTracker>,
        policy: Arc<ReconnectPolicy>,
        settings: SchedulerSettings,
    ) -> Self {
        Self {
            host,
            tracker,
            policy,
            settings,
            in_flight: JoinSet::new(),
        }
    }

    /// Tick until `shutdown` fires, then drain in-flight attempts.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval = ?self.settings.interval,
            main = self.tracker.backends().main().unwrap_or("<unset>"),
            limbo = self.tracker.backends().limbo().unwrap_or("<unset>"),
            "Reconnect scheduler starting"
        );

        let mut ticker = time::interval(self.settings.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Checked first so no tick starts once shutdown is observed.
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Reconnect scheduler received shutdown signal, exiting loop");
                    break;
                }
                _ = ticker.tick() => {
                    self.contained_tick().await;
                }
            }
        }

        let drain_timeout = self.settings.drain_timeout;
        if time::timeout(drain_timeout, self.settle()).await.is_err() {
            tracing::warn!(
                remaining = self.in_flight.len(),
                "Reconnect attempts still in flight at shutdown, abandoning"
            );
            self.in_flight.abort_all();
        }
        tracing::info!("Reconnect scheduler stopped");
    }

    async fn contained_tick(&mut self) {
        match AssertUnwindSafe(self.tick()).catch_unwind().await {
            Ok(report) if report.inert => {
                metrics::record_tick("inert");
            }
            Ok(report) => {
                metrics::record_tick("ran");
                if report.attempted + report.held + report.removed > 0 {
                    tracing::debug!(
                        attempted = report.attempted,
                        held = report.held,
                        removed = report.removed,
                        "Reconnect tick complete"
                    );
                }
            }
            Err(_) => {
                metrics::record_tick("panicked");
                tracing::error!("Reconnect tick panicked; continuing on next interval");
            }
        }
    }

    /// Run one tick.
    pub async fn tick(&mut self) -> TickReport {
        self.reap_finished();

        let Some(main_name) = self.tracker.backends().main() else {
            return TickReport::inert();
        };
        let Some(main) = self.host.resolve_backend(main_name) else {
            tracing::debug!(backend = %main_name, "Main backend not registered, skipping tick");
            return TickReport::inert();
        };

        let host = &self.host;
        let snapshot = self
            .tracker
            .snapshot_pending(&main, |name| host.resolve_backend(name));

        let auto_reconnect = self.policy.is_enabled();
        let mut gone: Vec<PlayerId> = Vec::new();
        let mut report = TickReport::default();

        for candidate in snapshot {
            if !self.host.is_active(&candidate.player) {
                gone.push(candidate.player);
                continue;
            }

            if !auto_reconnect && !self.host.has_permission(&candidate.player, BYPASS_PERMISSION) {
                report.held += 1;
                continue;
            }

            self.host
                .send_action_bar(&candidate.player, &self.settings.status_message);
            self.spawn_attempt(candidate);
            report.attempted += 1;
        }

        report.removed = self.tracker.forget_all(&gone);
        report
    }

    fn spawn_attempt(&mut self, candidate: ReconnectCandidate) {
        tracing::debug!(
            player = %candidate.player,
            backend = %candidate.target,
            fallback = candidate.fell_back_to_main,
            "Attempting reconnection"
        );
        self.in_flight.spawn(run_attempt(
            Arc::clone(&self.host),
            Arc::clone(&self.tracker),
            candidate,
            self.settings.attempt_timeout,
        ));
    }

    fn reap_finished(&mut self) {
        while let Some(result) = self.in_flight.try_join_next() {
            if let Err(e) = result {
                tracing::error!(error = %e, "Reconnect attempt task failed");
            }
        }
    }

    /// Wait for every in-flight attempt and return their reports.
    pub async fn settle(&mut self) -> Vec<AttemptReport> {
        let mut reports = Vec::with_capacity(self.in_flight.len());
        while let Some(result) = self.in_flight.join_next().await {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => tracing::error!(error = %e, "Reconnect attempt task failed"),
            }
        }
        reports
    }

    /// Attempts spawned but not yet reaped.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
