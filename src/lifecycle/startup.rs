//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and install logging/metrics
//! - Build the tracker and toggle the host will talk to
//! - Start the reconnect scheduler and, if enabled, the admin API

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::admin::{setup_admin_router, AdminState};
use crate::commands::{toggle_reconnect, CommandError, CommandSource};
use crate::config::loader::join_errors;
use crate::config::{validate_config, LimboConfig, ValidationError};
use crate::host::{LifecycleEvents, ProxyHost};
use crate::lifecycle::shutdown::Shutdown;
use crate::observability::{logging, metrics};
use crate::scheduler::{ReconnectPolicy, ReconnectScheduler, SchedulerSettings};
use crate::tracker::ReconnectTracker;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),
    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
    #[error("failed to bind admin API: {0}")]
    AdminBind(#[from] std::io::Error),
    #[error("invalid address '{0}'")]
    Address(String),
}

/// Handles to a started service.
pub struct RunningService {
    tracker: Arc<ReconnectTracker>,
    policy: Arc<ReconnectPolicy>,
    shutdown: Shutdown,
    scheduler: JoinHandle<()>,
    admin: Option<(SocketAddr, JoinHandle<()>)>,
}

/// Start reconnection for `host` with `config`.
///
/// Must be called from inside a tokio runtime.
pub async fn start<H: ProxyHost>(
    config: LimboConfig,
    host: Arc<H>,
) -> Result<RunningService, StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;

    logging::init_logging(&config.observability);

    // Bound before anything is spawned so a failure leaves nothing running.
    let listener = if config.admin.enabled {
        let addr = parse_addr(&config.admin.bind_address)?;
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        Some((listener, local_addr))
    } else {
        None
    };

    if config.observability.metrics_enabled {
        let addr = parse_addr(&config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    if !config.is_configured() {
        tracing::warn!("Main or limbo backend not set; reconnection is inert");
    }

    let tracker = Arc::new(ReconnectTracker::new(config.backend_names()));
    let policy = Arc::new(ReconnectPolicy::new(config.reconnect.auto_reconnect));
    let shutdown = Shutdown::new();

    let scheduler = ReconnectScheduler::new(
        host,
        tracker.clone(),
        policy.clone(),
        SchedulerSettings::from(&config.reconnect),
    );
    let scheduler_shutdown = shutdown.subscribe();
    let scheduler = tokio::spawn(scheduler.run(scheduler_shutdown));

    let admin = if let Some((listener, local_addr)) = listener {
        let router = setup_admin_router(AdminState::new(
            tracker.clone(),
            policy.clone(),
            config.admin.api_key.as_str(),
        ));
        let mut admin_shutdown = shutdown.subscribe();

        tracing::info!(address = %local_addr, "Admin API listening");
        let handle = tokio::spawn(async move {
            let served = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = admin_shutdown.recv().await;
                })
                .await;
            if let Err(e) = served {
                tracing::error!(error = %e, "Admin API stopped with error");
            }
        });
        Some((local_addr, handle))
    } else {
        None
    };

    tracing::info!(
        main = %config.main_server,
        limbo = %config.limbo_server,
        auto_reconnect = config.reconnect.auto_reconnect,
        "Limbo return service started"
    );

    Ok(RunningService {
        tracker,
        policy,
        shutdown,
        scheduler,
        admin,
    })
}

fn parse_addr(value: &str) -> Result<SocketAddr, StartupError> {
    value
        .parse()
        .map_err(|_| StartupError::Address(value.to_string()))
}

impl RunningService {
    /// Handle for the host's connection and disconnect event hooks.
    pub fn events(&self) -> LifecycleEvents {
        LifecycleEvents::new(self.tracker.clone())
    }

    pub fn tracker(&self) -> &Arc<ReconnectTracker> {
        &self.tracker
    }

    pub fn policy(&self) -> &Arc<ReconnectPolicy> {
        &self.policy
    }

    /// Run the toggle command for `source`.
    pub fn toggle_command<S: CommandSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<bool, CommandError> {
        toggle_reconnect(source, &self.policy)
    }

    /// Bound admin API address, when enabled.
    pub fn admin_addr(&self) -> Option<SocketAddr> {
        self.admin.as_ref().map(|(addr, _)| *addr)
    }

    /// Stop ticking, drain in-flight attempts, and close the admin API.
    pub async fn shutdown(self) {
        self.shutdown.trigger();

        if let Err(e) = self.scheduler.await {
            tracing::error!(error = %e, "Reconnect scheduler task failed");
        }
        if let Some((_, admin)) = self.admin {
            if let Err(e) = admin.await {
                tracing::error!(error = %e, "Admin API task failed");
            }
        }
        tracing::info!("Shutdown complete");
    }
}
