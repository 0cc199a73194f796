//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Tracker, scheduler, admin API produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Player ids and backend names are log fields, not message text
//! - Metrics are no-ops until an exporter is installed
//! - An embedding host's tracing subscriber takes precedence over ours

pub mod logging;
pub mod metrics;
