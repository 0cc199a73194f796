//! Limbo return: sends players parked on a limbo backend back to where they
//! came from once it is reachable again.
//!
//! # Architecture Overview
//!
//! ```text
//!   Host events ──▶ host::events ──▶ tracker (pending set, one lock)
//!                                        ▲          │ snapshot
//!                                        │          ▼
//!   success ◀── scheduler::attempt ◀── scheduler::runner ◀── interval timer
//!                    │
//!                    ▼
//!            ProxyHost::connect
//!
//!   commands / admin API ──▶ scheduler::policy (auto-reconnect toggle)
//! ```

// Core
pub mod host;
pub mod scheduler;
pub mod tracker;

// Operator surface
pub mod admin;
pub mod commands;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::LimboConfig;
pub use host::{BackendHandle, ConnectionEvent, ConnectionStatus, PlayerId, ProxyHost};
pub use lifecycle::{start, RunningService, Shutdown, StartupError};
pub use scheduler::{ReconnectPolicy, ReconnectScheduler};
pub use tracker::ReconnectTracker;
