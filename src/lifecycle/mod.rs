//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → logging/metrics → tracker + policy
//!     → spawn scheduler → bind admin API (optional)
//!
//! Shutdown (shutdown.rs):
//!     Host shutdown → trigger once → scheduler stops ticking
//!     → in-flight attempts drained → admin API closed
//! ```
//!
//! # Design Decisions
//! - Startup errors are returned to the host, never panicked on
//! - Shutdown is idempotent; only the first trigger broadcasts
//! - Drain is bounded by `reconnect.drain_timeout_secs`

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, RunningService, StartupError};
