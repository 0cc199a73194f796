//! Reconnection scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! Interval timer (first tick immediate)
//!     → runner.rs resolves main, snapshots the tracker
//!     → inactive sessions collected into a per-tick removal batch
//!     → policy.rs decides who may be attempted
//!     → attempt.rs connects each eligible player (spawned, own task)
//!         → success re-enters the tracker
//!         → failure/timeout leaves the player pending
//! ```
//!
//! # Design Decisions
//! - One task drives ticks, so ticks never overlap each other
//! - The tracker lock is never held across an await
//! - A panicking tick is contained; the timer keeps firing
//! - In-flight attempts live in a JoinSet and are drained at shutdown

pub mod attempt;
pub mod policy;
pub mod runner;

pub use attempt::{AttemptOutcome, AttemptReport};
pub use policy::{ReconnectPolicy, ADMIN_PERMISSION, BYPASS_PERMISSION};
pub use runner::{ReconnectScheduler, SchedulerSettings, TickReport};
