//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config.json / config.toml
//!     → loader.rs (read, or create an empty skeleton)
//!     → validation.rs (semantic checks)
//!     → LimboConfig (immutable for the life of the process)
//! ```
//!
//! # Design Decisions
//! - Format follows the file extension: `.toml` is TOML, anything else JSON
//! - All fields have defaults so the two backend names are the only keys a
//!   minimal file needs
//! - Empty backend names are valid and leave reconnection inert

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_init, ConfigError};
pub use schema::{AdminConfig, LimboConfig, LogFormat, ObservabilityConfig, ReconnectConfig};
pub use validation::{validate_config, ValidationError};
