//! # SimpleCICD Core
//!
//! Configuration loading and error types shared by the SimpleCICD demo
//! API. The service itself is intentionally tiny; this crate carries the
//! pieces the HTTP layer should not own directly.

pub mod config;
pub mod errors;

// Re-export commonly used types
pub use config::ServerConfig;
pub use errors::{CoreError, ServerError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::errors::*;
}
