//! # todo-core
//!
//! Core logic for the to-do CLI.
//!
//! This crate provides:
//! - User store persistence (`store` module)
//! - Registration and login (`auth` module)
//! - Data models (`models` module)
//! - Store path configuration (`config` module)
//! - Unified error handling (`error` module)

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use auth::AuthService;
pub use error::{Error, Result};
pub use models::{Priority, Status, TodoItem, UserRecord};
pub use store::{JsonUserStore, UserRepository};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let v = version();
        // Should be semver format: x.y.z
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be in x.y.z format");
    }
}
