//! Data models for the to-do application

mod todo;

pub use todo::{Priority, Status, TodoItem};

use serde::{Deserialize, Serialize};

/// Stored credential pair
///
/// Passwords are kept in plaintext; the store holds nothing else. A field
/// missing from the file reads as empty, which never matches a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
