//! Authentication module - registration and credential checks over a user store

use crate::models::UserRecord;
use crate::store::UserRepository;

/// Registration and login against a [`UserRepository`]
///
/// Both operations answer with a plain `bool`. An empty username or password
/// is rejected before the store is touched. A duplicate username also
/// yields `false`, so callers that want a distinct message must validate
/// input themselves first.
pub struct AuthService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// True iff a stored record matches both fields exactly
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        let ok = self
            .repo
            .load()
            .iter()
            .any(|user| user.matches(username, password));

        log::debug!("[auth] authenticate {}: {}", username, ok);
        ok
    }

    /// Append a new record unless the username is taken
    ///
    /// Load, append and save are separate steps with no locking.
    pub fn register(&self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        let mut users = self.repo.load();
        if users.iter().any(|user| user.username == username) {
            log::debug!("[auth] register {}: username taken", username);
            return false;
        }

        users.push(UserRecord::new(username, password));
        self.repo.save(&users);

        log::info!("[auth] registered {}", username);
        true
    }
}
