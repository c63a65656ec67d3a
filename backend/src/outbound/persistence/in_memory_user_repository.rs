//! In-process user repository backed by a mutex-guarded map.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::domain::ports::{PersistOutcome, UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// User repository keeping every stored user in memory.
///
/// A user whose id is already present is declined with
/// [`PersistOutcome::NotStored`] rather than overwritten. A poisoned lock
/// surfaces as [`UserPersistenceError::Query`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored user by identifier.
    pub fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.get(id).cloned())
    }

    /// Number of stored users.
    pub fn len(&self) -> Result<usize, UserPersistenceError> {
        Ok(self.lock()?.len())
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn persist(&self, user: &User) -> Result<PersistOutcome, UserPersistenceError> {
        let mut users = self.lock()?;
        if users.contains_key(user.id()) {
            warn!(user_id = %user.id(), "user id already stored; declining");
            return Ok(PersistOutcome::NotStored);
        }
        users.insert(user.id().clone(), user.clone());
        debug!(user_id = %user.id(), stored = users.len(), "user stored");
        Ok(PersistOutcome::Stored)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::domain::FirstName;
    use rstest::{fixture, rstest};

    fn user_named(first_name: &str) -> User {
        User::new(
            UserId::random(),
            FirstName::new(first_name).expect("valid first name"),
            "Affeldt",
            "email@email.com",
        )
    }

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    fn persist_then_find(repo: InMemoryUserRepository) {
        let user = user_named("Bruno");

        let outcome = repo.persist(&user).expect("persist succeeds");

        assert_eq!(outcome, PersistOutcome::Stored);
        assert_eq!(
            repo.find_by_id(user.id()).expect("lookup succeeds"),
            Some(user)
        );
    }

    #[rstest]
    fn duplicate_ids_are_declined(repo: InMemoryUserRepository) {
        let user = user_named("Bruno");
        repo.persist(&user).expect("first persist succeeds");

        let outcome = repo.persist(&user).expect("second persist succeeds");

        assert_eq!(outcome, PersistOutcome::NotStored);
        assert_eq!(repo.len().expect("count"), 1);
    }

    #[rstest]
    fn starts_empty(repo: InMemoryUserRepository) {
        assert!(repo.is_empty().expect("count"));
        assert_eq!(
            repo.find_by_id(&UserId::random()).expect("lookup succeeds"),
            None
        );
    }

    #[rstest]
    fn concurrent_persists_store_every_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&repo);
                thread::spawn(move || shared.persist(&user_named("Ada")))
            })
            .collect();

        for handle in handles {
            let outcome = handle
                .join()
                .expect("thread completes")
                .expect("persist succeeds");
            assert!(outcome.is_stored());
        }
        assert_eq!(repo.len().expect("count"), 8);
    }
}
