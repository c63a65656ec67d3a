//! Port abstraction for user persistence adapters and their errors.
//!
//! A repository either stores the user, declines to store it without an
//! exceptional condition (`PersistOutcome::NotStored`), or fails outright
//! with a [`UserPersistenceError`]. The registration service treats the last
//! two differently when building its error message.

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message } => "user repository query failed: {message}",
    }
}

/// Result of a persistence attempt that did not fail exceptionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The user was durably stored.
    Stored,
    /// Storage logically declined the user.
    NotStored,
}

impl PersistOutcome {
    /// Whether the user ended up in storage.
    #[must_use]
    pub fn is_stored(self) -> bool {
        matches!(self, Self::Stored)
    }
}

/// Port for user storage.
///
/// Implementations must be safe to call from several threads; the
/// registration service places no ordering guarantee across concurrent calls.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Persist a freshly created user.
    fn persist(&self, user: &User) -> Result<PersistOutcome, UserPersistenceError>;
}

/// Fixture implementation for testing without real storage.
///
/// Every user is reported as stored and then discarded. Use it in tests where
/// persistence behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

impl UserRepository for FixtureUserRepository {
    fn persist(&self, _user: &User) -> Result<PersistOutcome, UserPersistenceError> {
        Ok(PersistOutcome::Stored)
    }
}
