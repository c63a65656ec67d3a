//! Driving port for sign-up commands.
//!
//! Inbound adapters (the CLI today) translate their input into a
//! [`SignUpForm`] and call this port; validation, persistence and
//! confirmation scheduling live behind it. The interface is synchronous:
//! collaborators are awaited in-line.

use crate::domain::{Error, SignUpForm, User};

/// Domain use-case port for user registration.
pub trait UserRegistration: Send + Sync {
    /// Validate the form, persist the user, and schedule its confirmation.
    fn register(&self, form: &SignUpForm) -> Result<User, Error>;
}
