//! Port for scheduling sign-up confirmation emails.
//!
//! Scheduling may hand work to an outbox, a queue, or a mail relay; from the
//! registration service's point of view the call is synchronous and either
//! succeeds or fails with an [`EmailConfirmationError`].

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by email confirmation adapters.
    pub enum EmailConfirmationError {
        /// The scheduling backend could not be reached.
        Unavailable { message } =>
            "email confirmation scheduler unavailable: {message}",
        /// The backend refused to schedule the confirmation.
        Rejected { message } =>
            "email confirmation rejected: {message}",
    }
}

/// Port for confirmation email scheduling.
#[cfg_attr(test, mockall::automock)]
pub trait EmailConfirmationScheduler: Send + Sync {
    /// Schedule a confirmation email for a newly persisted user.
    fn schedule_confirmation(&self, user: &User) -> Result<(), EmailConfirmationError>;
}

/// Fixture implementation that accepts every request and sends nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmailConfirmationScheduler;

impl EmailConfirmationScheduler for FixtureEmailConfirmationScheduler {
    fn schedule_confirmation(&self, _user: &User) -> Result<(), EmailConfirmationError> {
        Ok(())
    }
}
