//! Email confirmation adapters.
//!
//! No mail is delivered from this crate. The outbox adapter records each
//! scheduled confirmation and logs it, leaving delivery to whatever drains
//! the outbox.

use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::domain::ports::{EmailConfirmationError, EmailConfirmationScheduler};
use crate::domain::{User, UserId};

/// A confirmation email waiting to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    /// User the confirmation belongs to.
    pub user_id: UserId,
    /// Address the confirmation is sent to.
    pub recipient: String,
    /// Address the confirmation is sent from.
    pub sender: String,
}

/// Scheduler that appends confirmations to an in-memory outbox.
///
/// Users without an email address are rejected with
/// [`EmailConfirmationError::Rejected`]; there is nowhere to send the
/// confirmation.
#[derive(Debug)]
pub struct OutboxEmailConfirmationScheduler {
    sender: String,
    outbox: Mutex<Vec<ConfirmationEmail>>,
}

impl OutboxEmailConfirmationScheduler {
    /// Create a scheduler sending from `sender`.
    #[must_use]
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the confirmations scheduled so far, oldest first.
    pub fn pending(&self) -> Result<Vec<ConfirmationEmail>, EmailConfirmationError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ConfirmationEmail>>, EmailConfirmationError> {
        self.outbox
            .lock()
            .map_err(|_| EmailConfirmationError::unavailable("confirmation outbox lock poisoned"))
    }
}

impl EmailConfirmationScheduler for OutboxEmailConfirmationScheduler {
    fn schedule_confirmation(&self, user: &User) -> Result<(), EmailConfirmationError> {
        let recipient = user.email().trim();
        if recipient.is_empty() {
            return Err(EmailConfirmationError::rejected(
                "user has no email address",
            ));
        }

        let email = ConfirmationEmail {
            user_id: user.id().clone(),
            recipient: recipient.to_owned(),
            sender: self.sender.clone(),
        };
        self.lock()?.push(email);
        info!(
            user_id = %user.id(),
            recipient,
            sender = %self.sender,
            "confirmation email scheduled"
        );
        Ok(())
    }
}
