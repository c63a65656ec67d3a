//! Domain service orchestrating user sign-up.
//!
//! The flow is linear with an early exit on every failure:
//!
//! 1. reject a blank first name before touching any collaborator;
//! 2. mint a fresh [`UserId`] and build the [`User`];
//! 3. persist it through the [`UserRepository`];
//! 4. schedule the confirmation email through the
//!    [`EmailConfirmationScheduler`];
//! 5. hand the user back.
//!
//! Collaborator failures are re-surfaced as [`ErrorCode::ServiceError`]
//! carrying the collaborator's own message. A scheduling failure does not
//! undo the persistence that already happened; the returned error says so in
//! its details (`persisted: true`) so callers can compensate.
//!
//! [`ErrorCode::ServiceError`]: crate::domain::ErrorCode::ServiceError

use std::sync::Arc;

use serde_json::json;

use crate::domain::ports::{
    EmailConfirmationError, EmailConfirmationScheduler, UserPersistenceError, UserRegistration,
    UserRepository,
};
use crate::domain::{Error, FirstName, SignUpForm, User, UserId};

/// Message returned when the repository declines to store a user.
pub const COULD_NOT_CREATE_USER: &str = "Could not create user";

/// User registration service implementing the [`UserRegistration`] port.
#[derive(Clone)]
pub struct UserRegistrationService<R, S> {
    users_repo: Arc<R>,
    confirmation_scheduler: Arc<S>,
}

impl<R, S> UserRegistrationService<R, S> {
    /// Create a new service with the given collaborators.
    #[must_use]
    pub fn new(users_repo: Arc<R>, confirmation_scheduler: Arc<S>) -> Self {
        Self {
            users_repo,
            confirmation_scheduler,
        }
    }
}

impl<R, S> UserRegistrationService<R, S>
where
    R: UserRepository,
    S: EmailConfirmationScheduler,
{
    /// Create a user from raw sign-up fields.
    ///
    /// `password` and `repeat_password` are accepted but neither compared
    /// nor stored.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::InvalidArgument`] with `"User's first name is empty"`
    ///   when `first_name` is blank. No collaborator is called.
    /// - [`ErrorCode::ServiceError`] when the repository fails, declines the
    ///   user (`"Could not create user"`), or the scheduler fails. A failing
    ///   collaborator's message is passed through; a blank one is replaced
    ///   with [`ErrorCode::fallback_message`]. A scheduler failure leaves the
    ///   user persisted and carries `{"userId", "persisted": true}` details.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::UserRegistrationService;
    /// use backend::domain::ports::{FixtureEmailConfirmationScheduler, FixtureUserRepository};
    ///
    /// let service = UserRegistrationService::new(
    ///     Arc::new(FixtureUserRepository),
    ///     Arc::new(FixtureEmailConfirmationScheduler),
    /// );
    /// let user = service
    ///     .create_user("Bruno", "Affeldt", "email@email.com", "1234560", "1234560")
    ///     .expect("fixtures accept every user");
    /// assert_eq!(user.first_name().as_ref(), "Bruno");
    /// ```
    ///
    /// [`ErrorCode::InvalidArgument`]: crate::domain::ErrorCode::InvalidArgument
    /// [`ErrorCode::ServiceError`]: crate::domain::ErrorCode::ServiceError
    /// [`ErrorCode::fallback_message`]: crate::domain::ErrorCode::fallback_message
    pub fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        repeat_password: &str,
    ) -> Result<User, Error> {
        let form = SignUpForm::new(first_name, last_name, email, password, repeat_password);
        self.register(&form)
    }

    fn build_user(form: &SignUpForm) -> Result<User, Error> {
        let first_name = FirstName::new(form.first_name())
            .map_err(|err| Error::invalid_argument(err.to_string()))?;
        Ok(User::new(
            UserId::random(),
            first_name,
            form.last_name(),
            form.email(),
        ))
    }

    fn map_persistence_error(error: &UserPersistenceError) -> Error {
        Error::service(error.message())
    }

    fn map_confirmation_error(error: &EmailConfirmationError, user: &User) -> Error {
        Error::service(error.message()).with_details(json!({
            "userId": user.id().as_ref(),
            "persisted": true,
        }))
    }
}

impl<R, S> UserRegistration for UserRegistrationService<R, S>
where
    R: UserRepository,
    S: EmailConfirmationScheduler,
{
    fn register(&self, form: &SignUpForm) -> Result<User, Error> {
        let user = Self::build_user(form)?;

        let outcome = self
            .users_repo
            .persist(&user)
            .map_err(|err| Self::map_persistence_error(&err))?;
        if !outcome.is_stored() {
            return Err(Error::service(COULD_NOT_CREATE_USER));
        }

        self.confirmation_scheduler
            .schedule_confirmation(&user)
            .map_err(|err| Self::map_confirmation_error(&err, &user))?;

        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_registration_service_tests.rs"]
mod tests;
