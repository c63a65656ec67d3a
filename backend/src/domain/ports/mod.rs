//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod email_confirmation_scheduler;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use email_confirmation_scheduler::MockEmailConfirmationScheduler;
pub use email_confirmation_scheduler::{
    EmailConfirmationError, EmailConfirmationScheduler, FixtureEmailConfirmationScheduler,
};
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{
    FixtureUserRepository, PersistOutcome, UserPersistenceError, UserRepository,
};
