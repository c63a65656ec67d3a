//! Domain primitives, ports, and the sign-up service.
//!
//! Purpose: Define strongly typed domain entities and the orchestration that
//! creates them. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): domain error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User (alias to `user::User`): registered user identity.
//! - SignUpForm (alias to `sign_up::SignUpForm`): raw sign-up input.
//! - UserRegistrationService: implementation of the
//!   [`ports::UserRegistration`] driving port.

pub mod error;
pub mod ports;
pub mod sign_up;
pub mod user;
mod user_registration_service;

pub use self::error::{Error, ErrorCode};
pub use self::sign_up::SignUpForm;
pub use self::user::{FirstName, User, UserId, UserValidationError};
pub use self::user_registration_service::{COULD_NOT_CREATE_USER, UserRegistrationService};
