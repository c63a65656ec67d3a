//! User sign-up backend.
//!
//! The [`domain`] module owns validation and orchestration behind the
//! [`domain::ports::UserRegistration`] driving port; [`outbound`] provides
//! in-process adapters for the repository and confirmation scheduler ports;
//! [`config`] loads service settings.

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::UserServiceSettings;
