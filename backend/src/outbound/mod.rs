//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: user storage
//! - **email**: confirmation email scheduling
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod email;
pub mod persistence;
