//! Persistence adapters implementing the user repository port.
//!
//! Adapters only translate between storage and domain types. No business
//! logic resides here.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
