//! Repository trait definitions for the domain layer.
//!
//! Traits abstract data access so the application layer can be exercised
//! against in-memory fakes. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated with `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Filtered, paginated user reads

pub mod user_repository;

pub use user_repository::{UserFilter, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
