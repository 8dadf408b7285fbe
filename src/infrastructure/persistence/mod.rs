//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Filtered, paginated user reads

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;
