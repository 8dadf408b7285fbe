//! Core domain entities representing the directory's data model.
//!
//! Entities are plain data structures without storage concerns. Rows are
//! mapped into them by the persistence layer.
//!
//! # Entity Types
//!
//! - [`User`] - A user record (read-only projection)
//! - [`UserPage`] - One page of a listing plus pagination metadata

pub mod user;

pub use user::{User, UserPage};
