//! Domain layer containing the directory's entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::User`], [`entities::UserPage`])
//! - [`repositories`] - Data access trait definitions
//! - [`user_query`] - Normalized listing request and its cache key
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Read-through caching is orchestrated in [`crate::application::services`]

pub mod entities;
pub mod repositories;
pub mod user_query;
