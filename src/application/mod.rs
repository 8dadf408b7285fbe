//! Application layer services implementing business logic.
//!
//! Services orchestrate repository and cache calls and give HTTP handlers and
//! the admin CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Paginated, cached user listing

pub mod services;
