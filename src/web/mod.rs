//! Web layer for the browser UI.
//!
//! Server-side rendered HTML built with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and their templates
//! - [`pagination`] - Precomputed pagination controls
//! - [`params`] - Lenient query-string parsing
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod pagination;
pub mod params;
pub mod routes;
