//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            user_service,
            cache,
        }
    }
}
