//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{PostService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with services wired to `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            user_service: container.users(),
            post_service: container.posts(),
            database,
        }
    }
}
