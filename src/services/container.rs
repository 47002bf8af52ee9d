//! Service Container - Centralized service access.
//!
//! Depends on service traits, not implementations, so handlers can be
//! exercised against any `UserService` / `PostService`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{PostManager, PostService, UserManager, UserService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get post service
    fn posts(&self) -> Arc<dyn PostService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    post_service: Arc<dyn PostService>,
}

impl Services {
    /// Create service container over a single Unit of Work on `db`
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let user_service = Arc::new(UserManager::new(uow.clone()));
        let post_service = Arc::new(PostManager::new(uow));

        Self {
            user_service,
            post_service,
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn posts(&self) -> Arc<dyn PostService> {
        self.post_service.clone()
    }
}
