//! User service - Handles user-related business logic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, user: CreateUser) -> AppResult<User>;

    /// Replace an existing user, addressed by the ID embedded in `user`
    async fn update_user(&self, user: UpdateUser) -> AppResult<User>;

    /// Delete user (and, through the foreign key, their posts)
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().find_all().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        let user = self.uow.users().create(user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, user: UpdateUser) -> AppResult<User> {
        let id = user.id;
        self.uow
            .users()
            .update(user)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.uow.users().delete_by_id(id).await? {
            return Err(AppError::UserNotFound(id));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
