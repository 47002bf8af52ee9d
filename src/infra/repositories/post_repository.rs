//! Post repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::post::{self, ActiveModel, Entity as PostEntity};
use crate::domain::Post;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List the posts owned by a user, in ID order
    async fn find_by_user(&self, user_id: i32) -> AppResult<Vec<Post>>;

    /// Find post by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>>;

    /// Insert a new post owned by `user_id`
    async fn create(&self, user_id: i32, description: String) -> AppResult<Post>;

    /// Delete post by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn find_by_user(&self, user_id: i32) -> AppResult<Vec<Post>> {
        let models = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Post::from))
    }

    async fn create(&self, user_id: i32, description: String) -> AppResult<Post> {
        let active_model = ActiveModel {
            id: NotSet,
            description: Set(description),
            user_id: Set(user_id),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
