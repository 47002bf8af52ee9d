//! Post service - Handles posts scoped to their owning user.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CreatePost, Post};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// List the posts of an existing user
    async fn list_posts_for_user(&self, user_id: i32) -> AppResult<Vec<Post>>;

    /// Create a post owned by an existing user
    async fn create_post(&self, user_id: i32, post: CreatePost) -> AppResult<Post>;

    /// Get a post, which must belong to the given user
    async fn get_post_for_user(&self, user_id: i32, post_id: i32) -> AppResult<Post>;

    /// Delete post by ID
    async fn delete_post(&self, post_id: i32) -> AppResult<()>;
}

/// Concrete implementation of PostService using Unit of Work.
pub struct PostManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PostManager<U> {
    /// Create new post service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_user_exists(&self, user_id: i32) -> AppResult<()> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or(AppError::UserNotFound(user_id))
    }
}

#[async_trait]
impl<U: UnitOfWork> PostService for PostManager<U> {
    async fn list_posts_for_user(&self, user_id: i32) -> AppResult<Vec<Post>> {
        self.ensure_user_exists(user_id).await?;
        self.uow.posts().find_by_user(user_id).await
    }

    async fn create_post(&self, user_id: i32, post: CreatePost) -> AppResult<Post> {
        let description = post.description;

        // Owner lookup and insert share one transaction
        let post = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    ctx.users()
                        .find_by_id(user_id)
                        .await?
                        .ok_or(AppError::UserNotFound(user_id))?;
                    ctx.posts().create(user_id, description).await
                })
            })
            .await?;

        tracing::info!(user_id, post_id = post.id, "Post created");
        Ok(post)
    }

    async fn get_post_for_user(&self, user_id: i32, post_id: i32) -> AppResult<Post> {
        self.ensure_user_exists(user_id)
            .await
            .map_err(|e| match e {
                AppError::UserNotFound(id) => AppError::PostOwnerNotFound(id),
                other => other,
            })?;

        self.uow
            .posts()
            .find_by_id(post_id)
            .await?
            .filter(|post| post.is_owned_by(user_id))
            .ok_or(AppError::PostNotFound(post_id))
    }

    async fn delete_post(&self, post_id: i32) -> AppResult<()> {
        if !self.uow.posts().delete_by_id(post_id).await? {
            return Err(AppError::PostNotFound(post_id));
        }
        tracing::info!(post_id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    use super::*;
    use crate::config::Config;
    use crate::domain::{CreateUser, User};
    use crate::infra::{Database, MockPostRepository, MockUserRepository, Persistence};
    use crate::services::test_support::TestUnitOfWork;

    fn owner(id: i32) -> User {
        User {
            id,
            name: "Owner".to_string(),
            join_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            password: "pass1111".to_string(),
            ssn: "701010-1111111".to_string(),
        }
    }

    fn post(id: i32, user_id: i32) -> Post {
        Post {
            id,
            description: format!("post {}", id),
            user_id,
        }
    }

    fn users_with(existing: i32) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |id| Ok((id == existing).then(|| owner(id))));
        users
    }

    #[tokio::test]
    async fn test_list_posts_requires_user() {
        let service = PostManager::new(Arc::new(TestUnitOfWork::new(
            users_with(1),
            MockPostRepository::new(),
        )));

        let result = service.list_posts_for_user(2).await;
        assert!(matches!(result, Err(AppError::UserNotFound(2))));
    }

    #[tokio::test]
    async fn test_list_posts_for_user() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_user()
            .with(eq(1))
            .returning(|user_id| Ok(vec![post(10, user_id), post(11, user_id)]));

        let service = PostManager::new(Arc::new(TestUnitOfWork::new(users_with(1), posts)));

        let listed = service.list_posts_for_user(1).await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_get_post_of_another_user_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(post(id, 7))));

        let service = PostManager::new(Arc::new(TestUnitOfWork::new(users_with(1), posts)));

        let result = service.get_post_for_user(1, 10).await;
        assert!(matches!(result, Err(AppError::PostNotFound(10))));
    }

    #[tokio::test]
    async fn test_get_post_of_missing_user() {
        let service = PostManager::new(Arc::new(TestUnitOfWork::new(
            users_with(1),
            MockPostRepository::new(),
        )));

        let result = service.get_post_for_user(2, 10).await;
        assert!(matches!(result, Err(AppError::PostOwnerNotFound(2))));
    }

    #[tokio::test]
    async fn test_get_missing_post() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(None));

        let service = PostManager::new(Arc::new(TestUnitOfWork::new(users_with(1), posts)));

        let result = service.get_post_for_user(1, 10).await;
        assert!(matches!(result, Err(AppError::PostNotFound(10))));
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let mut posts = MockPostRepository::new();
        posts.expect_delete_by_id().returning(|_| Ok(false));

        let service = PostManager::new(Arc::new(TestUnitOfWork::new(
            MockUserRepository::new(),
            posts,
        )));

        let result = service.delete_post(4).await;
        assert!(matches!(result, Err(AppError::PostNotFound(4))));
    }

    #[tokio::test]
    async fn test_create_post_against_database() {
        let db = Database::connect(&Config::in_memory()).await.unwrap();
        let uow = Arc::new(Persistence::new(db.get_connection()));
        let user = uow
            .users()
            .create(CreateUser {
                name: "Kenneth".to_string(),
                join_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                password: "pass1111".to_string(),
                ssn: "701010-1111111".to_string(),
            })
            .await
            .unwrap();
        let service = PostManager::new(uow);

        let created = service
            .create_post(
                user.id,
                CreatePost {
                    description: "hello".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(created.user_id, user.id);

        let missing_owner = service
            .create_post(
                user.id + 1,
                CreatePost {
                    description: "orphan".to_string(),
                },
            )
            .await;
        assert!(matches!(missing_owner, Err(AppError::UserNotFound(id)) if id == user.id + 1));

        let listed = service.list_posts_for_user(user.id).await.unwrap();
        assert_eq!(listed, vec![created]);
    }
}
