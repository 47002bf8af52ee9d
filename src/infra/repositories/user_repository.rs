//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in ID order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a new user; the ID is assigned by the database
    async fn create(&self, user: CreateUser) -> AppResult<User>;

    /// Replace every field of an existing user. `None` if the ID is unknown.
    async fn update(&self, user: UpdateUser) -> AppResult<Option<User>>;

    /// Delete user by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: CreateUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name),
            join_date: Set(user.join_date),
            password: Set(user.password),
            ssn: Set(user.ssn),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, user: UpdateUser) -> AppResult<Option<User>> {
        let Some(existing) = UserEntity::find_by_id(user.id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(user.name);
        active.join_date = Set(user.join_date);
        active.password = Set(user.password);
        active.ssn = Set(user.ssn);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Some(User::from(model)))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::config::Config;
    use crate::infra::Database;

    async fn store() -> UserStore {
        let db = Database::connect(&Config::in_memory()).await.unwrap();
        UserStore::new(db.get_connection())
    }

    fn new_user(name: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            join_date: Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap(),
            password: "pass1111".to_string(),
            ssn: "701010-1111111".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let store = store().await;

        let first = store.create(new_user("Kenneth")).await.unwrap();
        let second = store.create(new_user("Alice")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_then_find_round_trips() {
        let store = store().await;

        let created = store.create(new_user("Kenneth")).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = store().await;

        let result = store
            .update(UpdateUser {
                id: 42,
                name: "Nobody".to_string(),
                join_date: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
                password: "x".to_string(),
                ssn: "y".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let store = store().await;
        let created = store.create(new_user("Kenneth")).await.unwrap();

        let updated = store
            .update(UpdateUser {
                id: created.id,
                name: "Kenny".to_string(),
                join_date: Utc.with_ymd_and_hms(2019, 9, 9, 9, 9, 9).unwrap(),
                password: "new-pass".to_string(),
                ssn: "801010-2222222".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Kenny");
        assert_eq!(updated.password, "new-pass");
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let store = store().await;
        let created = store.create(new_user("Kenneth")).await.unwrap();

        assert!(store.delete_by_id(created.id).await.unwrap());
        assert!(!store.delete_by_id(created.id).await.unwrap());
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
