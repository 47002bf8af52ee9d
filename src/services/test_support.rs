//! Unit of Work double backed by repository mocks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    MockPostRepository, MockUserRepository, PostRepository, TransactionContext, TxFuture,
    UnitOfWork, UserRepository,
};

pub(crate) struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    post_repo: Arc<MockPostRepository>,
}

impl TestUnitOfWork {
    pub(crate) fn new(user_repo: MockUserRepository, post_repo: MockPostRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            post_repo: Arc::new(post_repo),
        }
    }

    pub(crate) fn with_users(user_repo: MockUserRepository) -> Self {
        Self::new(user_repo, MockPostRepository::new())
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn posts(&self) -> Arc<dyn PostRepository> {
        self.post_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        // Transaction not supported in test mock
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
