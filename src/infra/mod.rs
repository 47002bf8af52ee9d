//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over SeaORM entities
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{PostRepository, PostStore, UserRepository, UserStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxFuture, TxPostRepository, TxUserRepository, UnitOfWork,
};

#[cfg(test)]
pub use repositories::{MockPostRepository, MockUserRepository};
