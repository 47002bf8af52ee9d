//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod post_repository;
mod user_repository;

pub use post_repository::{PostRepository, PostStore};
pub use user_repository::{UserRepository, UserStore};

// Mocks for service unit tests
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
