//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod post;
pub mod user;

pub use post::{CreatePost, Post, PostResponse};
pub use user::{
    AdminUserView, AdminUserViewV2, CreateUser, UpdateUser, User, UserResponse,
};
