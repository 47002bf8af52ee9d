//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod post;
pub mod user;

pub use post::{ActiveModel as PostActiveModel, Entity as PostEntity, Model as PostModel};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
