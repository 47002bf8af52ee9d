//! Post domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Post domain entity, always owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i32,
    pub description: String,
    pub user_id: i32,
}

impl Post {
    /// Check whether this post belongs to the given user
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

/// Post creation data transfer object; the owner comes from the request path
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePost {
    /// Free-text body of the post
    #[schema(example = "My first post")]
    pub description: String,
}

/// Post response; the owning user is implied by the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "My first post")]
    pub description: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            description: post.description,
        }
    }
}
