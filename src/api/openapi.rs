//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{admin_handler, post_handler, user_handler};
use crate::domain::{
    AdminUserView, AdminUserViewV2, CreatePost, CreateUser, PostResponse, UpdateUser,
    UserResponse,
};
use crate::types::Link;

/// OpenAPI documentation for the RESTful Web Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RESTful Web Service",
        version = "0.1.0",
        description = "CRUD API for users and their posts with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Post endpoints
        post_handler::list_posts_by_user,
        post_handler::create_post,
        post_handler::get_post_by_user,
        post_handler::delete_post,
        // Admin endpoints
        admin_handler::list_users,
        admin_handler::get_user_v1,
        admin_handler::get_user_v2,
    ),
    components(
        schemas(
            CreateUser,
            UpdateUser,
            UserResponse,
            CreatePost,
            PostResponse,
            AdminUserView,
            AdminUserViewV2,
            Link,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Posts", description = "Posts owned by a user"),
        (name = "Admin", description = "Field-filtered user views")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/users",
            "/users/{id}",
            "/users/{id}/posts",
            "/users/{id}/posts/{post_id}",
            "/posts/{post_id}",
            "/admin/users",
            "/admin/v1/users/{id}",
            "/admin/v2/users/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }
}
