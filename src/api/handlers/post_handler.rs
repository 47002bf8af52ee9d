//! Post handlers, nested under their owning user.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};

use super::user_handler::user_location;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreatePost, PostResponse};
use crate::errors::AppResult;
use crate::types::{Created, Links, NoContent, Resource};

fn posts_of_user(user_id: i32) -> String {
    format!("{}/posts", user_location(user_id))
}

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:id/posts",
            get(list_posts_by_user).post(create_post),
        )
        .route("/users/:id/posts/:post_id", get(get_post_by_user))
        .route("/posts/:post_id", delete(delete_post))
}

/// List the posts of a user
#[utoipa::path(
    get,
    path = "/users/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Posts of the user", body = Vec<PostResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_posts_by_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.post_service.list_posts_for_user(id).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Create a post owned by the user
#[utoipa::path(
    post,
    path = "/users/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = CreatePost,
    responses(
        (status = 201, description = "Post created; `Location` points at it", body = PostResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreatePost>,
) -> AppResult<Created<PostResponse>> {
    let post = state.post_service.create_post(id, payload).await?;
    let location = format!("{}/{}", posts_of_user(id), post.id);
    Ok(Created::new(location, PostResponse::from(post)))
}

/// Get one post of a user, with links to related resources
#[utoipa::path(
    get,
    path = "/users/{id}/posts/{post_id}",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "User ID"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post with `_links`", body = PostResponse),
        (status = 404, description = "User or post not found")
    )
)]
pub async fn get_post_by_user(
    State(state): State<AppState>,
    Path((id, post_id)): Path<(i32, i32)>,
) -> AppResult<Json<Resource<PostResponse>>> {
    let post = state.post_service.get_post_for_user(id, post_id).await?;

    let links = Links::new()
        .with("self", format!("{}/{}", posts_of_user(id), post_id))
        .with("all-posts-of-user", posts_of_user(id))
        .with("user", user_location(id));

    Ok(Json(Resource::new(PostResponse::from(post), links)))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/posts/{post_id}",
    tag = "Posts",
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> AppResult<NoContent> {
    state.post_service.delete_post(post_id).await?;
    Ok(NoContent)
}
