//! Admin handlers returning field-filtered user views.
//!
//! The projections are explicit allow-lists: each view type names exactly
//! the fields it serializes.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{AdminUserView, AdminUserViewV2};
use crate::errors::AppResult;

/// Create admin routes (nested under `/admin`)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/v1/users/:id", get(get_user_v1))
        .route("/v2/users/:id", get(get_user_v2))
}

/// List all users (admin field set)
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Admin",
    responses(
        (status = 200, description = "All users as id, name, joinDate, password", body = Vec<AdminUserView>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<AdminUserView>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(AdminUserView::from).collect()))
}

/// Get user by ID, version 1 field set
#[utoipa::path(
    get,
    path = "/admin/v1/users/{id}",
    tag = "Admin",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User as id, name, joinDate, password", body = AdminUserView),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_v1(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AdminUserView>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(AdminUserView::from(user)))
}

/// Get user by ID, version 2 field set (adds grade)
#[utoipa::path(
    get,
    path = "/admin/v2/users/{id}",
    tag = "Admin",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User as id, name, joinDate, password, grade", body = AdminUserViewV2),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_v2(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AdminUserViewV2>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(AdminUserViewV2::from(user)))
}
