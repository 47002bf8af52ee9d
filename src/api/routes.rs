//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{admin_routes, health_routes, post_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and health check endpoints
        .merge(health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Users and their posts
        .merge(user_routes())
        .merge(post_routes())
        // Field-filtered admin views
        .nest("/admin", admin_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
