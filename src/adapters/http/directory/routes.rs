//! HTTP routes for the NGO directory endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::list_organizations;

/// Creates the directory router with all routes.
pub fn directory_routes() -> Router {
    Router::new()
        // GET /api/organizations
        .route("/api/organizations", get(list_organizations))
}
