//! HTTP handlers for the NGO directory endpoints.

use axum::extract::{Json, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::directory::{
    SearchOrganizationsHandler, SearchOrganizationsQuery,
};

use super::super::error::ErrorResponse;
use super::dto::{DirectoryParams, DirectoryResponse};

/// Directory API error.
#[derive(Debug)]
pub struct UnknownFocus(String);

impl IntoResponse for UnknownFocus {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::bad_request(format!("Unknown focus area: {}", self.0));
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

/// GET /api/organizations?focus=&q=
pub async fn list_organizations(
    Query(params): Query<DirectoryParams>,
) -> Result<Json<DirectoryResponse>, UnknownFocus> {
    let focus = match params.focus.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(raw.parse().map_err(|_| UnknownFocus(raw.to_string()))?),
    };

    let organizations = SearchOrganizationsHandler::new().handle(SearchOrganizationsQuery {
        focus,
        query: params.q,
    });
    Ok(Json(DirectoryResponse::new(organizations)))
}
