//! HTTP handlers for the calculator endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::calculator::{
    CalculateCommand, CalculateHandler, GetCalculationHandler, GetCalculationQuery,
    GetReportHandler, GetReportQuery, GoBackCommand, GoBackHandler, ResetCalculationCommand,
    ResetCalculationHandler, StartCalculationHandler, SubmitCargoCommand, SubmitCargoHandler,
    SubmitRouteCommand, SubmitRouteHandler, WizardFlowError,
};
use crate::domain::foundation::CalculationId;
use crate::ports::{CalculationStore, EmissionModel};

use super::super::error::ErrorResponse;
use super::dto::{
    CalculateRequest, CalculationView, CatalogResponse, EmissionReport, SubmitCargoRequest,
    SubmitRouteRequest,
};

// ════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════

/// Calculator API error that implements IntoResponse.
#[derive(Debug)]
pub enum CalculatorApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for CalculatorApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            CalculatorApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            CalculatorApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Calculation", &id))
            }
            CalculatorApiError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorResponse::conflict(msg))
            }
            CalculatorApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<WizardFlowError> for CalculatorApiError {
    fn from(error: WizardFlowError) -> Self {
        match error {
            WizardFlowError::Validation(e) => CalculatorApiError::BadRequest(e.to_string()),
            WizardFlowError::State(e) => CalculatorApiError::Conflict(e.to_string()),
            WizardFlowError::NotFound(id) => CalculatorApiError::NotFound(id.to_string()),
            WizardFlowError::ReportNotReady => CalculatorApiError::Conflict(
                "The calculator has not finished; no report to show".to_string(),
            ),
            WizardFlowError::Storage(msg) => CalculatorApiError::Internal(msg),
            WizardFlowError::Model(msg) => CalculatorApiError::Internal(msg),
            WizardFlowError::Scoring(e) => CalculatorApiError::Internal(e.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════

/// Shared state for calculator endpoints.
#[derive(Clone)]
pub struct CalculatorAppState {
    pub store: Arc<dyn CalculationStore>,
    pub model: Arc<dyn EmissionModel>,
    /// Artificial "Calculating…" interval before the report lands.
    pub pacing: Duration,
}

impl CalculatorAppState {
    pub fn start_handler(&self) -> StartCalculationHandler {
        StartCalculationHandler::new(self.store.clone())
    }

    pub fn submit_route_handler(&self) -> SubmitRouteHandler {
        SubmitRouteHandler::new(self.store.clone())
    }

    pub fn submit_cargo_handler(&self) -> SubmitCargoHandler {
        SubmitCargoHandler::new(self.store.clone())
    }

    pub fn calculate_handler(&self) -> CalculateHandler {
        CalculateHandler::new(self.store.clone(), self.model.clone()).with_pacing(self.pacing)
    }

    pub fn go_back_handler(&self) -> GoBackHandler {
        GoBackHandler::new(self.store.clone())
    }

    pub fn reset_handler(&self) -> ResetCalculationHandler {
        ResetCalculationHandler::new(self.store.clone())
    }

    pub fn get_handler(&self) -> GetCalculationHandler {
        GetCalculationHandler::new(self.store.clone())
    }

    pub fn report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.store.clone(), self.model.clone())
    }
}

fn parse_id(raw: &str) -> Result<CalculationId, CalculatorApiError> {
    raw.parse()
        .map_err(|_| CalculatorApiError::BadRequest("Invalid calculation ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════

/// POST /api/calculations
pub async fn start_calculation(
    State(state): State<CalculatorAppState>,
) -> Result<(StatusCode, Json<CalculationView>), CalculatorApiError> {
    let calculation = state.start_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(CalculationView::from(&calculation))))
}

/// GET /api/calculations/:id
pub async fn get_calculation(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
) -> Result<Json<CalculationView>, CalculatorApiError> {
    let calculation = state
        .get_handler()
        .handle(GetCalculationQuery {
            calculation_id: parse_id(&id)?,
        })
        .await?;
    Ok(Json(CalculationView::from(&calculation)))
}

/// POST /api/calculations/:id/route
pub async fn submit_route(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
    Json(body): Json<SubmitRouteRequest>,
) -> Result<Json<CalculationView>, CalculatorApiError> {
    let calculation = state
        .submit_route_handler()
        .handle(SubmitRouteCommand {
            calculation_id: parse_id(&id)?,
            source: body.source,
            destination: body.destination,
        })
        .await?;
    Ok(Json(CalculationView::from(&calculation)))
}

/// POST /api/calculations/:id/cargo
pub async fn submit_cargo(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
    Json(body): Json<SubmitCargoRequest>,
) -> Result<Json<CalculationView>, CalculatorApiError> {
    let calculation = state
        .submit_cargo_handler()
        .handle(SubmitCargoCommand {
            calculation_id: parse_id(&id)?,
            weight: body.weight.into_raw(),
        })
        .await?;
    Ok(Json(CalculationView::from(&calculation)))
}

/// POST /api/calculations/:id/transport
///
/// Runs the paced calculation and answers with the composed report.
pub async fn calculate(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
    Json(body): Json<CalculateRequest>,
) -> Result<Json<EmissionReport>, CalculatorApiError> {
    let report = state
        .calculate_handler()
        .handle(CalculateCommand {
            calculation_id: parse_id(&id)?,
            mode: body.mode,
            vehicle_type: body.vehicle_type,
        })
        .await?;
    match report {
        Some(report) => Ok(Json(report)),
        // The session was reset or dropped while the delay ran.
        None => Err(CalculatorApiError::Conflict(
            "Calculation was superseded before it finished".to_string(),
        )),
    }
}

/// POST /api/calculations/:id/back
pub async fn go_back(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
) -> Result<Json<CalculationView>, CalculatorApiError> {
    let calculation = state
        .go_back_handler()
        .handle(GoBackCommand {
            calculation_id: parse_id(&id)?,
        })
        .await?;
    Ok(Json(CalculationView::from(&calculation)))
}

/// POST /api/calculations/:id/reset
pub async fn reset_calculation(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
) -> Result<Json<CalculationView>, CalculatorApiError> {
    let calculation = state
        .reset_handler()
        .handle(ResetCalculationCommand {
            calculation_id: parse_id(&id)?,
        })
        .await?;
    Ok(Json(CalculationView::from(&calculation)))
}

/// GET /api/calculations/:id/report
pub async fn get_report(
    State(state): State<CalculatorAppState>,
    Path(id): Path<String>,
) -> Result<Json<EmissionReport>, CalculatorApiError> {
    let report = state
        .report_handler()
        .handle(GetReportQuery {
            calculation_id: parse_id(&id)?,
        })
        .await?;
    Ok(Json(report))
}

/// GET /api/calculator/catalog
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}
