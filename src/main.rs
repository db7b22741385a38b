//! EcoImpact companion service entrypoint.
//!
//! Loads configuration from the environment, wires adapters into the
//! feature routers, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecoimpact::adapters::assistant::ScriptedAssistant;
use ecoimpact::adapters::backend::HttpBackendGateway;
use ecoimpact::adapters::emissions::FixedEmissionModel;
use ecoimpact::adapters::http::{
    app_router, AssistantAppState, CalculatorAppState, InsightsAppState, ReportingAppState,
};
use ecoimpact::adapters::reporting::FileResultSink;
use ecoimpact::adapters::storage::InMemoryCalculationStore;
use ecoimpact::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let calculator = CalculatorAppState {
        store: Arc::new(InMemoryCalculationStore::new()),
        model: Arc::new(FixedEmissionModel::new()),
        pacing: Duration::from_millis(1500),
    };
    let insights = InsightsAppState {
        gateway: Arc::new(HttpBackendGateway::new(config.backend.clone())?),
    };
    let assistant = AssistantAppState {
        assistant: Arc::new(ScriptedAssistant::new()),
    };
    let reporting = ReportingAppState {
        sink: Arc::new(FileResultSink::new(&config.reporting.results_log_path)),
    };

    let cors = cors_layer(&config.server.cors_origins_list())?;
    let app = app_router(calculator, insights, assistant, reporting)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!(%addr, backend = %config.backend.base_url, "ecoimpact service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    if origins.is_empty() {
        // Development default: the pages may be served from anywhere.
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<http::HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any))
}
