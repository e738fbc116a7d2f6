//! Option Matching Backend Server
//!
//! REST API server for matching option and stock legs into combinations.

use option_matching_backend::api::create_router;
use option_matching_backend::config::Config;
use option_matching_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use option_matching_backend::error::{ErrorResponse, InvalidLegsResponse, LegIssueResponse};
use option_matching_backend::matching::{
    CombinationReport, CombinationShape, CombinationSummary, LegType, QuantityVector,
    RemainingLeg, ReportLeg,
};
use option_matching_backend::models::{
    CalculateResponse, CatalogResponse, CatalogShapeResponse, HealthResponse, InventoryResponse,
    LegInput, LegsRequest, StatsResponse, ValidateLegsResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        option_matching_backend::api::handlers::health_check,
        option_matching_backend::api::handlers::get_stats,
        option_matching_backend::api::handlers::get_catalog,
        option_matching_backend::api::handlers::validate_leg_inputs,
        option_matching_backend::api::handlers::calculate_combinations,
    ),
    components(
        schemas(
            HealthResponse,
            StatsResponse,
            LegType,
            LegInput,
            LegsRequest,
            ValidateLegsResponse,
            LegIssueResponse,
            QuantityVector,
            InventoryResponse,
            CombinationShape,
            ReportLeg,
            CombinationSummary,
            RemainingLeg,
            CombinationReport,
            CalculateResponse,
            CatalogShapeResponse,
            CatalogResponse,
            ErrorResponse,
            InvalidLegsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Statistics", description = "Request statistics"),
        (name = "Legs", description = "Leg validation"),
        (name = "Combinations", description = "Combination catalog and matching"),
    ),
    info(
        title = "Option Matching API",
        version = "0.2.0",
        description = "REST API for matching option and stock legs into two-leg combinations",
        license(name = "MIT"),
        contact(name = "Joaquin Bejar", email = "jb@taunais.com")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, then apply HOST/PORT overrides
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut config = Config::load_or_default(&config_path)?;
    config.apply_env_overrides()?;
    info!("Loaded configuration from {}", config_path);

    let host = config.server.host.clone();
    let port = config.server.port;

    // Create application state
    let state = Arc::new(AppState::from_config(config));

    info!("Starting Option Matching Backend on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
