//! API request handlers.

use crate::error::{ApiError, ErrorResponse, InvalidLegsResponse, LegIssueResponse};
use crate::matching::{CATALOG, Calculation, RawLeg, aggregate, validate_legs};
use crate::models::{
    CalculateResponse, CatalogResponse, CatalogShapeResponse, HealthResponse, InventoryResponse,
    LegsRequest, StatsResponse, ValidateLegsResponse,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Rejects empty requests and requests above the configured leg limit.
fn check_leg_count(state: &AppState, leg_count: usize) -> Result<(), ApiError> {
    if leg_count == 0 {
        return Err(ApiError::InvalidRequest(
            "at least one leg is required".to_string(),
        ));
    }

    let max_legs = state.calculator().max_legs;
    if leg_count > max_legs {
        return Err(ApiError::InvalidRequest(format!(
            "too many legs: {} (maximum {})",
            leg_count, max_legs
        )));
    }

    Ok(())
}

fn into_raw_legs(request: LegsRequest) -> Vec<RawLeg> {
    request.legs.into_iter().map(RawLeg::from).collect()
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Statistics
// ============================================================================

/// Get request statistics.
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (status = 200, description = "Request statistics", body = StatsResponse)
    ),
    tag = "Statistics"
)]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        calculations: state.calculations(),
        validations: state.validations(),
    })
}

// ============================================================================
// Combinations
// ============================================================================

/// List the combination catalog in resolution order.
#[utoipa::path(
    get,
    path = "/api/v1/combinations/catalog",
    responses(
        (status = 200, description = "Combination catalog", body = CatalogResponse)
    ),
    tag = "Combinations"
)]
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        shapes: CATALOG.into_iter().map(CatalogShapeResponse::from).collect(),
    })
}

/// Validate legs without calculating.
#[utoipa::path(
    post,
    path = "/api/v1/legs/validate",
    request_body = LegsRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateLegsResponse),
        (status = 400, description = "Empty or oversized request", body = ErrorResponse)
    ),
    tag = "Legs"
)]
pub async fn validate_leg_inputs(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LegsRequest>,
) -> Result<Json<ValidateLegsResponse>, ApiError> {
    let leg_count = request.legs.len();
    check_leg_count(&state, leg_count)?;

    let raw = into_raw_legs(request);
    let issues = match validate_legs(&raw, state.calculator().quantity_policy()) {
        Ok(_) => Vec::new(),
        Err(issues) => issues.iter().map(LegIssueResponse::from).collect(),
    };

    state.record_validation();

    Ok(Json(ValidateLegsResponse {
        valid: issues.is_empty(),
        leg_count,
        issues,
    }))
}

/// Match legs into combinations.
#[utoipa::path(
    post,
    path = "/api/v1/combinations/calculate",
    request_body = LegsRequest,
    responses(
        (status = 200, description = "Combination report", body = CalculateResponse),
        (status = 400, description = "Invalid legs", body = InvalidLegsResponse)
    ),
    tag = "Combinations"
)]
pub async fn calculate_combinations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LegsRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let leg_count = request.legs.len();
    check_leg_count(&state, leg_count)?;

    let raw = into_raw_legs(request);
    let records = validate_legs(&raw, state.calculator().quantity_policy()).map_err(|issues| {
        warn!(leg_count, issues = issues.len(), "Rejected legs");
        ApiError::from(issues)
    })?;

    let calculation_id = Uuid::new_v4();
    let calculation = Calculation::run(aggregate(&records));
    let report = calculation.report();

    state.record_calculation();
    info!(
        %calculation_id,
        leg_count,
        available = report.available_combinations.len(),
        pending_only = report.non_available_combinations.len(),
        remaining = report.remaining_legs.len(),
        "Calculated combinations"
    );

    Ok(Json(CalculateResponse {
        calculation_id: calculation_id.to_string(),
        calculated_at: Utc::now().to_rfc3339(),
        leg_count,
        inventory: InventoryResponse::from(&calculation.inventory),
        report,
    }))
}
