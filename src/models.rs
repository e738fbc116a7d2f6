//! Request and response models for the REST API.

use crate::error::LegIssueResponse;
use crate::matching::{
    AggregatedLegs, CombinationReport, CombinationShape, LegType, QuantityVector, RawLeg,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// ============================================================================
// Health & Statistics
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Statistics since server start.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Calculations completed.
    pub calculations: u64,
    /// Validation requests answered.
    pub validations: u64,
}

// ============================================================================
// Legs
// ============================================================================

/// A leg as entered by the user.
///
/// Quantities may be sent as numbers or numeric strings; blank or missing
/// values count as zero.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LegInput {
    /// Leg type, e.g. `long_stock` or `short call`.
    #[serde(rename = "type")]
    pub leg_type: LegType,
    /// Stock code (`BABA`) or option code (`BABA 210205C00055000`).
    #[serde(default)]
    pub code: Option<String>,
    /// Quantity currently held.
    #[serde(default)]
    #[schema(value_type = Option<u64>)]
    pub available: Option<Value>,
    /// Quantity on open orders.
    #[serde(default, alias = "order")]
    #[schema(value_type = Option<u64>)]
    pub on_order: Option<Value>,
}

impl From<LegInput> for RawLeg {
    fn from(input: LegInput) -> Self {
        Self {
            leg_type: input.leg_type,
            code: input.code,
            available: input.available,
            on_order: input.on_order,
        }
    }
}

/// Request carrying the legs to validate or match.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LegsRequest {
    /// Legs in entry order.
    pub legs: Vec<LegInput>,
}

/// Result of validating legs without calculating.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateLegsResponse {
    /// Whether every leg passed.
    pub valid: bool,
    /// Number of legs checked.
    pub leg_count: usize,
    /// Problems found, ordered by leg index.
    pub issues: Vec<LegIssueResponse>,
}

// ============================================================================
// Combinations
// ============================================================================

/// Per-type inventory used by a calculation, in leg type order.
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryResponse {
    /// Quantities held now.
    pub available: QuantityVector,
    /// Quantities on order.
    pub pending: QuantityVector,
    /// Quantities once orders settle.
    pub total: QuantityVector,
}

impl From<&AggregatedLegs> for InventoryResponse {
    fn from(inventory: &AggregatedLegs) -> Self {
        Self {
            available: inventory.available,
            pending: inventory.pending,
            total: inventory.total(),
        }
    }
}

/// Result of a combination calculation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculateResponse {
    /// Identifier used in server logs for this calculation.
    pub calculation_id: String,
    /// Calculation time (ISO 8601).
    pub calculated_at: String,
    /// Number of legs received.
    pub leg_count: usize,
    /// Aggregated inventory.
    pub inventory: InventoryResponse,
    /// Matched combinations and unmatched legs.
    pub report: CombinationReport,
}

/// A combination shape in the catalog.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogShapeResponse {
    /// Catalog code, e.g. `1B`.
    pub shape: CombinationShape,
    /// Human readable name.
    pub name: String,
    /// Legs consumed per instance, in leg type order.
    pub target: QuantityVector,
    /// Display names of the two legs.
    pub legs: Vec<String>,
}

impl From<CombinationShape> for CatalogShapeResponse {
    fn from(shape: CombinationShape) -> Self {
        Self {
            shape,
            name: shape.name().to_string(),
            target: shape.target(),
            legs: shape
                .leg_types()
                .map(|t| t.display_name().to_string())
                .collect(),
        }
    }
}

/// Combination catalog in resolution order.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    /// Shapes in the order they are matched.
    pub shapes: Vec<CatalogShapeResponse>,
}
