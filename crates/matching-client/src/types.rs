//! Request and response types for the matching API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Kind of leg held in an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegType {
    /// Bought call option.
    LongCall,
    /// Written call option.
    ShortCall,
    /// Bought put option.
    LongPut,
    /// Written put option.
    ShortPut,
    /// Stock held.
    LongStock,
    /// Stock sold short.
    ShortStock,
}

impl LegType {
    /// Returns true for the two stock leg types.
    #[must_use]
    pub fn is_stock(&self) -> bool {
        matches!(self, Self::LongStock | Self::ShortStock)
    }
}

impl std::fmt::Display for LegType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LongCall => write!(f, "long_call"),
            Self::ShortCall => write!(f, "short_call"),
            Self::LongPut => write!(f, "long_put"),
            Self::ShortPut => write!(f, "short_put"),
            Self::LongStock => write!(f, "long_stock"),
            Self::ShortStock => write!(f, "short_stock"),
        }
    }
}

// ============================================================================
// Health & Stats
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Statistics since server start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Calculations completed.
    pub calculations: u64,
    /// Validation requests answered.
    pub validations: u64,
}

// ============================================================================
// Legs
// ============================================================================

/// A leg to send to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegInput {
    /// Leg type.
    #[serde(rename = "type")]
    pub leg_type: LegType,
    /// Stock or option code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Quantity currently held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    /// Quantity on open orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_order: Option<u64>,
}

impl LegInput {
    /// Creates a leg with a code and both quantities.
    #[must_use]
    pub fn new(leg_type: LegType, code: impl Into<String>, available: u64, on_order: u64) -> Self {
        Self {
            leg_type,
            code: Some(code.into()),
            available: Some(available),
            on_order: Some(on_order),
        }
    }

    /// Creates a leg without a code.
    #[must_use]
    pub fn uncoded(leg_type: LegType, available: u64, on_order: u64) -> Self {
        Self {
            leg_type,
            code: None,
            available: Some(available),
            on_order: Some(on_order),
        }
    }
}

/// Request carrying the legs to validate or match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegsRequest {
    /// Legs in entry order.
    pub legs: Vec<LegInput>,
}

/// One problem with one leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegIssue {
    /// Zero-based position of the leg in the request.
    pub index: usize,
    /// Error code, e.g. `INVALID_STOCK_CODE`.
    pub code: String,
    /// Error message.
    pub message: String,
}

/// Result of validating legs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateLegsResponse {
    /// Whether every leg passed.
    pub valid: bool,
    /// Number of legs checked.
    pub leg_count: usize,
    /// Problems found, ordered by leg index.
    pub issues: Vec<LegIssue>,
}

// ============================================================================
// Combinations
// ============================================================================

/// A combination shape in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogShape {
    /// Catalog code, e.g. `1B`.
    pub shape: String,
    /// Human readable name.
    pub name: String,
    /// Legs consumed per instance, in leg type order.
    pub target: Vec<u64>,
    /// Display names of the two legs.
    pub legs: Vec<String>,
}

/// Combination catalog in resolution order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Shapes in the order they are matched.
    pub shapes: Vec<CatalogShape>,
}

/// Per-type inventory, in leg type order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Quantities held now.
    pub available: Vec<u64>,
    /// Quantities on order.
    pub pending: Vec<u64>,
    /// Quantities once orders settle.
    pub total: Vec<u64>,
}

/// One leg of a reported combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLeg {
    /// Display name, e.g. `short Call`.
    #[serde(rename = "type")]
    pub leg_type: String,
    /// Representative code, `N/A` if none was given.
    pub code: String,
}

/// Count and legs of one combination shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationSummary {
    /// Number of instances.
    pub count: u64,
    /// The two legs of the shape.
    pub details: Vec<ReportLeg>,
}

/// A leg type with quantity left over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingLeg {
    /// Display name, e.g. `long Stock`.
    #[serde(rename = "type")]
    pub leg_type: String,
    /// Quantity left.
    pub count: u64,
    /// Representative code.
    pub code: String,
}

/// Matched combinations and unmatched legs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationReport {
    /// Combinations formed from held legs, keyed by shape code.
    pub available_combinations: BTreeMap<String, CombinationSummary>,
    /// Combinations that need pending orders to fill, keyed by shape code.
    pub non_available_combinations: BTreeMap<String, CombinationSummary>,
    /// Held legs not used by any combination.
    pub remaining_legs: Vec<RemainingLeg>,
}

/// Result of a combination calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Identifier used in server logs.
    pub calculation_id: String,
    /// Calculation time (ISO 8601).
    pub calculated_at: String,
    /// Number of legs received.
    pub leg_count: usize,
    /// Aggregated inventory.
    pub inventory: Inventory,
    /// Matched combinations and unmatched legs.
    pub report: CombinationReport,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
    /// Per-leg problems, present for `INVALID_LEGS`.
    #[serde(default)]
    pub issues: Vec<LegIssue>,
}
