//! Greedy decomposition of a quantity vector into combination shapes.
//!
//! Shapes are taken strictly in [`CATALOG`] order and every allocation is
//! final. An earlier shape may therefore consume legs that a later shape
//! could have paired more usefully; the result is deterministic but not a
//! global optimum.

use super::legs::{CodeMapping, LEG_TYPE_COUNT, LegType, QuantityVector};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// A two-leg combination the resolver can build.
///
/// Variants are declared in catalog order, so the derived ordering is the
/// resolution priority.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum CombinationShape {
    /// Short call against long stock.
    #[serde(rename = "1B")]
    CoveredCall,
    /// Short put against short stock.
    #[serde(rename = "1D")]
    CoveredPut,
    /// Long put against long stock.
    #[serde(rename = "1A")]
    ProtectivePut,
    /// Long call against short stock.
    #[serde(rename = "1C")]
    ProtectiveCall,
    /// Long call with short call.
    #[serde(rename = "2B")]
    CallSpread,
    /// Long put with short put.
    #[serde(rename = "2A")]
    PutSpread,
    /// Short call with short put.
    #[serde(rename = "2C")]
    ShortStraddle,
    /// Long call with long put.
    #[serde(rename = "2D")]
    LongStraddle,
}

/// Resolution order. Changing it changes results.
pub const CATALOG: [CombinationShape; 8] = [
    CombinationShape::CoveredCall,
    CombinationShape::CoveredPut,
    CombinationShape::ProtectivePut,
    CombinationShape::ProtectiveCall,
    CombinationShape::CallSpread,
    CombinationShape::PutSpread,
    CombinationShape::ShortStraddle,
    CombinationShape::LongStraddle,
];

impl CombinationShape {
    /// Short catalog code, e.g. `1B`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CoveredCall => "1B",
            Self::CoveredPut => "1D",
            Self::ProtectivePut => "1A",
            Self::ProtectiveCall => "1C",
            Self::CallSpread => "2B",
            Self::PutSpread => "2A",
            Self::ShortStraddle => "2C",
            Self::LongStraddle => "2D",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CoveredCall => "Covered call",
            Self::CoveredPut => "Covered put",
            Self::ProtectivePut => "Protective put",
            Self::ProtectiveCall => "Protective call",
            Self::CallSpread => "Call spread",
            Self::PutSpread => "Put spread",
            Self::ShortStraddle => "Short straddle",
            Self::LongStraddle => "Long straddle",
        }
    }

    /// Legs consumed by one instance of the shape, indexed by leg type.
    #[must_use]
    pub const fn target(self) -> QuantityVector {
        QuantityVector::new(match self {
            Self::CoveredCall => [0, 1, 0, 0, 1, 0],
            Self::CoveredPut => [0, 0, 0, 1, 0, 1],
            Self::ProtectivePut => [0, 0, 1, 0, 1, 0],
            Self::ProtectiveCall => [1, 0, 0, 0, 0, 1],
            Self::CallSpread => [1, 1, 0, 0, 0, 0],
            Self::PutSpread => [0, 0, 1, 1, 0, 0],
            Self::ShortStraddle => [0, 1, 0, 1, 0, 0],
            Self::LongStraddle => [1, 0, 1, 0, 0, 0],
        })
    }

    /// Leg types the shape draws on, in ordinal order.
    pub fn leg_types(self) -> impl Iterator<Item = LegType> {
        let target = self.target();
        LegType::ALL.into_iter().filter(move |t| target[*t] > 0)
    }
}

impl std::fmt::Display for CombinationShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A leg of a combination together with a sample code of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegDetail {
    /// Leg type.
    pub leg_type: LegType,
    /// First code supplied for the leg type, or `N/A`.
    pub code: String,
}

/// Outcome for a single shape within one resolver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeAllocation {
    /// The shape.
    pub shape: CombinationShape,
    /// Complete instances formed.
    pub count: u64,
    /// Representative legs of the shape.
    pub legs: Vec<LegDetail>,
}

/// Result of decomposing one quantity vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    /// One entry per shape, in catalog order.
    pub allocations: Vec<ShapeAllocation>,
    /// Legs left after every shape was processed.
    pub remainder: QuantityVector,
}

impl AllocationResult {
    /// Instances formed for a shape.
    #[must_use]
    pub fn count(&self, shape: CombinationShape) -> u64 {
        self.allocation(shape).map_or(0, |a| a.count)
    }

    /// Allocation entry for a shape.
    #[must_use]
    pub fn allocation(&self, shape: CombinationShape) -> Option<&ShapeAllocation> {
        self.allocations.iter().find(|a| a.shape == shape)
    }

    /// Total instances formed across all shapes.
    #[must_use]
    pub fn total_combinations(&self) -> u64 {
        self.allocations.iter().map(|a| a.count).sum()
    }
}

/// Largest number of `target` instances that fit into `remaining`.
fn max_fit(remaining: &QuantityVector, target: &QuantityVector) -> u64 {
    (0..LEG_TYPE_COUNT)
        .filter(|i| target.components()[*i] > 0)
        .map(|i| remaining.components()[i] / target.components()[i])
        .min()
        .unwrap_or(0)
}

/// Decomposes `vector` against the catalog, greedily and in catalog order.
#[must_use]
pub fn resolve(vector: &QuantityVector, codes: &CodeMapping) -> AllocationResult {
    let mut remaining = *vector;
    let mut allocations = Vec::with_capacity(CATALOG.len());

    for shape in CATALOG {
        let target = shape.target();
        let count = max_fit(&remaining, &target);

        for leg_type in LegType::ALL {
            remaining[leg_type] -= count * target[leg_type];
        }

        debug!(shape = %shape, count, "resolved combination shape");

        let legs = shape
            .leg_types()
            .map(|leg_type| LegDetail {
                leg_type,
                code: codes.representative(leg_type).to_string(),
            })
            .collect();

        allocations.push(ShapeAllocation { shape, count, legs });
    }

    AllocationResult {
        allocations,
        remainder: remaining,
    }
}
