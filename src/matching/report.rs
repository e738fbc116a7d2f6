//! Available versus pending-only combination report.

use super::aggregator::{AggregatedLegs, aggregate};
use super::legs::{LegRecord, LegType, QuantityVector};
use super::resolver::{AllocationResult, CATALOG, CombinationShape, LegDetail, resolve};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;
use utoipa::ToSchema;

/// A leg of a reported combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportLeg {
    /// Leg type display name, e.g. `short Call`.
    #[serde(rename = "type")]
    pub leg_type: String,
    /// Representative code for the leg type.
    pub code: String,
}

impl From<&LegDetail> for ReportLeg {
    fn from(detail: &LegDetail) -> Self {
        Self {
            leg_type: detail.leg_type.display_name().to_string(),
            code: detail.code.clone(),
        }
    }
}

/// Number of instances of a shape and its representative legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CombinationSummary {
    /// Instances formed.
    pub count: u64,
    /// Representative legs.
    pub details: Vec<ReportLeg>,
}

/// Legs of one type left unmatched once pending orders settle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RemainingLeg {
    /// Leg type display name.
    #[serde(rename = "type")]
    pub leg_type: String,
    /// Unmatched quantity.
    pub count: u64,
    /// Representative code for the leg type.
    pub code: String,
}

/// Outcome of a combination calculation.
///
/// Maps are keyed by shape and iterate in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CombinationReport {
    /// Combinations that can be formed from available legs.
    pub available_combinations: BTreeMap<CombinationShape, CombinationSummary>,
    /// Additional combinations that only form once pending orders settle.
    pub non_available_combinations: BTreeMap<CombinationShape, CombinationSummary>,
    /// Legs left unmatched after settlement.
    pub remaining_legs: Vec<RemainingLeg>,
}

impl CombinationReport {
    /// Whether nothing was matched and nothing is left over.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available_combinations.is_empty()
            && self.non_available_combinations.is_empty()
            && self.remaining_legs.is_empty()
    }
}

/// Both resolver runs of a calculation and the difference between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    /// Inventory the calculation ran on.
    pub inventory: AggregatedLegs,
    /// Resolution of the available vector.
    pub available: AllocationResult,
    /// Resolution of the available plus pending vector.
    pub total: AllocationResult,
}

impl Calculation {
    /// Resolves the available and total vectors of `inventory`.
    #[must_use]
    pub fn run(inventory: AggregatedLegs) -> Self {
        let available = resolve(&inventory.available, &inventory.codes);
        let total = resolve(&inventory.total(), &inventory.codes);

        Self {
            inventory,
            available,
            total,
        }
    }

    /// Inventory once every pending order settles.
    #[must_use]
    pub fn total_vector(&self) -> QuantityVector {
        self.inventory.total()
    }

    /// Extra instances per shape that only appear once pending orders settle.
    ///
    /// The two runs may split shared legs differently, so a shape can come
    /// out negative. The value is not clamped.
    #[must_use]
    pub fn pending_only_counts(&self) -> Vec<(CombinationShape, i128)> {
        CATALOG
            .iter()
            .map(|shape| {
                let delta = i128::from(self.total.count(*shape))
                    - i128::from(self.available.count(*shape));
                (*shape, delta)
            })
            .collect()
    }

    /// Builds the outward report, dropping zero-count entries.
    #[must_use]
    pub fn report(&self) -> CombinationReport {
        let mut report = CombinationReport::default();

        for allocation in self.available.allocations.iter().filter(|a| a.count > 0) {
            report.available_combinations.insert(
                allocation.shape,
                CombinationSummary {
                    count: allocation.count,
                    details: allocation.legs.iter().map(ReportLeg::from).collect(),
                },
            );
        }

        for (shape, delta) in self.pending_only_counts() {
            if delta < 0 {
                warn!(
                    shape = %shape,
                    delta,
                    "pending orders reduce combination count; omitting from report"
                );
                continue;
            }
            if delta == 0 {
                continue;
            }
            let details = self
                .total
                .allocation(shape)
                .map(|a| a.legs.iter().map(ReportLeg::from).collect())
                .unwrap_or_default();
            report.non_available_combinations.insert(
                shape,
                CombinationSummary {
                    count: u64::try_from(delta).unwrap_or(u64::MAX),
                    details,
                },
            );
        }

        for (leg_type, count) in self.total.remainder.iter().filter(|(_, c)| *c > 0) {
            report.remaining_legs.push(remaining_leg(self, leg_type, count));
        }

        report
    }
}

fn remaining_leg(calculation: &Calculation, leg_type: LegType, count: u64) -> RemainingLeg {
    RemainingLeg {
        leg_type: leg_type.display_name().to_string(),
        count,
        code: calculation
            .inventory
            .codes
            .representative(leg_type)
            .to_string(),
    }
}

/// Aggregates `legs` and builds the combination report.
#[must_use]
pub fn calculate(legs: &[LegRecord]) -> CombinationReport {
    Calculation::run(aggregate(legs)).report()
}
