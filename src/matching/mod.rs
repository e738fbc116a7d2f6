//! Leg aggregation and combination matching.
//!
//! Raw legs are validated, summed per leg type and then greedily decomposed
//! into the eight two-leg combination shapes, once for the legs available now
//! and once for the legs available after pending orders settle.

pub mod aggregator;
pub mod legs;
pub mod report;
pub mod resolver;
pub mod validation;

pub use aggregator::{AggregatedLegs, aggregate};
pub use legs::{CodeMapping, LEG_TYPE_COUNT, LegRecord, LegType, MISSING_CODE, QuantityVector};
pub use report::{
    Calculation, CombinationReport, CombinationSummary, RemainingLeg, ReportLeg, calculate,
};
pub use resolver::{
    AllocationResult, CATALOG, CombinationShape, LegDetail, ShapeAllocation, resolve,
};
pub use validation::{
    LegIssue, LegValidationError, QuantityPolicy, RawLeg, validate_code, validate_legs,
};
