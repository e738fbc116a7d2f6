//! Aggregation of leg records into per-type quantity vectors.

use super::legs::{CodeMapping, LegRecord, QuantityVector};

/// Inventory of a calculation request summed per leg type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedLegs {
    /// Quantities held right now.
    pub available: QuantityVector,
    /// Quantities still on order.
    pub pending: QuantityVector,
    /// Codes supplied per leg type.
    pub codes: CodeMapping,
}

impl AggregatedLegs {
    /// Inventory once every pending order settles.
    #[must_use]
    pub fn total(&self) -> QuantityVector {
        self.available.saturating_add(&self.pending)
    }
}

/// Sums leg records into available and pending vectors.
///
/// Records are processed in input order so the first code seen for a leg
/// type becomes its representative code.
#[must_use]
pub fn aggregate(legs: &[LegRecord]) -> AggregatedLegs {
    let mut aggregated = AggregatedLegs::default();

    for leg in legs {
        let slot = leg.leg_type;
        aggregated.available[slot] = aggregated.available[slot].saturating_add(leg.available);
        aggregated.pending[slot] = aggregated.pending[slot].saturating_add(leg.on_order);

        if let Some(code) = leg.code.as_deref().filter(|c| !c.is_empty()) {
            aggregated.codes.push(slot, code);
        }
    }

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::legs::LegType;

    #[test]
    fn test_aggregate_empty_input() {
        let aggregated = aggregate(&[]);
        assert!(aggregated.available.is_zero());
        assert!(aggregated.pending.is_zero());
        assert!(aggregated.total().is_zero());
        for leg_type in LegType::ALL {
            assert!(aggregated.codes.codes(leg_type).is_empty());
        }
    }

    #[test]
    fn test_aggregate_sums_same_type() {
        let legs = vec![
            LegRecord::new(LegType::ShortCall, 2, 1).with_code("BABA 210205C00055000"),
            LegRecord::new(LegType::ShortCall, 3, 0).with_code("BABA 210212C00060000"),
            LegRecord::new(LegType::LongStock, 100, 50).with_code("BABA"),
        ];

        let aggregated = aggregate(&legs);
        assert_eq!(aggregated.available.components(), &[0, 5, 0, 0, 100, 0]);
        assert_eq!(aggregated.pending.components(), &[0, 1, 0, 0, 50, 0]);
        assert_eq!(aggregated.total().components(), &[0, 6, 0, 0, 150, 0]);
        assert_eq!(
            aggregated.codes.codes(LegType::ShortCall),
            &["BABA 210205C00055000".to_string(), "BABA 210212C00060000".to_string()]
        );
        assert_eq!(aggregated.codes.representative(LegType::LongStock), "BABA");
    }

    #[test]
    fn test_aggregate_skips_empty_codes() {
        let legs = vec![
            LegRecord::new(LegType::LongPut, 1, 0).with_code(""),
            LegRecord::new(LegType::LongPut, 1, 0),
        ];

        let aggregated = aggregate(&legs);
        assert!(aggregated.codes.codes(LegType::LongPut).is_empty());
        assert_eq!(aggregated.available[LegType::LongPut], 2);
    }

    #[test]
    fn test_total_conserves_quantities() {
        let legs = vec![
            LegRecord::new(LegType::LongCall, 4, 2),
            LegRecord::new(LegType::ShortPut, 0, 9),
            LegRecord::new(LegType::ShortStock, 7, 0),
            LegRecord::new(LegType::LongCall, 1, 1),
        ];

        let aggregated = aggregate(&legs);
        let total = aggregated.total();
        for leg_type in LegType::ALL {
            assert_eq!(
                total[leg_type],
                aggregated.available[leg_type] + aggregated.pending[leg_type]
            );
        }
        assert_eq!(
            total.sum(),
            aggregated.available.sum() + aggregated.pending.sum()
        );
        assert_eq!(total.sum(), 24);
    }
}
