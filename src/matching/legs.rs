//! Leg types, quantity vectors and code mappings.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use utoipa::ToSchema;

/// Number of distinct leg types.
pub const LEG_TYPE_COUNT: usize = 6;

/// Code reported when no code was supplied for a leg type.
pub const MISSING_CODE: &str = "N/A";

/// Kind of position held in a single leg.
///
/// The declaration order is the vector index used everywhere else, so it
/// must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LegType {
    /// Bought call option.
    #[serde(alias = "long call")]
    LongCall,
    /// Sold call option.
    #[serde(alias = "short call")]
    ShortCall,
    /// Bought put option.
    #[serde(alias = "long put")]
    LongPut,
    /// Sold put option.
    #[serde(alias = "short put")]
    ShortPut,
    /// Long shares of the underlying.
    #[serde(alias = "long stock")]
    LongStock,
    /// Short shares of the underlying.
    #[serde(alias = "short stock")]
    ShortStock,
}

impl LegType {
    /// All leg types in ordinal order.
    pub const ALL: [LegType; LEG_TYPE_COUNT] = [
        LegType::LongCall,
        LegType::ShortCall,
        LegType::LongPut,
        LegType::ShortPut,
        LegType::LongStock,
        LegType::ShortStock,
    ];

    /// Stable vector index of this leg type.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Leg type for a vector index, if in range.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Name shown in calculation reports, e.g. `short Call`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LongCall => "long Call",
            Self::ShortCall => "short Call",
            Self::LongPut => "long Put",
            Self::ShortPut => "short Put",
            Self::LongStock => "long Stock",
            Self::ShortStock => "short Stock",
        }
    }

    /// Whether this leg is a position in the underlying shares.
    #[must_use]
    pub const fn is_stock(self) -> bool {
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

/// A validated leg as declared by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegRecord {
    /// Leg type.
    pub leg_type: LegType,
    /// Identifying code, already checked against the format for `leg_type`.
    pub code: Option<String>,
    /// Quantity currently held.
    pub available: u64,
    /// Quantity still pending on open orders.
    pub on_order: u64,
}

impl LegRecord {
    /// Creates a leg without a code.
    #[must_use]
    pub fn new(leg_type: LegType, available: u64, on_order: u64) -> Self {
        Self {
            leg_type,
            code: None,
            available,
            on_order,
        }
    }

    /// Sets the identifying code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// One quantity per leg type, indexed by [`LegType::ordinal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Vec<u64>)]
pub struct QuantityVector([u64; LEG_TYPE_COUNT]);

impl QuantityVector {
    /// The all-zero vector.
    pub const ZERO: QuantityVector = QuantityVector([0; LEG_TYPE_COUNT]);

    /// Creates a vector from raw components in leg type order.
    #[must_use]
    pub const fn new(components: [u64; LEG_TYPE_COUNT]) -> Self {
        Self(components)
    }

    /// Raw components in leg type order.
    #[must_use]
    pub const fn components(&self) -> &[u64; LEG_TYPE_COUNT] {
        &self.0
    }

    /// Elementwise sum, saturating at `u64::MAX`.
    #[must_use]
    pub fn saturating_add(&self, other: &QuantityVector) -> QuantityVector {
        let mut sum = *self;
        for leg_type in LegType::ALL {
            sum[leg_type] = sum[leg_type].saturating_add(other[leg_type]);
        }
        sum
    }

    /// Sum of all components.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, q| acc.saturating_add(*q))
    }

    /// Whether every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|q| *q == 0)
    }

    /// Iterates `(leg_type, quantity)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (LegType, u64)> + '_ {
        LegType::ALL.into_iter().map(move |t| (t, self[t]))
    }
}

impl Index<LegType> for QuantityVector {
    type Output = u64;

    fn index(&self, leg_type: LegType) -> &u64 {
        &self.0[leg_type.ordinal()]
    }
}

impl IndexMut<LegType> for QuantityVector {
    fn index_mut(&mut self, leg_type: LegType) -> &mut u64 {
        &mut self.0[leg_type.ordinal()]
    }
}

/// Codes supplied per leg type, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMapping {
    codes: [Vec<String>; LEG_TYPE_COUNT],
}

impl CodeMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a code for a leg type.
    pub fn push(&mut self, leg_type: LegType, code: impl Into<String>) {
        self.codes[leg_type.ordinal()].push(code.into());
    }

    /// All codes recorded for a leg type.
    #[must_use]
    pub fn codes(&self, leg_type: LegType) -> &[String] {
        &self.codes[leg_type.ordinal()]
    }

    /// First code recorded for a leg type, or [`MISSING_CODE`].
    #[must_use]
    pub fn representative(&self, leg_type: LegType) -> &str {
        self.codes(leg_type)
            .first()
            .map_or(MISSING_CODE, String::as_str)
    }
}
