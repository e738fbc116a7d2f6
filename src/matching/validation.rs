//! Leg input validation: code formats and quantity coercion.

use super::legs::{LegRecord, LegType};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Problem found with a single leg input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegValidationError {
    /// Stock code is not 1-5 uppercase letters.
    #[error("invalid stock code: {code}")]
    InvalidStockCode {
        /// The rejected code.
        code: String,
    },

    /// Option code is not `SYMBOL YYMMDD[C|P]STRIKE8`.
    #[error("invalid option code: {code}")]
    InvalidOptionCode {
        /// The rejected code.
        code: String,
    },

    /// Quantity is not a non-negative whole number.
    #[error("invalid quantity for {field}: {value}")]
    InvalidQuantity {
        /// Name of the quantity field.
        field: &'static str,
        /// The rejected value as JSON text.
        value: String,
    },
}

impl LegValidationError {
    /// Machine readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidStockCode { .. } => "INVALID_STOCK_CODE",
            Self::InvalidOptionCode { .. } => "INVALID_OPTION_CODE",
            Self::InvalidQuantity { .. } => "INVALID_QUANTITY",
        }
    }
}

/// A validation error tagged with the position of the offending leg.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("leg {index}: {error}")]
pub struct LegIssue {
    /// Zero-based position of the leg in the request.
    pub index: usize,
    /// What is wrong with it.
    pub error: LegValidationError,
}

/// How malformed quantity values are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityPolicy {
    /// Malformed values count as zero.
    #[default]
    Coerce,
    /// Malformed values are reported as [`LegValidationError::InvalidQuantity`].
    Strict,
}

/// A leg as received, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLeg {
    /// Leg type.
    pub leg_type: LegType,
    /// Identifying code, possibly empty.
    pub code: Option<String>,
    /// Available quantity as sent.
    pub available: Option<Value>,
    /// On-order quantity as sent.
    pub on_order: Option<Value>,
}

#[allow(clippy::expect_used)] // patterns are constants
fn stock_code_regex() -> &'static Regex {
    static STOCK_CODE: OnceLock<Regex> = OnceLock::new();
    STOCK_CODE.get_or_init(|| Regex::new(r"^[A-Z]{1,5}$").expect("stock code regex is valid"))
}

#[allow(clippy::expect_used)] // patterns are constants
fn option_code_regex() -> &'static Regex {
    static OPTION_CODE: OnceLock<Regex> = OnceLock::new();
    OPTION_CODE.get_or_init(|| {
        Regex::new(r"^[A-Z]{1,5}\s[0-9]{6}[CP][0-9]{8}$").expect("option code regex is valid")
    })
}

/// Checks a code against the format for its leg type.
///
/// # Errors
/// Returns `InvalidStockCode` or `InvalidOptionCode` when the code does not
/// match.
pub fn validate_code(leg_type: LegType, code: &str) -> Result<(), LegValidationError> {
    if leg_type.is_stock() {
        if stock_code_regex().is_match(code) {
            Ok(())
        } else {
            Err(LegValidationError::InvalidStockCode {
                code: code.to_string(),
            })
        }
    } else if option_code_regex().is_match(code) {
        Ok(())
    } else {
        Err(LegValidationError::InvalidOptionCode {
            code: code.to_string(),
        })
    }
}

/// Converts a float to a quantity if it is finite, whole and in `u64` range.
fn whole_quantity(f: f64) -> Option<u64> {
    // `u64::MAX as f64` rounds up to 2^64, which is out of range
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then(|| f as u64)
}

/// Reads a whole, non-negative quantity out of a JSON value.
///
/// Absent values, `null` and blank strings are zero. Strings are read as
/// numbers, so `"3.0"` and `"1e2"` count. Anything else that is not a whole
/// number `>= 0` is `None`.
fn parse_quantity(value: Option<&Value>) -> Option<u64> {
    match value {
        None | Some(Value::Null) => Some(0),
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(whole_quantity)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0)
            } else {
                trimmed
                    .parse::<u64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_quantity))
            }
        }
        Some(_) => None,
    }
}

fn coerce_quantity(
    value: Option<&Value>,
    field: &'static str,
    policy: QuantityPolicy,
) -> Result<u64, LegValidationError> {
    if let Some(quantity) = parse_quantity(value) {
        return Ok(quantity);
    }

    let raw = value.map(Value::to_string).unwrap_or_default();
    match policy {
        QuantityPolicy::Coerce => {
            warn!(field, value = %raw, "malformed quantity treated as zero");
            Ok(0)
        }
        QuantityPolicy::Strict => Err(LegValidationError::InvalidQuantity { field, value: raw }),
    }
}

/// Validates one raw leg, returning every problem found with it.
fn validate_leg(
    raw: &RawLeg,
    policy: QuantityPolicy,
) -> Result<LegRecord, Vec<LegValidationError>> {
    let mut errors = Vec::new();

    let code = raw
        .code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    if let Some(code) = &code
        && let Err(e) = validate_code(raw.leg_type, code)
    {
        errors.push(e);
    }

    let mut quantity = |value: Option<&Value>, field: &'static str| {
        match coerce_quantity(value, field, policy) {
            Ok(q) => q,
            Err(e) => {
                errors.push(e);
                0
            }
        }
    };
    let available = quantity(raw.available.as_ref(), "available");
    let on_order = quantity(raw.on_order.as_ref(), "on_order");

    if errors.is_empty() {
        Ok(LegRecord {
            leg_type: raw.leg_type,
            code,
            available,
            on_order,
        })
    } else {
        Err(errors)
    }
}

/// Validates every leg and collects all issues in one pass.
///
/// # Errors
/// Returns every issue found, ordered by leg index, when any leg is invalid.
pub fn validate_legs(
    raw: &[RawLeg],
    policy: QuantityPolicy,
) -> Result<Vec<LegRecord>, Vec<LegIssue>> {
    let mut records = Vec::with_capacity(raw.len());
    let mut issues = Vec::new();

    for (index, leg) in raw.iter().enumerate() {
        match validate_leg(leg, policy) {
            Ok(record) => records.push(record),
            Err(errors) => {
                issues.extend(errors.into_iter().map(|error| LegIssue { index, error }));
            }
        }
    }

    if issues.is_empty() {
        Ok(records)
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(leg_type: LegType, code: &str, available: Value, on_order: Value) -> RawLeg {
        RawLeg {
            leg_type,
            code: Some(code.to_string()),
            available: Some(available),
            on_order: Some(on_order),
        }
    }

    #[test]
    fn test_valid_stock_codes() {
        for code in ["A", "BABA", "GOOGL"] {
            assert!(validate_code(LegType::LongStock, code).is_ok(), "{code}");
            assert!(validate_code(LegType::ShortStock, code).is_ok(), "{code}");
        }
    }

    #[test]
    fn test_invalid_stock_codes() {
        for code in ["baba", "TOOLONG", "BA1", "BABA ", ""] {
            assert_eq!(
                validate_code(LegType::LongStock, code),
                Err(LegValidationError::InvalidStockCode {
                    code: code.to_string()
                }),
                "{code}"
            );
        }
    }

    #[test]
    fn test_valid_option_codes() {
        for code in ["BABA 210205C00055000", "A 991231P00000100"] {
            assert!(validate_code(LegType::ShortCall, code).is_ok(), "{code}");
            assert!(validate_code(LegType::LongPut, code).is_ok(), "{code}");
        }
    }

    #[test]
    fn test_invalid_option_codes() {
        for code in [
            "BABA",
            "BABA210205C00055000",
            "BABA 210205X00055000",
            "BABA 21020C00055000",
            "BABA 210205C0005500",
            "baba 210205C00055000",
        ] {
            assert!(
                matches!(
                    validate_code(LegType::LongCall, code),
                    Err(LegValidationError::InvalidOptionCode { .. })
                ),
                "{code}"
            );
        }
    }

    #[test]
    fn test_option_code_digits_must_be_ascii() {
        for code in ["BABA ２１０２０５C０００５５０００", "BABA ٢١٠٢٠٥C٠٠٠٥٥٠٠٠"] {
            assert!(
                matches!(
                    validate_code(LegType::ShortCall, code),
                    Err(LegValidationError::InvalidOptionCode { .. })
                ),
                "{code}"
            );
        }
    }

    #[test]
    fn test_stock_code_on_option_leg_is_rejected() {
        let err = validate_code(LegType::ShortPut, "BABA").unwrap_err();
        assert_eq!(err.code(), "INVALID_OPTION_CODE");
    }

    #[test]
    fn test_parse_quantity_accepts_numbers_and_strings() {
        assert_eq!(parse_quantity(None), Some(0));
        assert_eq!(parse_quantity(Some(&Value::Null)), Some(0));
        assert_eq!(parse_quantity(Some(&json!(12))), Some(12));
        assert_eq!(parse_quantity(Some(&json!(3.0))), Some(3));
        assert_eq!(parse_quantity(Some(&json!(""))), Some(0));
        assert_eq!(parse_quantity(Some(&json!(" 42 "))), Some(42));
    }

    #[test]
    fn test_parse_quantity_reads_numeric_strings_like_numbers() {
        assert_eq!(parse_quantity(Some(&json!("3.0"))), Some(3));
        assert_eq!(parse_quantity(Some(&json!("1e2"))), Some(100));
        assert_eq!(parse_quantity(Some(&json!(1e2))), Some(100));
        assert_eq!(parse_quantity(Some(&json!("2.5"))), None);
        assert_eq!(parse_quantity(Some(&json!("-4"))), None);
        assert_eq!(parse_quantity(Some(&json!("NaN"))), None);
        assert_eq!(parse_quantity(Some(&json!("inf"))), None);
    }

    #[test]
    fn test_numeric_string_is_not_rejected_in_strict_mode() {
        let legs = vec![raw(LegType::LongStock, "BABA", json!("3.0"), json!("1e2"))];

        let records = validate_legs(&legs, QuantityPolicy::Strict).unwrap();
        assert_eq!(records[0].available, 3);
        assert_eq!(records[0].on_order, 100);
    }

    #[test]
    fn test_parse_quantity_rejects_values_beyond_u64() {
        // 2^64 is the first float above u64::MAX
        assert_eq!(whole_quantity(18_446_744_073_709_551_616.0), None);
        assert_eq!(parse_quantity(Some(&json!(18_446_744_073_709_551_616.0))), None);
        assert_eq!(parse_quantity(Some(&json!("18446744073709551616"))), None);
        assert_eq!(whole_quantity(9_007_199_254_740_992.0), Some(9_007_199_254_740_992));
        assert_eq!(parse_quantity(Some(&json!(u64::MAX))), Some(u64::MAX));
    }

    #[test]
    fn test_parse_quantity_rejects_malformed_values() {
        assert_eq!(parse_quantity(Some(&json!(-1))), None);
        assert_eq!(parse_quantity(Some(&json!(1.5))), None);
        assert_eq!(parse_quantity(Some(&json!("abc"))), None);
        assert_eq!(parse_quantity(Some(&json!(true))), None);
        assert_eq!(parse_quantity(Some(&json!([1]))), None);
    }

    #[test]
    fn test_malformed_quantity_coerced_to_zero() {
        let legs = vec![raw(LegType::LongStock, "BABA", json!("lots"), json!(-3))];

        let records = validate_legs(&legs, QuantityPolicy::Coerce).unwrap();
        assert_eq!(records[0].available, 0);
        assert_eq!(records[0].on_order, 0);
        assert_eq!(records[0].code.as_deref(), Some("BABA"));
    }

    #[test]
    fn test_malformed_quantity_rejected_in_strict_mode() {
        let legs = vec![raw(LegType::LongStock, "BABA", json!("lots"), json!(2))];

        let issues = validate_legs(&legs, QuantityPolicy::Strict).unwrap_err();
        assert_eq!(
            issues,
            vec![LegIssue {
                index: 0,
                error: LegValidationError::InvalidQuantity {
                    field: "available",
                    value: "\"lots\"".to_string(),
                },
            }]
        );
    }

    #[test]
    fn test_all_issues_are_collected() {
        let legs = vec![
            raw(LegType::LongStock, "baba", json!(1), json!(0)),
            raw(LegType::ShortCall, "BABA 210205C00055000", json!(1), json!(0)),
            raw(LegType::LongPut, "BABA", json!(1), json!("x")),
        ];

        let issues = validate_legs(&legs, QuantityPolicy::Strict).unwrap_err();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].index, 0);
        assert_eq!(issues[0].error.code(), "INVALID_STOCK_CODE");
        assert_eq!(issues[1].index, 2);
        assert_eq!(issues[1].error.code(), "INVALID_OPTION_CODE");
        assert_eq!(issues[2].index, 2);
        assert_eq!(issues[2].error.code(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_blank_code_is_treated_as_absent() {
        let legs = vec![RawLeg {
            leg_type: LegType::ShortCall,
            code: Some("   ".to_string()),
            available: Some(json!(1)),
            on_order: None,
        }];

        let records = validate_legs(&legs, QuantityPolicy::Strict).unwrap();
        assert_eq!(records[0].code, None);
        assert_eq!(records[0].available, 1);
    }

    #[test]
    fn test_code_is_trimmed() {
        let legs = vec![raw(LegType::LongStock, " BABA ", json!(1), json!(0))];

        let records = validate_legs(&legs, QuantityPolicy::Coerce).unwrap();
        assert_eq!(records[0].code.as_deref(), Some("BABA"));
    }

    #[test]
    fn test_issue_display() {
        let issue = LegIssue {
            index: 4,
            error: LegValidationError::InvalidStockCode {
                code: "baba".to_string(),
            },
        };
        assert_eq!(issue.to_string(), "leg 4: invalid stock code: baba");
    }
}
