//! Unit tests for error module.

use super::*;
use crate::matching::LegValidationError;

fn stock_issue(index: usize) -> LegIssue {
    LegIssue {
        index,
        error: LegValidationError::InvalidStockCode {
            code: "baba".to_string(),
        },
    }
}

// ============================================================================
// ErrorResponse Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: "Something went wrong".to_string(),
        code: "INTERNAL_ERROR".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"error\":\"Something went wrong\""));
    assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
}

// ============================================================================
// InvalidLegsResponse Tests
// ============================================================================

#[test]
fn test_leg_issue_response_from_issue() {
    let response = LegIssueResponse::from(&stock_issue(2));

    assert_eq!(response.index, 2);
    assert_eq!(response.code, "INVALID_STOCK_CODE");
    assert_eq!(response.message, "invalid stock code: baba");
}

#[test]
fn test_invalid_legs_response_serialization() {
    let response = InvalidLegsResponse {
        error: "bad legs".to_string(),
        code: "INVALID_LEGS".to_string(),
        issues: vec![LegIssueResponse::from(&stock_issue(0))],
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"code\":\"INVALID_LEGS\""));
    assert!(json.contains("\"index\":0"));
    assert!(json.contains("\"code\":\"INVALID_STOCK_CODE\""));
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_invalid_request_display() {
    let error = ApiError::InvalidRequest("Missing required field".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid request: Missing required field"
    );
}

#[test]
fn test_api_error_invalid_legs_display() {
    let error = ApiError::InvalidLegs(vec![stock_issue(0), stock_issue(3)]);
    assert_eq!(format!("{}", error), "Invalid legs: 2 issue(s)");
}

// ============================================================================
// ApiError IntoResponse Tests
// ============================================================================

#[test]
fn test_api_error_invalid_request_into_response() {
    let error = ApiError::InvalidRequest("Bad input".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_api_error_invalid_legs_into_response() {
    let error = ApiError::from(vec![stock_issue(1)]);
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// ApiError Debug Tests
// ============================================================================

#[test]
fn test_api_error_debug() {
    let error = ApiError::InvalidRequest("empty".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("InvalidRequest"));
    assert!(debug.contains("empty"));
}
