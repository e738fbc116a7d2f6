//! Unit tests for error module.

use super::*;
use crate::types::LegIssue;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 500,
        message: "Internal server error".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("500"));
    assert!(display.contains("Internal server error"));
}

#[test]
fn test_not_found_error_display() {
    let error = Error::NotFound("no route".to_string());

    let display = format!("{}", error);
    assert!(display.contains("Not found"));
    assert!(display.contains("no route"));
}

#[test]
fn test_invalid_request_error_display() {
    let error = Error::InvalidRequest {
        code: "INVALID_LEGS".to_string(),
        message: "1 leg(s) failed validation".to_string(),
        issues: vec![LegIssue {
            index: 0,
            code: "INVALID_STOCK_CODE".to_string(),
            message: "invalid stock code: baba".to_string(),
        }],
    };

    let display = format!("{}", error);
    assert!(display.contains("Invalid request"));
    assert!(display.contains("failed validation"));
}

#[test]
fn test_invalid_url_error_from_parse_error() {
    let parse_error = url::Url::parse("not a url").unwrap_err();
    let error = Error::from(parse_error);

    assert!(matches!(error, Error::InvalidUrl(_)));
    assert!(format!("{}", error).contains("Invalid URL"));
}

#[test]
fn test_error_debug() {
    let error = Error::Api {
        status: 503,
        message: "Service unavailable".to_string(),
    };

    let debug = format!("{:?}", error);
    assert!(debug.contains("Api"));
    assert!(debug.contains("503"));
}
