//! Error types for the REST API.

use crate::matching::LegIssue;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// One problem with one leg of a request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegIssueResponse {
    /// Zero-based position of the leg in the request.
    pub index: usize,
    /// Error code, e.g. `INVALID_STOCK_CODE`.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl From<&LegIssue> for LegIssueResponse {
    fn from(issue: &LegIssue) -> Self {
        Self {
            index: issue.index,
            code: issue.error.code().to_string(),
            message: issue.error.to_string(),
        }
    }
}

/// Invalid legs error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct InvalidLegsResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
    /// Every problem found, ordered by leg index.
    pub issues: Vec<LegIssueResponse>,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// One or more legs failed validation.
    #[error("Invalid legs: {} issue(s)", .0.len())]
    InvalidLegs(Vec<LegIssue>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidLegs(issues) => {
                let body = Json(InvalidLegsResponse {
                    error: "Please correct every invalid leg before calculating".to_string(),
                    code: "INVALID_LEGS".to_string(),
                    issues: issues.iter().map(LegIssueResponse::from).collect(),
                });

                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::InvalidRequest(_) => {
                let body = Json(ErrorResponse {
                    error: self.to_string(),
                    code: "INVALID_REQUEST".to_string(),
                });

                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

impl From<Vec<LegIssue>> for ApiError {
    fn from(issues: Vec<LegIssue>) -> Self {
        ApiError::InvalidLegs(issues)
    }
}
