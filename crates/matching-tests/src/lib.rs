//! Integration tests for the Option Matching API.
//!
//! These tests require the API server to be running. Configure the server URL
//! via the `API_BASE_URL` environment variable (default: `http://localhost:8080`).

use matching_client::{ClientConfig, LegInput, LegType, MatchingClient};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<MatchingClient, matching_client::Error> {
    MatchingClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}

/// Legs of a covered call on BABA with 100 shares held.
#[must_use]
pub fn covered_call_legs() -> Vec<LegInput> {
    vec![
        LegInput::new(LegType::LongStock, "BABA", 100, 0),
        LegInput::new(LegType::ShortCall, "BABA 210205C00055000", 1, 0),
    ]
}
