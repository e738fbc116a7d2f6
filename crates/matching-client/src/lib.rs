//! HTTP client library for the Option Matching API.
//!
//! This crate provides a typed HTTP client for the option matching backend.
//! It covers every REST endpoint: health, statistics, the combination
//! catalog, leg validation and combination calculation.
//!
//! # Example
//!
//! ```no_run
//! use matching_client::{ClientConfig, LegInput, LegType, MatchingClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), matching_client::Error> {
//!     let client = MatchingClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let response = client
//!         .calculate(vec![
//!             LegInput::new(LegType::LongStock, "BABA", 100, 0),
//!             LegInput::new(LegType::ShortCall, "BABA 210205C00055000", 1, 0),
//!         ])
//!         .await?;
//!
//!     for (shape, summary) in &response.report.available_combinations {
//!         println!("{}: {}", shape, summary.count);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, MatchingClient};
pub use error::Error;
pub use types::*;
