//! # Option Matching Backend - REST API Server
//!
//! A REST API backend that matches option and stock legs into standard
//! two-leg combinations. Built with [Axum](https://crates.io/crates/axum) for
//! async HTTP handling and provides OpenAPI/Swagger documentation via
//! [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Combination Matching**: Greedy decomposition of per-type leg
//!   quantities into the eight catalog shapes (covered calls, protective
//!   puts, spreads, straddles).
//!
//! - **Pending Orders**: Every calculation is run twice, once on the legs held
//!   now and once on the legs held after open orders fill, and reports the
//!   combinations that only the pending orders make possible.
//!
//! - **Leg Validation**: Stock and option code formats are checked and every
//!   problem in a request is reported at once.
//!
//! - **OpenAPI Documentation**: Auto-generated Swagger UI for API exploration
//!   and testing at `/swagger-ui/`.
//!
//! - **Structured Logging**: Request tracing with `tower-http` and `tracing`.
//!
//! ## Combination Catalog
//!
//! Shapes are matched in this order, and the order matters: a leg claimed by
//! an earlier shape is not available to a later one.
//!
//! | Shape | Legs | Name |
//! |-------|------|------|
//! | 1B | short call + long stock | Covered call |
//! | 1D | short put + short stock | Covered put |
//! | 1A | long put + long stock | Protective put |
//! | 1C | long call + short stock | Protective call |
//! | 2B | long call + short call | Call spread |
//! | 2A | long put + short put | Put spread |
//! | 2C | short call + short put | Short straddle |
//! | 2D | long call + long put | Long straddle |
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`matching`] | Leg aggregation, combination resolver and report builder |
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/stats` | Request statistics |
//! | GET | `/api/v1/combinations/catalog` | Combination catalog |
//! | POST | `/api/v1/legs/validate` | Validate legs |
//! | POST | `/api/v1/combinations/calculate` | Match legs into combinations |
//!
//! ## Example Usage
//!
//! ```bash
//! # Start the server
//! CONFIG_PATH=config.toml cargo run
//!
//! # Match a covered call
//! curl -X POST http://localhost:8080/api/v1/combinations/calculate \
//!   -H "Content-Type: application/json" \
//!   -d '{"legs": [
//!         {"type": "long_stock", "code": "BABA", "available": 100, "on_order": 0},
//!         {"type": "short_call", "code": "BABA 210205C00055000", "available": 1, "on_order": 0}
//!       ]}'
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use option_matching_backend::matching::{CombinationShape, LegRecord, LegType, calculate};
//!
//! let report = calculate(&[
//!     LegRecord::new(LegType::LongStock, 100, 0).with_code("BABA"),
//!     LegRecord::new(LegType::ShortCall, 1, 0).with_code("BABA 210205C00055000"),
//! ]);
//!
//! assert_eq!(report.available_combinations[&CombinationShape::CoveredCall].count, 1);
//! assert_eq!(report.remaining_legs[0].count, 99);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod state;
