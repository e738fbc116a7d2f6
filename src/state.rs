//! Application state management.

use crate::config::{CalculatorConfig, Config};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Application state shared across all handlers.
///
/// Calculations themselves are stateless; only the configuration and a few
/// counters are shared.
#[derive(Debug, Default)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    calculations: AtomicU64,
    validations: AtomicU64,
}

impl AppState {
    /// Creates a new application state with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new application state from configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        info!(
            strict_quantities = config.calculator.strict_quantities,
            max_legs = config.calculator.max_legs,
            "Calculator configured"
        );

        Self {
            config,
            ..Self::default()
        }
    }

    /// Calculator settings.
    #[must_use]
    pub fn calculator(&self) -> &CalculatorConfig {
        &self.config.calculator
    }

    /// Records a completed calculation.
    pub fn record_calculation(&self) {
        self.calculations.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an answered validation request.
    pub fn record_validation(&self) {
        self.validations.fetch_add(1, Ordering::Relaxed);
    }

    /// Calculations completed since start.
    #[must_use]
    pub fn calculations(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }

    /// Validation requests answered since start.
    #[must_use]
    pub fn validations(&self) -> u64 {
        self.validations.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let state = AppState::new();
        assert_eq!(state.calculations(), 0);
        assert_eq!(state.validations(), 0);
    }

    #[test]
    fn test_record_counters() {
        let state = AppState::new();
        state.record_calculation();
        state.record_calculation();
        state.record_validation();

        assert_eq!(state.calculations(), 2);
        assert_eq!(state.validations(), 1);
    }

    #[test]
    fn test_from_config_keeps_calculator_settings() {
        let config = Config::parse("[calculator]\nstrict_quantities = true\nmax_legs = 4\n")
            .expect("should parse");
        let state = AppState::from_config(config);

        assert!(state.calculator().strict_quantities);
        assert_eq!(state.calculator().max_legs, 4);
    }
}
