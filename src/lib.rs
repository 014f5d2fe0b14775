//! Hydrological risk indicators for the landslide early-warning pipeline.
//!
//! Upstream stages hand this crate already-fetched rainfall and soil-moisture
//! series; it returns the scalar features (ARI, 48h rainfall, trend, moisture
//! bucket) consumed by the risk classifier.

pub mod alert;
pub mod analysis;
pub mod calculator;
pub mod config;
pub mod logging;
pub mod model;

pub use calculator::{IndicatorCalculator, IndicatorSnapshot};
pub use config::IndicatorConfig;
pub use model::{IndicatorError, RainfallTrend, RiskLevel, SoilMoistureStatus};
