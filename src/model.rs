/// Core data types for the landslide indicator stage.
///
/// This module defines the shared domain model imported by all other modules:
/// the classification enums, the fixed window/threshold constants, and the
/// error type. It contains no logic beyond formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ARI defaults
// ---------------------------------------------------------------------------

/// Default recession coefficient `k` for the Antecedent Rainfall Index.
/// Represents the fraction of a day's rainfall still held by the soil one
/// day later.
pub const DEFAULT_ARI_DECAY_FACTOR: f64 = 0.85;

/// Default number of daily values the calculator feeds into the ARI.
pub const DEFAULT_ARI_DAYS: usize = 7;

// ---------------------------------------------------------------------------
// Rainfall windows
// ---------------------------------------------------------------------------

/// Number of hourly values summed by the rolling rainfall total.
pub const RAINFALL_WINDOW_HOURS: usize = 48;

/// Width of each half of the trend comparison (last 3h vs the 3h before).
pub const TREND_WINDOW_HOURS: usize = 3;

/// Minimum change in mm between the two trend windows before the trend is
/// reported as increasing or decreasing.
pub const TREND_THRESHOLD_MM: f64 = 5.0;

// ---------------------------------------------------------------------------
// Soil moisture bands (percent)
// ---------------------------------------------------------------------------

pub const MOISTURE_NORMAL_PCT: f64 = 30.0;
pub const MOISTURE_WET_PCT: f64 = 60.0;
pub const MOISTURE_SATURATED_PCT: f64 = 80.0;

// ---------------------------------------------------------------------------
// Classification types
// ---------------------------------------------------------------------------

/// Short-term direction of hourly rainfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainfallTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for RainfallTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainfallTrend::Increasing => write!(f, "increasing"),
            RainfallTrend::Decreasing => write!(f, "decreasing"),
            RainfallTrend::Stable => write!(f, "stable"),
        }
    }
}

/// Soil moisture bucket, in ascending order of wetness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoilMoistureStatus {
    Dry,
    Normal,
    Wet,
    Saturated,
}

impl fmt::Display for SoilMoistureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilMoistureStatus::Dry => write!(f, "Dry"),
            SoilMoistureStatus::Normal => write!(f, "Normal"),
            SoilMoistureStatus::Wet => write!(f, "Wet"),
            SoilMoistureStatus::Saturated => write!(f, "Saturated"),
        }
    }
}

/// Landslide risk levels, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Watch,
    Warning,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "SAFE"),
            RiskLevel::Watch => write!(f, "WATCH"),
            RiskLevel::Warning => write!(f, "WARNING"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Half-open interval `[lower, upper)` of the normalized risk score assigned
/// to one risk level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub lower: f64,
    pub upper: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the opt-in validation paths. The indicator functions
/// themselves never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// A rainfall value was negative, NaN or infinite.
    InvalidRainfallValue { index: usize, value: f64 },
    /// A soil moisture reading was NaN, infinite or outside [0, 100].
    InvalidMoistureValue(f64),
    /// The ARI decay factor was outside the open interval (0, 1).
    InvalidDecayFactor(f64),
    /// A risk score was NaN or outside [0, 1].
    InvalidRiskScore(f64),
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::InvalidRainfallValue { index, value } => {
                write!(f, "Invalid rainfall value at index {}: {}", index, value)
            }
            IndicatorError::InvalidMoistureValue(v) => {
                write!(f, "Invalid soil moisture value: {} (expected 0-100)", v)
            }
            IndicatorError::InvalidDecayFactor(k) => {
                write!(f, "Invalid ARI decay factor: {} (expected 0 < k < 1)", k)
            }
            IndicatorError::InvalidRiskScore(s) => {
                write!(f, "Invalid risk score: {} (expected 0-1)", s)
            }
        }
    }
}

impl std::error::Error for IndicatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_labels_match_feature_strings() {
        assert_eq!(RainfallTrend::Increasing.to_string(), "increasing");
        assert_eq!(RainfallTrend::Decreasing.to_string(), "decreasing");
        assert_eq!(RainfallTrend::Stable.to_string(), "stable");
    }

    #[test]
    fn test_serde_labels_match_display() {
        let trend = serde_json::to_string(&RainfallTrend::Increasing).unwrap();
        assert_eq!(trend, "\"increasing\"");
        let moisture = serde_json::to_string(&SoilMoistureStatus::Saturated).unwrap();
        assert_eq!(moisture, "\"Saturated\"");
        let risk = serde_json::to_string(&RiskLevel::Warning).unwrap();
        assert_eq!(risk, "\"WARNING\"");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(RiskLevel::Safe < RiskLevel::Watch);
        assert!(RiskLevel::Watch < RiskLevel::Warning);
        assert!(RiskLevel::Warning < RiskLevel::Critical);
        assert!(SoilMoistureStatus::Dry < SoilMoistureStatus::Saturated);
    }

    #[test]
    fn test_error_messages_name_offending_value() {
        let err = IndicatorError::InvalidRainfallValue { index: 3, value: -2.5 };
        assert_eq!(err.to_string(), "Invalid rainfall value at index 3: -2.5");
        let err = IndicatorError::InvalidDecayFactor(1.2);
        assert!(err.to_string().contains("1.2"));
    }
}
