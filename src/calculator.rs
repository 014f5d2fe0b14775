//! Configured entry point for the feature stage.
//!
//! `IndicatorCalculator` binds an `IndicatorConfig` to the pure functions in
//! `analysis` and bundles their outputs for one zone into an
//! `IndicatorSnapshot`, the processed-features record handed to the message
//! bus and risk classifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    calculate_48h_rainfall, calculate_ari, rainfall_trend, soil_moisture_status, validate_moisture,
    validate_rainfall,
};
use crate::config::{ConfigError, IndicatorConfig};
use crate::logging::{self, Component};
use crate::model::{IndicatorError, RainfallTrend, SoilMoistureStatus};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// All indicators for one zone at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub zone_id: String,
    pub ari: f64,
    pub rainfall_48h_mm: f64,
    pub rainfall_trend: RainfallTrend,
    pub soil_moisture_percent: f64,
    pub soil_moisture_status: SoilMoistureStatus,
    pub computed_at: DateTime<Utc>,
}

impl IndicatorSnapshot {
    /// Serializes the snapshot as a JSON feature record.
    ///
    /// JSON has no NaN or infinity (serde_json would write `null` and the
    /// record could not be read back), so snapshots built from non-finite
    /// inputs by the unchecked path are rejected here.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let fields = [
            ("ari", self.ari),
            ("rainfall_48h_mm", self.rainfall_48h_mm),
            ("soil_moisture_percent", self.soil_moisture_percent),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(serde::ser::Error::custom(format!(
                "{} is not a finite number: {}",
                name, value
            )));
        }
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct IndicatorCalculator {
    config: IndicatorConfig,
}

impl IndicatorCalculator {
    /// Wraps `config` as given. Configs from `IndicatorConfig::load`,
    /// `from_toml_str` or `from_env` are already validated; use `try_new`
    /// for hand-built ones.
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Validates `config` before wrapping it.
    pub fn try_new(config: IndicatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// ARI over the first `ari_days` daily totals using the configured `k`.
    pub fn ari(&self, daily_rainfall: &[f64]) -> f64 {
        let window = daily_rainfall.len().min(self.config.ari_days);
        calculate_ari(&daily_rainfall[..window], self.config.ari_decay_factor)
    }

    pub fn rainfall_48h(&self, hourly_rainfall: &[f64]) -> f64 {
        calculate_48h_rainfall(hourly_rainfall)
    }

    pub fn trend(&self, hourly_rainfall: &[f64]) -> RainfallTrend {
        rainfall_trend(hourly_rainfall)
    }

    pub fn soil_moisture(&self, moisture_percent: f64) -> SoilMoistureStatus {
        soil_moisture_status(moisture_percent)
    }

    /// Computes every indicator without validating inputs.
    pub fn snapshot(
        &self,
        zone_id: &str,
        daily_rainfall: &[f64],
        hourly_rainfall: &[f64],
        moisture_percent: f64,
    ) -> IndicatorSnapshot {
        self.snapshot_at(zone_id, daily_rainfall, hourly_rainfall, moisture_percent, Utc::now())
    }

    /// `snapshot` with an explicit timestamp, for deterministic tests and
    /// replays.
    pub fn snapshot_at(
        &self,
        zone_id: &str,
        daily_rainfall: &[f64],
        hourly_rainfall: &[f64],
        moisture_percent: f64,
        now: DateTime<Utc>,
    ) -> IndicatorSnapshot {
        let snapshot = IndicatorSnapshot {
            zone_id: zone_id.to_string(),
            ari: self.ari(daily_rainfall),
            rainfall_48h_mm: self.rainfall_48h(hourly_rainfall),
            rainfall_trend: self.trend(hourly_rainfall),
            soil_moisture_percent: moisture_percent,
            soil_moisture_status: self.soil_moisture(moisture_percent),
            computed_at: now,
        };

        logging::debug(
            Component::Calculator,
            Some(zone_id),
            &format!(
                "ARI {:.2}, 48h {:.2} mm, trend {}, soil {}",
                snapshot.ari,
                snapshot.rainfall_48h_mm,
                snapshot.rainfall_trend,
                snapshot.soil_moisture_status
            ),
        );

        snapshot
    }

    /// Like `snapshot`, but rejects negative/non-finite rainfall and moisture
    /// outside [0, 100] before computing anything.
    pub fn snapshot_checked(
        &self,
        zone_id: &str,
        daily_rainfall: &[f64],
        hourly_rainfall: &[f64],
        moisture_percent: f64,
    ) -> Result<IndicatorSnapshot, IndicatorError> {
        self.snapshot_checked_at(zone_id, daily_rainfall, hourly_rainfall, moisture_percent, Utc::now())
    }

    pub fn snapshot_checked_at(
        &self,
        zone_id: &str,
        daily_rainfall: &[f64],
        hourly_rainfall: &[f64],
        moisture_percent: f64,
        now: DateTime<Utc>,
    ) -> Result<IndicatorSnapshot, IndicatorError> {
        let checks = [
            ("daily rainfall", validate_rainfall(daily_rainfall)),
            ("hourly rainfall", validate_rainfall(hourly_rainfall)),
            ("soil moisture", validate_moisture(moisture_percent)),
        ];
        for (operation, result) in checks {
            if let Err(err) = result {
                logging::log_validation_failure(Some(zone_id), operation, &err);
                return Err(err);
            }
        }

        Ok(self.snapshot_at(zone_id, daily_rainfall, hourly_rainfall, moisture_percent, now))
    }
}
