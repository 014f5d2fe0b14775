//! Soil moisture classification.

use crate::model::{
    IndicatorError, MOISTURE_NORMAL_PCT, MOISTURE_SATURATED_PCT, MOISTURE_WET_PCT,
    SoilMoistureStatus,
};

/// Buckets a moisture percentage into Dry / Normal / Wet / Saturated.
///
/// Bands are half-open: `[30, 60)` is Normal, `[60, 80)` is Wet. Values are
/// not clamped, so negative readings land in Dry and anything at or above
/// 80 is Saturated. NaN fails every comparison and is reported as Saturated.
pub fn soil_moisture_status(moisture_percent: f64) -> SoilMoistureStatus {
    if moisture_percent < MOISTURE_NORMAL_PCT {
        SoilMoistureStatus::Dry
    } else if moisture_percent < MOISTURE_WET_PCT {
        SoilMoistureStatus::Normal
    } else if moisture_percent < MOISTURE_SATURATED_PCT {
        SoilMoistureStatus::Wet
    } else {
        SoilMoistureStatus::Saturated
    }
}

/// Rejects readings that are not a finite percentage in [0, 100].
pub fn validate_moisture(moisture_percent: f64) -> Result<(), IndicatorError> {
    if (0.0..=100.0).contains(&moisture_percent) {
        Ok(())
    } else {
        Err(IndicatorError::InvalidMoistureValue(moisture_percent))
    }
}
