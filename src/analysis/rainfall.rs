//! Hourly rainfall aggregation: rolling 48-hour total and short-window trend.
//!
//! Both functions are positional. They assume index 0 is the most recent
//! hour and that consecutive elements are one hour apart; timestamps are
//! never inspected.

use crate::model::{
    IndicatorError, RAINFALL_WINDOW_HOURS, RainfallTrend, TREND_THRESHOLD_MM, TREND_WINDOW_HOURS,
};

use super::round_to_hundredths;

/// Total rainfall over the last 48 hours, rounded to two decimals.
///
/// Shorter histories are summed as-is without padding.
pub fn calculate_48h_rainfall(history: &[f64]) -> f64 {
    let window = &history[..history.len().min(RAINFALL_WINDOW_HOURS)];
    round_to_hundredths(window.iter().sum())
}

/// Compares the last 3 hours of rainfall against the 3 hours before them.
///
/// Fewer than 6 hours of data is reported as `Stable`. A change of more
/// than 5 mm either way is a trend; exactly 5 mm is not.
pub fn rainfall_trend(history: &[f64]) -> RainfallTrend {
    if history.len() < 2 * TREND_WINDOW_HOURS {
        return RainfallTrend::Stable;
    }

    let recent: f64 = history[..TREND_WINDOW_HOURS].iter().sum();
    let previous: f64 = history[TREND_WINDOW_HOURS..2 * TREND_WINDOW_HOURS].iter().sum();
    let diff = recent - previous;

    if diff > TREND_THRESHOLD_MM {
        RainfallTrend::Increasing
    } else if diff < -TREND_THRESHOLD_MM {
        RainfallTrend::Decreasing
    } else {
        RainfallTrend::Stable
    }
}

/// Rejects the first negative, NaN or infinite rainfall value.
pub fn validate_rainfall(history: &[f64]) -> Result<(), IndicatorError> {
    match history
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        Some((index, &value)) => Err(IndicatorError::InvalidRainfallValue { index, value }),
        None => Ok(()),
    }
}
