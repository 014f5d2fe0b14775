//! Landslide risk threshold table.
//!
//! The indicator functions never consult this table; it is the shared lookup
//! the downstream risk classifier uses to turn its normalized score into a
//! severity level.

use crate::model::{IndicatorError, RiskBand, RiskLevel};

/// Score bands in ascending order of severity. Each band is `[lower, upper)`,
/// except that a score of exactly 1.0 belongs to `Critical`.
pub static RISK_THRESHOLDS: [RiskBand; 4] = [
    RiskBand { level: RiskLevel::Safe, lower: 0.0, upper: 0.3 },
    RiskBand { level: RiskLevel::Watch, lower: 0.3, upper: 0.6 },
    RiskBand { level: RiskLevel::Warning, lower: 0.6, upper: 0.8 },
    RiskBand { level: RiskLevel::Critical, lower: 0.8, upper: 1.0 },
];

impl RiskLevel {
    /// The score band assigned to this level.
    pub fn band(self) -> &'static RiskBand {
        match self {
            RiskLevel::Safe => &RISK_THRESHOLDS[0],
            RiskLevel::Watch => &RISK_THRESHOLDS[1],
            RiskLevel::Warning => &RISK_THRESHOLDS[2],
            RiskLevel::Critical => &RISK_THRESHOLDS[3],
        }
    }
}

/// Maps a normalized risk score in [0, 1] to its risk level.
///
/// Returns an error for NaN or scores outside [0, 1].
pub fn classify_risk_score(score: f64) -> Result<RiskLevel, IndicatorError> {
    if !(0.0..=1.0).contains(&score) {
        return Err(IndicatorError::InvalidRiskScore(score));
    }

    // Only 1.0 itself misses every half-open band.
    let level = RISK_THRESHOLDS
        .iter()
        .find(|band| score >= band.lower && score < band.upper)
        .map_or(RiskLevel::Critical, |band| band.level);
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_contiguous_and_ascending() {
        for pair in RISK_THRESHOLDS.windows(2) {
            assert_eq!(
                pair[0].upper, pair[1].lower,
                "{} and {} should share an edge",
                pair[0].level, pair[1].level
            );
            assert!(pair[0].level < pair[1].level);
        }
        assert_eq!(RISK_THRESHOLDS[0].lower, 0.0);
        assert_eq!(RISK_THRESHOLDS[3].upper, 1.0);
    }

    #[test]
    fn test_lower_edges_belong_to_their_band() {
        assert_eq!(classify_risk_score(0.0), Ok(RiskLevel::Safe));
        assert_eq!(classify_risk_score(0.3), Ok(RiskLevel::Watch));
        assert_eq!(classify_risk_score(0.6), Ok(RiskLevel::Warning));
        assert_eq!(classify_risk_score(0.8), Ok(RiskLevel::Critical));
    }

    #[test]
    fn test_values_inside_bands() {
        assert_eq!(classify_risk_score(0.29), Ok(RiskLevel::Safe));
        assert_eq!(classify_risk_score(0.59), Ok(RiskLevel::Watch));
        assert_eq!(classify_risk_score(0.79), Ok(RiskLevel::Warning));
    }

    #[test]
    fn test_top_of_scale_is_critical() {
        assert_eq!(classify_risk_score(1.0), Ok(RiskLevel::Critical));
    }

    #[test]
    fn test_out_of_range_scores_are_rejected() {
        assert_eq!(
            classify_risk_score(-0.01),
            Err(IndicatorError::InvalidRiskScore(-0.01))
        );
        assert!(classify_risk_score(1.01).is_err());
        assert!(classify_risk_score(f64::NAN).is_err());
    }

    #[test]
    fn test_band_lookup_matches_table() {
        assert_eq!(RiskLevel::Watch.band().lower, 0.3);
        assert_eq!(RiskLevel::Critical.band().upper, 1.0);
    }
}
