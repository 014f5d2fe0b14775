//! Antecedent Rainfall Index.
//!
//! ARI = Σ k^i × R_i, where R_0 is today's rainfall, R_i the rainfall `i`
//! days ago, and `k` the recession coefficient modelling how quickly the
//! soil drains. Higher ARI means wetter antecedent conditions.

use crate::model::{DEFAULT_ARI_DECAY_FACTOR, IndicatorError};

use super::round_to_hundredths;

/// Computes the ARI of `history` (daily mm, most recent first) with decay
/// factor `k`, rounded to two decimals.
///
/// Every element contributes; truncating to a meaningful window (e.g. 7 days)
/// is the caller's job. An empty history yields `0.0`.
pub fn calculate_ari(history: &[f64], k: f64) -> f64 {
    if history.is_empty() {
        return 0.0;
    }

    let mut weight = 1.0;
    let mut ari = 0.0;
    for rain in history {
        ari += weight * rain;
        weight *= k;
    }

    round_to_hundredths(ari)
}

/// `calculate_ari` with the default decay factor of 0.85.
pub fn calculate_ari_default(history: &[f64]) -> f64 {
    calculate_ari(history, DEFAULT_ARI_DECAY_FACTOR)
}

/// Rejects decay factors outside the open interval (0, 1).
pub fn validate_decay_factor(k: f64) -> Result<(), IndicatorError> {
    if k > 0.0 && k < 1.0 {
        Ok(())
    } else {
        Err(IndicatorError::InvalidDecayFactor(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Basic values -------------------------------------------------------

    #[test]
    fn test_empty_history_is_zero_for_any_k() {
        for k in [0.1, 0.5, 0.85, 0.99] {
            assert_eq!(calculate_ari(&[], k), 0.0, "empty history with k={}", k);
        }
    }

    #[test]
    fn test_single_day_is_todays_rainfall() {
        assert_eq!(calculate_ari(&[10.0], 0.85), 10.0);
    }

    #[test]
    fn test_two_days_apply_one_decay_step() {
        // 10 + 0.85 * 10
        assert_eq!(calculate_ari(&[10.0, 10.0], 0.85), 18.5);
    }

    #[test]
    fn test_week_of_rain_matches_closed_form() {
        let history = [12.0, 0.0, 4.0, 30.0, 0.0, 0.0, 8.0];
        let expected: f64 = history
            .iter()
            .enumerate()
            .map(|(i, r)| 0.85f64.powi(i as i32) * r)
            .sum();
        assert_eq!(calculate_ari(&history, 0.85), round_to_hundredths(expected));
    }

    #[test]
    fn test_default_uses_configured_decay() {
        let history = [5.0, 5.0, 5.0];
        assert_eq!(calculate_ari_default(&history), calculate_ari(&history, 0.85));
    }

    #[test]
    fn test_single_day_rounds_like_reported_rainfall() {
        assert_eq!(calculate_ari(&[2.675], 0.85), 2.67);
        assert_eq!(calculate_ari(&[0.125], 0.85), 0.12);
        assert_eq!(calculate_ari(&[1e307], 0.85), 1e307);
    }

    // --- Window ---------------------------------------------------------------

    #[test]
    fn test_no_window_limit_is_imposed() {
        // Day 10 still contributes 0.85^10 * 100 ≈ 19.69.
        let mut history = vec![0.0; 10];
        history.push(100.0);
        let ari = calculate_ari(&history, 0.85);
        assert!(ari > 19.0 && ari < 20.0, "day-10 rainfall should count, got {}", ari);
    }

    // --- Monotonicity -------------------------------------------------------

    #[test]
    fn test_more_rain_on_any_day_never_lowers_ari() {
        let base = [3.0, 7.5, 0.0, 12.0, 1.0, 0.0, 4.0];
        let base_ari = calculate_ari(&base, 0.85);
        for i in 0..base.len() {
            let mut wetter = base;
            wetter[i] += 2.0;
            let wetter_ari = calculate_ari(&wetter, 0.85);
            assert!(
                wetter_ari >= base_ari,
                "raising day {} lowered ARI from {} to {}",
                i,
                base_ari,
                wetter_ari
            );
        }
    }

    // --- Permissive inputs --------------------------------------------------

    #[test]
    fn test_negative_rainfall_is_not_rejected() {
        assert_eq!(calculate_ari(&[-10.0], 0.85), -10.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(calculate_ari(&[1.0, f64::NAN], 0.85).is_nan());
    }

    // --- Decay factor validation ---------------------------------------------

    #[test]
    fn test_decay_factor_bounds_are_exclusive() {
        assert!(validate_decay_factor(0.85).is_ok());
        assert_eq!(
            validate_decay_factor(0.0),
            Err(IndicatorError::InvalidDecayFactor(0.0))
        );
        assert_eq!(
            validate_decay_factor(1.0),
            Err(IndicatorError::InvalidDecayFactor(1.0))
        );
        assert!(validate_decay_factor(f64::NAN).is_err());
    }
}
