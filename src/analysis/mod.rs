/// Indicator calculations for the landslide feature stage.
///
/// Every function here is a pure mapping from its arguments to a scalar or
/// a label: no I/O, no logging, no shared state. Inputs are not validated;
/// callers that want rejection of bad readings use the `validate_*` helpers.
///
/// Submodules:
/// - `ari` — Antecedent Rainfall Index over daily totals.
/// - `rainfall` — 48-hour total and short-window trend over hourly totals.
/// - `soil_moisture` — moisture percentage buckets.

pub mod ari;
pub mod rainfall;
pub mod soil_moisture;

pub use ari::{calculate_ari, calculate_ari_default, validate_decay_factor};
pub use rainfall::{calculate_48h_rainfall, rainfall_trend, validate_rainfall};
pub use soil_moisture::{soil_moisture_status, validate_moisture};

/// Rounds to two decimal places using the exact decimal value of the float,
/// ties to even.
///
/// Formatting goes through the float's exact expansion, so 2.675 (stored as
/// 2.67499...) rounds down and large values never overflow.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
