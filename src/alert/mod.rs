/// Risk severity lookup shared with the downstream classifier.
///
/// Submodules:
/// - `thresholds` — the static score-to-level table.

pub mod thresholds;

pub use thresholds::{RISK_THRESHOLDS, classify_risk_score};
