//! Ten-year loss projection for an average home.
//!
//! Each of wildfire, flood, and earthquake contributes an annual loss rate
//! proportional to its 0-10 score. Hurricane is not part of the projection.

use hazard_map_hazard_models::{LossEstimate, RiskScore};

/// Assumed home value in dollars.
pub const HOME_VALUE: f64 = 750_000.0;

/// Projection horizon in years.
pub const PROJECTION_YEARS: f64 = 10.0;

/// Annual loss rate at a wildfire score of 10.
pub const WILDFIRE_ANNUAL_RATE: f64 = 0.002;

/// Annual loss rate at a flood score of 10.
pub const FLOOD_ANNUAL_RATE: f64 = 0.0015;

/// Annual loss rate at an earthquake score of 10.
pub const EARTHQUAKE_ANNUAL_RATE: f64 = 0.003;

/// Fraction of the projected loss that remains after mitigation.
pub const MITIGATED_FRACTION: f64 = 0.35;

/// Lower bound on the unprotected figure.
pub const MIN_UNPROTECTED: u32 = 5_000;

/// Upper bound on the unprotected figure.
pub const MAX_UNPROTECTED: u32 = 150_000;

/// Lower bound on the mitigated figure.
pub const MIN_WITH_PROTECTION: u32 = 1_000;

/// Projects the ten-year loss from the three contributing hazard scores.
#[must_use]
pub fn estimate_loss(wildfire: &RiskScore, flood: &RiskScore, earthquake: &RiskScore) -> LossEstimate {
    project(wildfire.score(), flood.score(), earthquake.score())
}

/// Projects the ten-year loss from public 0-10 scores.
///
/// The mitigated figure is derived from the projection before the
/// unprotected clamp, then capped so it never exceeds the unprotected
/// figure.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn project(wildfire: f64, flood: f64, earthquake: f64) -> LossEstimate {
    let annual_rate = wildfire / 10.0 * WILDFIRE_ANNUAL_RATE
        + flood / 10.0 * FLOOD_ANNUAL_RATE
        + earthquake / 10.0 * EARTHQUAKE_ANNUAL_RATE;
    let projected = (HOME_VALUE * annual_rate * PROJECTION_YEARS).round();

    let unprotected = dollars(projected).clamp(MIN_UNPROTECTED, MAX_UNPROTECTED);
    let with_protection = dollars((projected * MITIGATED_FRACTION).round())
        .max(MIN_WITH_PROTECTION)
        .min(unprotected);

    LossEstimate {
        unprotected,
        with_protection,
    }
}

/// Converts a rounded, non-negative dollar figure. Negative and NaN inputs
/// become zero; values beyond `u32::MAX` saturate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn dollars(value: f64) -> u32 {
    value as u32
}
