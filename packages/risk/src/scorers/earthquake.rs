//! Earthquake scorer.
//!
//! The region prior is raised by proximity to the nearest catalogued fault,
//! weighted by that fault's slip rate and rupture probability.

use hazard_map_hazard_models::{BaseStatistics, Coordinate, RiskScore};
use hazard_map_reference::faults::UNKNOWN_PROBABILITY;

use super::out_of_coverage;
use crate::faults::NearestFault;

/// Raw default when the region is unknown.
pub const OUT_OF_COVERAGE_RAW: f64 = 30.0;

/// Faults farther than this many miles add nothing.
pub const FAULT_INFLUENCE_MILES: f64 = 50.0;

/// Slip rate (mm/yr) at which the slip term saturates.
pub const SATURATING_SLIP_RATE: f64 = 20.0;

/// Rupture probability (percent) at which the probability term saturates.
pub const SATURATING_PROBABILITY: f64 = 30.0;

/// Upper bound on the adjusted raw value.
pub const RAW_CAP: f64 = 95.0;

/// Upper bound on the public 0-10 score.
pub const SCORE_CEILING: f64 = 9.5;

const SOURCE: &str = "USGS Quaternary Fault Database, UCERF3";
const DEFAULT_SOURCE: &str = "USGS Seismic Hazard Maps";

/// Raw points a fault adds at a given (rounded) distance.
///
/// Zero at or beyond [`FAULT_INFLUENCE_MILES`]; at most 15 when sitting on a
/// fast, likely-to-rupture fault.
#[must_use]
pub fn fault_adjustment(nearest: &NearestFault<'_>) -> f64 {
    let distance = (1.0 - nearest.distance_miles / FAULT_INFLUENCE_MILES).max(0.0);
    let slip = (nearest.fault.slip_rate_mm_per_yr() / SATURATING_SLIP_RATE).min(1.0);
    let probability = (nearest.fault.probability_percent() / SATURATING_PROBABILITY).min(1.0);

    distance * slip.mul_add(5.0, probability.mul_add(5.0, 5.0))
}

/// Scores earthquake exposure.
#[must_use]
pub fn score(
    _region: Option<&str>,
    stats: Option<&BaseStatistics>,
    _coordinate: Coordinate,
    nearest: Option<&NearestFault<'_>>,
) -> RiskScore {
    let Some(stats) = stats else {
        return out_of_coverage(OUT_OF_COVERAGE_RAW, DEFAULT_SOURCE);
    };

    let adjustment = nearest.map_or(0.0, fault_adjustment);
    let raw = (f64::from(stats.earthquake) + adjustment).min(RAW_CAP);

    let mut factors = Vec::with_capacity(5);
    if let Some(nearest) = nearest {
        let fault = nearest.fault;
        factors.push(format!(
            "{} miles from {}",
            nearest.distance_miles,
            fault.name()
        ));
        if fault.probability() != UNKNOWN_PROBABILITY {
            factors.push(format!("Fault probability: {}", fault.probability()));
        }
        factors.push(format!("Slip rate: {}", fault.slip_rate()));
    }

    if raw >= 70.0 {
        factors.push("High liquefaction susceptibility in this region".to_string());
        factors.push("CEA earthquake insurance recommended".to_string());
    } else if raw >= 40.0 {
        factors.push("Moderate seismic activity expected".to_string());
    } else {
        factors.push("Low seismic activity expected".to_string());
    }

    RiskScore::from_raw_with_ceiling(raw, SCORE_CEILING, factors, SOURCE)
}
