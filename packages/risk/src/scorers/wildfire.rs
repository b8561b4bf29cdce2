//! Wildfire scorer.
//!
//! The county prior is used as-is; geometry does not adjust it.

use hazard_map_hazard_models::{BaseStatistics, Coordinate, RiskScore};

use super::{out_of_coverage, region_label};

/// Raw default when the region is unknown.
pub const OUT_OF_COVERAGE_RAW: f64 = 30.0;

const SOURCE: &str = "Cal Fire FHSZ, FEMA National Risk Index";
const DEFAULT_SOURCE: &str = "FEMA National Risk Index";

/// Scores wildfire exposure.
#[must_use]
pub fn score(
    region: Option<&str>,
    stats: Option<&BaseStatistics>,
    _coordinate: Coordinate,
) -> RiskScore {
    let Some(stats) = stats else {
        return out_of_coverage(OUT_OF_COVERAGE_RAW, DEFAULT_SOURCE);
    };

    let raw = f64::from(stats.wildfire);
    let label = region_label(region);

    let factors = if raw >= 80.0 {
        vec![
            format!("{label} is in a Very High Fire Hazard Severity Zone (VHFHSZ)"),
            "Multiple wildfires recorded in past 5 years within 10 miles".to_string(),
            "Cal Fire recommends 100ft defensible space".to_string(),
        ]
    } else if raw >= 60.0 {
        vec![
            format!("{label} is in a High Fire Hazard Severity Zone"),
            "Wildland-Urban Interface (WUI) area with elevated risk".to_string(),
        ]
    } else if raw >= 40.0 {
        vec![
            format!("{label} has moderate wildfire exposure"),
            "Some vegetation and terrain factors present".to_string(),
        ]
    } else {
        vec![
            format!("{label} has low wildfire risk"),
            "Urban area with limited vegetation exposure".to_string(),
        ]
    };

    RiskScore::from_raw(raw, factors, SOURCE)
}
