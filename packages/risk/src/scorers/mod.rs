//! Per-hazard risk scorers.
//!
//! Every scorer is a pure function of the resolved region, its base
//! statistics, and the query coordinate. When the statistics are missing
//! (the coordinate fell outside every known region, or the region has no
//! statistics) the scorer returns a fixed low-confidence default instead of
//! failing.

pub mod earthquake;
pub mod flood;
pub mod hurricane;
pub mod wildfire;

use hazard_map_hazard_models::RiskScore;

/// Factor reported for every out-of-coverage default.
pub const OUT_OF_COVERAGE_FACTOR: &str = "Location outside California coverage area";

/// Builds an out-of-coverage default score.
fn out_of_coverage(raw: f64, source: &str) -> RiskScore {
    RiskScore::from_raw(raw, vec![OUT_OF_COVERAGE_FACTOR.to_string()], source)
}

/// How a region is named in factor text.
fn region_label(region: Option<&str>) -> String {
    region.map_or_else(|| "This area".to_string(), |name| format!("{name} County"))
}
