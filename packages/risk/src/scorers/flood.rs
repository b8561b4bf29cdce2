//! Flood scorer.

use hazard_map_hazard_models::{BaseStatistics, Coordinate, RiskScore};

use super::{out_of_coverage, region_label};

/// Raw default when the region is unknown.
pub const OUT_OF_COVERAGE_RAW: f64 = 30.0;

/// Points west of this longitude get the coastal storm-surge bonus.
pub const COASTAL_LONGITUDE: f64 = -121.5;

/// Raw points added for coastal locations.
pub const COASTAL_BONUS: f64 = 10.0;

const SOURCE: &str = "FEMA NFHL, National Risk Index";
const DEFAULT_SOURCE: &str = "FEMA National Risk Index";

/// Scores flood exposure.
///
/// Starts from the region prior and adds [`COASTAL_BONUS`] west of
/// [`COASTAL_LONGITUDE`].
#[must_use]
pub fn score(
    region: Option<&str>,
    stats: Option<&BaseStatistics>,
    coordinate: Coordinate,
) -> RiskScore {
    let Some(stats) = stats else {
        return out_of_coverage(OUT_OF_COVERAGE_RAW, DEFAULT_SOURCE);
    };

    let coastal = coordinate.longitude < COASTAL_LONGITUDE;
    let bonus = if coastal { COASTAL_BONUS } else { 0.0 };
    let raw = (f64::from(stats.flood) + bonus).min(100.0);
    let label = region_label(region);

    let mut factors = Vec::with_capacity(3);
    if raw >= 60.0 {
        factors.push(format!("{label} has high flood exposure per FEMA NRI"));
        if coastal {
            factors.push("Coastal location increases storm surge risk".to_string());
        }
        factors.push("Consider NFIP flood insurance (30-day waiting period)".to_string());
    } else if raw >= 40.0 {
        factors.push(format!("{label} has moderate flood risk"));
        factors.push("Some areas may be in FEMA Special Flood Hazard Area".to_string());
    } else {
        factors.push(format!("{label} has low overall flood risk"));
        factors.push("Located outside primary flood hazard zones".to_string());
    }

    RiskScore::from_raw(raw, factors, SOURCE)
}
