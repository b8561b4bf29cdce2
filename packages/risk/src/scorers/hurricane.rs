//! Hurricane scorer.
//!
//! Pacific hurricanes almost never reach California; the score mostly
//! reflects tropical storm remnants along the southern coast.

use hazard_map_hazard_models::{BaseStatistics, Coordinate, RiskScore};

use super::{out_of_coverage, region_label};

/// Raw default when the region is unknown.
pub const OUT_OF_COVERAGE_RAW: f64 = 15.0;

/// Points west of this longitude get the coastal bonus.
pub const COASTAL_LONGITUDE: f64 = -117.0;

/// Raw points added for coastal locations.
pub const COASTAL_BONUS: f64 = 5.0;

const SOURCE: &str = "NOAA National Hurricane Center, FEMA NRI";
const DEFAULT_SOURCE: &str = "NOAA Historical Hurricane Tracks";

/// Scores hurricane exposure.
#[must_use]
pub fn score(
    region: Option<&str>,
    stats: Option<&BaseStatistics>,
    coordinate: Coordinate,
) -> RiskScore {
    let Some(stats) = stats else {
        return out_of_coverage(OUT_OF_COVERAGE_RAW, DEFAULT_SOURCE);
    };

    let bonus = if coordinate.longitude < COASTAL_LONGITUDE {
        COASTAL_BONUS
    } else {
        0.0
    };
    let raw = (f64::from(stats.hurricane) + bonus).min(100.0);

    let mut factors =
        vec!["Pacific Ocean water temperatures typically too cold for hurricanes".to_string()];
    if raw >= 30.0 {
        factors.push(format!(
            "{} occasionally experiences tropical storm remnants",
            region_label(region)
        ));
        factors.push("Southern coastal location has slightly elevated exposure".to_string());
    } else {
        factors.push("Direct hurricane impact extremely rare for California".to_string());
    }

    RiskScore::from_raw(raw, factors, SOURCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_map_hazard_models::RiskLevel;

    fn stats(hurricane: u8) -> BaseStatistics {
        BaseStatistics {
            wildfire: 0,
            flood: 0,
            earthquake: 0,
            hurricane,
        }
    }

    #[test]
    fn southern_coast_gets_remnant_factors() {
        let score = score(Some("San Diego"), Some(&stats(40)), Coordinate::new(-117.16, 32.72));
        assert!((score.score() - 4.5).abs() < f64::EPSILON);
        assert_eq!(score.level(), RiskLevel::Medium);
        assert_eq!(
            score.factors()[1],
            "San Diego County occasionally experiences tropical storm remnants"
        );
    }

    #[test]
    fn inland_has_no_bonus() {
        let score = score(Some("Imperial"), Some(&stats(25)), Coordinate::new(-115.5, 32.8));
        assert!((score.score() - 2.5).abs() < f64::EPSILON);
        assert_eq!(
            score.factors()[1],
            "Direct hurricane impact extremely rare for California"
        );
    }

    #[test]
    fn out_of_coverage_default() {
        let score = score(None, None, Coordinate::new(-130.0, 40.0));
        assert!((score.score() - 1.5).abs() < f64::EPSILON);
        assert_eq!(score.level(), RiskLevel::Low);
        assert_eq!(score.source(), "NOAA Historical Hurricane Tracks");
    }
}
