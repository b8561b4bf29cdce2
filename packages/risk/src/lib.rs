#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Natural-hazard risk inference for California locations.
//!
//! Given a coordinate, [`RiskEngine::calculate`] resolves the containing
//! county, looks up its hazard priors, adjusts them by coastal position and
//! fault proximity, and projects a ten-year loss. Every step is a pure
//! function of the coordinate and data loaded once at startup, so the same
//! input always produces the same [`RiskData`].
//!
//! Coordinates outside every known county are not an error: they get fixed
//! low-confidence defaults with `region: None`.

pub mod faults;
pub mod loss;
pub mod mitigation;
pub mod scorers;

use hazard_map_hazard_models::mitigation::MitigationPlan;
use hazard_map_hazard_models::{Coordinate, RiskData};
use hazard_map_reference::ReferenceData;
use hazard_map_spatial::RegionBoundaries;

pub use faults::{NearestFault, nearest_fault};
pub use loss::estimate_loss;
pub use mitigation::{coverage_gaps, prioritize};

/// Everything the engine knows about one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment<'a> {
    /// Hazard scores and loss projection.
    pub risk: RiskData,
    /// Closest catalogued fault, regardless of coverage.
    pub nearest_fault: Option<NearestFault<'a>>,
    /// Recommended actions.
    pub plan: MitigationPlan,
    /// Insurance coverage worth reviewing.
    pub coverage_gaps: Vec<&'static str>,
}

/// Risk calculator bound to a set of reference data.
#[derive(Debug, Clone, Copy)]
pub struct RiskEngine<'a> {
    reference: &'a ReferenceData,
}

impl RiskEngine<'static> {
    /// Engine over the compiled-in reference data.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ReferenceData::embedded())
    }
}

impl<'a> RiskEngine<'a> {
    /// Creates an engine over `reference`.
    #[must_use]
    pub const fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// The reference data this engine scores against.
    #[must_use]
    pub const fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    /// Closest catalogued fault to `coordinate`.
    #[must_use]
    pub fn nearest_fault(&self, coordinate: Coordinate) -> Option<NearestFault<'a>> {
        nearest_fault(coordinate, self.reference.faults())
    }

    /// Scores every hazard at `coordinate`.
    #[must_use]
    pub fn calculate(&self, coordinate: Coordinate, boundaries: &RegionBoundaries) -> RiskData {
        self.calculate_with_fault(coordinate, boundaries).0
    }

    /// Scores `coordinate` and attaches the nearest fault, the mitigation
    /// plan, and coverage gaps.
    #[must_use]
    pub fn assess(&self, coordinate: Coordinate, boundaries: &RegionBoundaries) -> Assessment<'a> {
        let (risk, nearest_fault) = self.calculate_with_fault(coordinate, boundaries);
        let plan = prioritize(&risk);
        let coverage_gaps = coverage_gaps(&risk);

        Assessment {
            risk,
            nearest_fault,
            plan,
            coverage_gaps,
        }
    }

    fn calculate_with_fault(
        &self,
        coordinate: Coordinate,
        boundaries: &RegionBoundaries,
    ) -> (RiskData, Option<NearestFault<'a>>) {
        let region = boundaries.resolve(coordinate).map(|r| r.name().to_string());
        let stats = region
            .as_deref()
            .and_then(|name| self.reference.regions().get(name));

        if region.is_some() && stats.is_none() {
            log::warn!(
                "Region {} has a boundary but no statistics; using defaults",
                region.as_deref().unwrap_or_default()
            );
        }

        let nearest = self.nearest_fault(coordinate);
        let name = region.as_deref();

        let wildfire = scorers::wildfire::score(name, stats.as_ref(), coordinate);
        let flood = scorers::flood::score(name, stats.as_ref(), coordinate);
        let earthquake = scorers::earthquake::score(name, stats.as_ref(), coordinate, nearest.as_ref());
        let hurricane = scorers::hurricane::score(name, stats.as_ref(), coordinate);
        let loss_estimate = estimate_loss(&wildfire, &flood, &earthquake);

        log::debug!(
            "Risk at ({}, {}) in {}: wildfire={} flood={} earthquake={} hurricane={}",
            coordinate.longitude,
            coordinate.latitude,
            name.unwrap_or("<no region>"),
            wildfire.score(),
            flood.score(),
            earthquake.score(),
            hurricane.score()
        );

        let risk = RiskData {
            wildfire,
            flood,
            earthquake,
            hurricane,
            loss_estimate,
            region,
        };

        (risk, nearest)
    }
}

/// Scores `coordinate` against the compiled-in reference data.
#[must_use]
pub fn calculate_risks(coordinate: Coordinate, boundaries: &RegionBoundaries) -> RiskData {
    RiskEngine::embedded().calculate(coordinate, boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_map_hazard_models::{Hazard, RiskLevel};
    use hazard_map_spatial::RegionBoundary;

    const SAMPLE_COUNTIES: &str = include_str!("../fixtures/sample_counties.geojson");

    fn boundaries() -> RegionBoundaries {
        RegionBoundaries::from_geojson_str(SAMPLE_COUNTIES).unwrap()
    }

    fn assert_score(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < f64::EPSILON, "expected {expected}, got {actual}");
    }

    #[test]
    fn downtown_los_angeles() {
        let risk = calculate_risks(Coordinate::new(-118.2437, 34.0522), &boundaries());

        assert_eq!(risk.region.as_deref(), Some("Los Angeles"));
        assert_score(risk.wildfire.score(), 8.5);
        assert_eq!(risk.wildfire.level(), RiskLevel::High);
        assert_score(risk.flood.score(), 4.5);
        assert_eq!(risk.flood.level(), RiskLevel::Medium);
        assert_score(risk.earthquake.score(), 9.5);
        assert_eq!(risk.earthquake.level(), RiskLevel::High);
        assert_score(risk.hurricane.score(), 4.0);
        assert_eq!(risk.hurricane.level(), RiskLevel::Medium);
        assert!(risk.earthquake.factors()[0].contains("miles from"));

        assert_eq!(risk.loss_estimate.unprotected, 39_188);
        assert_eq!(risk.loss_estimate.with_protection, 13_716);
    }

    #[test]
    fn offshore_gets_defaults() {
        let risk = calculate_risks(Coordinate::new(-130.0, 40.0), &boundaries());

        assert_eq!(risk.region, None);
        assert!(!risk.in_coverage());
        assert_score(risk.wildfire.score(), 3.0);
        assert_score(risk.flood.score(), 3.0);
        assert_score(risk.earthquake.score(), 3.0);
        assert_score(risk.hurricane.score(), 1.5);
        for hazard in Hazard::all() {
            let score = risk.score(*hazard);
            assert_eq!(score.level(), RiskLevel::Low);
            assert_eq!(score.factors(), [scorers::OUT_OF_COVERAGE_FACTOR.to_string()]);
        }
        // 750000 * (0.0006 + 0.00045 + 0.0009) * 10 = 14625
        assert_eq!(risk.loss_estimate.unprotected, 14_625);
    }

    #[test]
    fn san_francisco_coastal_flood() {
        let risk = calculate_risks(Coordinate::new(-122.42, 37.77), &boundaries());

        assert_eq!(risk.region.as_deref(), Some("San Francisco"));
        assert_score(risk.flood.score(), 6.0);
        assert_eq!(risk.flood.level(), RiskLevel::Medium);
        assert!(
            risk.flood
                .factors()
                .iter()
                .any(|f| f == "Coastal location increases storm surge risk")
        );
        assert_score(risk.earthquake.score(), 9.5);
        assert_score(risk.hurricane.score(), 2.5);
    }

    #[test]
    fn sacramento_is_just_inland_of_the_flood_cutoff() {
        let risk = calculate_risks(Coordinate::new(-121.49, 38.58), &boundaries());

        assert_eq!(risk.region.as_deref(), Some("Sacramento"));
        assert_score(risk.flood.score(), 6.5);
        assert_score(risk.earthquake.score(), 4.2);
        assert_eq!(risk.earthquake.level(), RiskLevel::Medium);
    }

    #[test]
    fn boundary_without_statistics_uses_defaults_but_keeps_name() {
        let mut regions: Vec<RegionBoundary> = boundaries().iter().cloned().collect();
        let atlantis = RegionBoundary::new("Atlantis", regions[0].polygon().clone());
        regions.insert(0, atlantis);
        let boundaries = RegionBoundaries::new(regions);

        let risk = calculate_risks(Coordinate::new(-118.2437, 34.0522), &boundaries);
        assert_eq!(risk.region.as_deref(), Some("Atlantis"));
        assert_score(risk.earthquake.score(), 3.0);
        assert_eq!(
            risk.wildfire.factors(),
            [scorers::OUT_OF_COVERAGE_FACTOR.to_string()]
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let boundaries = boundaries();
        let engine = RiskEngine::embedded();
        let coordinate = Coordinate::new(-118.2437, 34.0522);
        assert_eq!(
            engine.calculate(coordinate, &boundaries),
            engine.calculate(coordinate, &boundaries)
        );
    }

    #[test]
    fn scores_agree_with_levels_everywhere() {
        let boundaries = boundaries();
        let engine = RiskEngine::embedded();

        for lng in (0..30).map(|i| -124.0 + f64::from(i) * 0.23) {
            for lat in (0..20).map(|i| 32.5 + f64::from(i) * 0.33) {
                let risk = engine.calculate(Coordinate::new(lng, lat), &boundaries);
                for hazard in Hazard::all() {
                    let score = risk.score(*hazard);
                    assert!((0.0..=10.0).contains(&score.score()));
                    assert_eq!(score.level(), RiskLevel::from_raw(score.raw()));
                    assert!(!score.factors().is_empty());
                }
                assert!(risk.earthquake.score() <= scorers::earthquake::SCORE_CEILING);
                assert!(risk.loss_estimate.with_protection <= risk.loss_estimate.unprotected);
            }
        }
    }

    #[test]
    fn assessment_bundles_plan_and_gaps() {
        let assessment = RiskEngine::embedded()
            .assess(Coordinate::new(-118.2437, 34.0522), &boundaries());

        assert_eq!(assessment.plan.len(), mitigation::ACTIONS.len());
        assert_eq!(assessment.coverage_gaps.len(), 4);
        let fault = assessment.nearest_fault.unwrap();
        assert!(fault.distance_miles < 10.0);
    }

    #[test]
    fn offshore_assessment_still_finds_a_fault() {
        let assessment =
            RiskEngine::embedded().assess(Coordinate::new(-130.0, 40.0), &boundaries());
        assert!(assessment.nearest_fault.is_some());
        assert_eq!(assessment.plan.len(), 5);
        assert_eq!(assessment.coverage_gaps.len(), 2);
    }
}
