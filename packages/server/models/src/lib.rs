#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the hazard map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the engine types to allow independent evolution of the API
//! contract.

use hazard_map_hazard_models::RiskData;
use hazard_map_hazard_models::mitigation::MitigationPlan;
use hazard_map_reference_models::{FaultDefinition, FaultSignificance, RegionStatistics};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
    /// Number of loaded region boundaries.
    pub regions: usize,
    /// Number of catalogued faults.
    pub faults: usize,
}

/// Query parameters for the risk endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RiskQueryParams {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

/// Summary of the fault closest to a queried location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNearestFault {
    /// Fault name.
    pub name: String,
    /// Distance in miles, one decimal.
    pub distance_miles: f64,
    /// Closest point on the trace as `[lng, lat]`.
    pub closest_point: [f64; 2],
    /// Rupture probability description.
    pub probability: String,
    /// Slip rate description.
    pub slip_rate: String,
    /// Significance tier.
    pub significance: FaultSignificance,
}

/// Response body of `GET /api/risk`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAssessment {
    /// Hazard scores, loss estimate, and region.
    #[serde(flatten)]
    pub risk: RiskData,
    /// Closest catalogued fault.
    pub nearest_fault: Option<ApiNearestFault>,
    /// Recommended actions by timeframe.
    pub mitigation_plan: MitigationPlan,
    /// Insurance coverage worth reviewing.
    pub coverage_gaps: Vec<String>,
}

/// A catalogued fault as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFault {
    /// Fault name.
    pub name: String,
    /// Slip rate description.
    pub slip_rate: String,
    /// Nominal slip rate in mm/yr.
    pub slip_rate_mm: Option<f64>,
    /// Last major rupture.
    pub last_major: Option<String>,
    /// Rupture probability description.
    pub probability: Option<String>,
    /// Trace length in kilometers.
    pub length_km: Option<f64>,
    /// Significance tier.
    pub significance: FaultSignificance,
    /// Trace vertices as `[lng, lat]`.
    pub coordinates: Vec<[f64; 2]>,
}

impl From<&FaultDefinition> for ApiFault {
    fn from(def: &FaultDefinition) -> Self {
        Self {
            name: def.name.clone(),
            slip_rate: def.slip_rate.clone(),
            slip_rate_mm: def.slip_rate_mm,
            last_major: def.last_major.clone(),
            probability: def.probability.clone(),
            length_km: def.length_km,
            significance: def.significance,
            coordinates: def.coordinates.clone(),
        }
    }
}

/// Base hazard statistics for one region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// Region name.
    pub name: String,
    /// Wildfire prior (0-100).
    pub wildfire: u8,
    /// Flood prior (0-100).
    pub flood: u8,
    /// Earthquake prior (0-100).
    pub earthquake: u8,
    /// Hurricane prior (0-100).
    pub hurricane: u8,
}

impl From<&RegionStatistics> for ApiRegion {
    fn from(region: &RegionStatistics) -> Self {
        Self {
            name: region.name.clone(),
            wildfire: region.wildfire,
            flood: region.flood,
            earthquake: region.earthquake,
            hurricane: region.hurricane,
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// Creates an error body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_map_hazard_models::{LossEstimate, RiskScore};

    fn score(raw: f64) -> RiskScore {
        RiskScore::from_raw(raw, vec!["factor".to_string()], "source")
    }

    #[test]
    fn assessment_flattens_risk_fields() {
        let assessment = ApiAssessment {
            risk: RiskData {
                wildfire: score(85.0),
                flood: score(45.0),
                earthquake: score(95.0),
                hurricane: score(40.0),
                loss_estimate: LossEstimate {
                    unprotected: 39_188,
                    with_protection: 13_716,
                },
                region: Some("Los Angeles".to_string()),
            },
            nearest_fault: None,
            mitigation_plan: MitigationPlan::default(),
            coverage_gaps: vec!["Smoke damage coverage".to_string()],
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["wildfire"]["score"], 8.5);
        assert_eq!(json["wildfire"]["level"], "high");
        assert_eq!(json["lossEstimate"]["withProtection"], 13_716);
        assert_eq!(json["region"], "Los Angeles");
        assert!(json["nearestFault"].is_null());
        assert!(json["mitigationPlan"]["immediate"].as_array().unwrap().is_empty());
        assert_eq!(json["coverageGaps"][0], "Smoke damage coverage");
    }

    #[test]
    fn fault_keeps_trace() {
        let def = FaultDefinition {
            name: "Hayward Fault".to_string(),
            slip_rate: "9 mm/yr".to_string(),
            slip_rate_mm: Some(9.0),
            last_major: Some("1868 M6.8".to_string()),
            probability: Some("33% M6.7+ by 2044".to_string()),
            length_km: Some(119.0),
            significance: FaultSignificance::Major,
            coordinates: vec![[-122.0, 37.5], [-122.3, 38.0]],
        };

        let json = serde_json::to_value(ApiFault::from(&def)).unwrap();
        assert_eq!(json["slipRateMm"], 9.0);
        assert_eq!(json["significance"], "major");
        assert_eq!(json["coordinates"][1][1], 38.0);
    }
}
