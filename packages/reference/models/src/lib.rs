#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reference data definition types.
//!
//! Defines the TOML schema for per-region hazard statistics and the fault
//! catalogue. These are the shapes of the static configuration files; the
//! runtime representations (with parsed geometry and derived numerics)
//! live in `hazard_map_reference`.

use hazard_map_hazard_models::BaseStatistics;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Top-level shape of the region statistics file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionStatisticsFile {
    /// One entry per region, in data order.
    pub regions: Vec<RegionStatistics>,
}

/// Base hazard statistics for a single region (county).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStatistics {
    /// Region name as it appears in the boundary data's `name` property
    /// (e.g. "Los Angeles", without a "County" suffix).
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

impl RegionStatistics {
    /// Returns the four priors as a [`BaseStatistics`] value.
    #[must_use]
    pub const fn stats(&self) -> BaseStatistics {
        BaseStatistics {
            wildfire: self.wildfire,
            flood: self.flood,
            earthquake: self.earthquake,
            hurricane: self.hurricane,
        }
    }
}

/// Top-level shape of the fault catalogue file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultCatalogueFile {
    /// Faults in catalogue order.
    pub faults: Vec<FaultDefinition>,
}

/// A fault line as written in the catalogue file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultDefinition {
    /// Fault name (e.g. "San Andreas Fault").
    pub name: String,
    /// Descriptive slip rate (e.g. "20-35 mm/yr").
    pub slip_rate: String,
    /// Nominal slip rate in mm/yr as published alongside the description.
    #[serde(default)]
    pub slip_rate_mm: Option<f64>,
    /// Most recent major event (e.g. "1868 M6.8").
    #[serde(default)]
    pub last_major: Option<String>,
    /// Descriptive rupture probability (e.g. "33% M6.7+ by 2044").
    /// Absent means "Unknown".
    #[serde(default)]
    pub probability: Option<String>,
    /// Mapped length in kilometers.
    #[serde(default)]
    pub length_km: Option<f64>,
    /// Display tier.
    pub significance: FaultSignificance,
    /// Surface trace as `[longitude, latitude]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// Display importance of a fault. Not used for scoring.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FaultSignificance {
    /// Slip rate above ~8 mm/yr or high rupture probability
    Major,
    /// Slip rate roughly 3-8 mm/yr
    Moderate,
    /// Slip rate below ~3 mm/yr, shorter traces
    Minor,
}
