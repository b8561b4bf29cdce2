#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static reference data for the risk engine.
//!
//! Per-county hazard priors and the California fault catalogue are embedded
//! at compile time from the TOML files in `packages/reference/data/` and
//! parsed once into an immutable [`ReferenceData`]. Nothing in this crate
//! is mutated after construction; [`ReferenceData::embedded`] hands out a
//! process-wide shared instance.

pub mod faults;
pub mod regions;

use std::sync::LazyLock;

use hazard_map_reference_models::{FaultCatalogueFile, RegionStatisticsFile};
use thiserror::Error;

pub use faults::{FaultCatalogue, FaultLine, parse_probability, parse_slip_rate};
pub use regions::RegionTable;

/// Embedded per-county statistics.
const COUNTIES_TOML: &str = include_str!("../data/counties.toml");

/// Embedded fault catalogue.
const FAULTS_TOML: &str = include_str!("../data/faults.toml");

static EMBEDDED: LazyLock<ReferenceData> = LazyLock::new(|| {
    ReferenceData::from_toml_strs(COUNTIES_TOML, FAULTS_TOML)
        .unwrap_or_else(|e| panic!("Failed to load embedded reference data: {e}"))
});

/// Errors that can occur while loading reference data.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// TOML parsing failed.
    #[error("TOML error in {file}: {source}")]
    Toml {
        /// Which file failed to parse.
        file: &'static str,
        /// Underlying parse error.
        source: toml::de::Error,
    },

    /// Two regions share a name.
    #[error("Duplicate region name: {name}")]
    DuplicateRegion {
        /// The repeated name.
        name: String,
    },

    /// A statistic is outside the 0-100 range.
    #[error("Statistic out of range for {region}: {value} (expected 0-100)")]
    StatisticOutOfRange {
        /// Region carrying the bad value.
        region: String,
        /// The offending value.
        value: u8,
    },

    /// A region or fault has an empty name.
    #[error("Empty {kind} name at index {index}")]
    EmptyName {
        /// "region" or "fault".
        kind: &'static str,
        /// Position in the file.
        index: usize,
    },
}

/// All static reference data the engine reads.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    regions: RegionTable,
    faults: FaultCatalogue,
}

impl ReferenceData {
    /// Returns the reference data embedded in the binary.
    ///
    /// Parsed on first access and shared for the rest of the process.
    ///
    /// # Panics
    ///
    /// Panics if an embedded TOML file is malformed. Since these are
    /// compile-time constants, a failure indicates a development error and
    /// is caught by the tests in this crate.
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Parses reference data from TOML sources.
    ///
    /// # Errors
    ///
    /// Returns an error if either document fails to parse or violates a
    /// data invariant (duplicate region, empty name, prior above 100).
    pub fn from_toml_strs(regions_toml: &str, faults_toml: &str) -> Result<Self, ReferenceError> {
        let regions: RegionStatisticsFile =
            toml::de::from_str(regions_toml).map_err(|source| ReferenceError::Toml {
                file: "regions",
                source,
            })?;
        let faults: FaultCatalogueFile =
            toml::de::from_str(faults_toml).map_err(|source| ReferenceError::Toml {
                file: "faults",
                source,
            })?;

        let data = Self {
            regions: RegionTable::new(regions.regions)?,
            faults: FaultCatalogue::new(faults.faults)?,
        };

        log::info!(
            "Loaded reference data: {} regions, {} faults",
            data.regions.len(),
            data.faults.len()
        );

        Ok(data)
    }

    /// Builds reference data from already-constructed parts.
    #[must_use]
    pub const fn new(regions: RegionTable, faults: FaultCatalogue) -> Self {
        Self { regions, faults }
    }

    /// Per-region base statistics.
    #[must_use]
    pub const fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// The fault catalogue.
    #[must_use]
    pub const fn faults(&self) -> &FaultCatalogue {
        &self.faults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of California counties.
    const EXPECTED_REGION_COUNT: usize = 58;

    /// Number of catalogued faults.
    const EXPECTED_FAULT_COUNT: usize = 17;

    #[test]
    fn loads_embedded_data() {
        let data = ReferenceData::embedded();
        assert_eq!(data.regions().len(), EXPECTED_REGION_COUNT);
        assert_eq!(data.faults().len(), EXPECTED_FAULT_COUNT);
    }

    #[test]
    fn embedded_is_shared() {
        assert!(std::ptr::eq(
            ReferenceData::embedded(),
            ReferenceData::embedded()
        ));
    }

    #[test]
    fn all_faults_have_usable_traces() {
        for fault in ReferenceData::embedded().faults().iter() {
            assert!(
                fault.trace().0.len() >= 2,
                "fault {} has fewer than two vertices",
                fault.name()
            );
        }
    }

    #[test]
    fn rejects_duplicate_regions() {
        let regions = r#"
            [[regions]]
            name = "Alpine"
            wildfire = 70
            flood = 35
            earthquake = 50
            hurricane = 10

            [[regions]]
            name = "Alpine"
            wildfire = 1
            flood = 1
            earthquake = 1
            hurricane = 1
        "#;
        let err = ReferenceData::from_toml_strs(regions, "faults = []").unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateRegion { name } if name == "Alpine"));
    }

    #[test]
    fn rejects_out_of_range_statistic() {
        let regions = r#"
            [[regions]]
            name = "Alpine"
            wildfire = 170
            flood = 35
            earthquake = 50
            hurricane = 10
        "#;
        let err = ReferenceData::from_toml_strs(regions, "faults = []").unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::StatisticOutOfRange { value: 170, .. }
        ));
    }

    #[test]
    fn reports_which_file_failed() {
        let err = ReferenceData::from_toml_strs("regions = []", "faults = 7").unwrap_err();
        assert!(matches!(err, ReferenceError::Toml { file: "faults", .. }));
    }

    #[test]
    fn empty_catalogues_are_valid() {
        let data = ReferenceData::from_toml_strs("regions = []", "faults = []").unwrap();
        assert!(data.regions().is_empty());
        assert!(data.faults().is_empty());
    }
}
