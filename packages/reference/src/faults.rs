//! Fault catalogue with parsed traces and derived activity numerics.
//!
//! The catalogue file describes slip rate and rupture probability as
//! free-form strings ("12-25 mm/yr", "31% M6.7+ by 2044"). Numeric values
//! are derived from those strings once, at load time, with fixed fallbacks
//! when a string cannot be parsed.

use std::sync::LazyLock;

use geo::{Coord, LineString};
use hazard_map_reference_models::{FaultDefinition, FaultSignificance};
use regex::Regex;

use crate::ReferenceError;

/// Slip rate assumed when the description has no number in it.
pub const DEFAULT_SLIP_RATE_MM_PER_YR: f64 = 1.0;

/// Rupture probability assumed when the description has no percentage.
pub const DEFAULT_PROBABILITY_PERCENT: f64 = 10.0;

/// Probability label used when the catalogue gives none.
pub const UNKNOWN_PROBABILITY: &str = "Unknown";

/// A range such as `1.5-3`.
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)").expect("valid regex"));

/// The first bare number.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid regex"));

/// A number immediately followed by `%`.
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("valid regex"));

/// Parses a descriptive slip rate into mm/yr.
///
/// Ranges (`"20-35 mm/yr"`) average their endpoints, single values
/// (`"9 mm/yr"`) parse directly, and anything else falls back to
/// [`DEFAULT_SLIP_RATE_MM_PER_YR`].
#[must_use]
pub fn parse_slip_rate(description: &str) -> f64 {
    if let Some(caps) = RANGE_RE.captures(description) {
        let low = caps[1].parse::<f64>();
        let high = caps[2].parse::<f64>();
        if let (Ok(low), Ok(high)) = (low, high) {
            return (low + high) / 2.0;
        }
    }

    NUMBER_RE
        .captures(description)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_SLIP_RATE_MM_PER_YR)
}

/// Parses a descriptive rupture probability into a percentage.
///
/// Only a number followed by `%` counts (so the magnitude in
/// `"33% M6.7+ by 2044"` is ignored); anything else falls back to
/// [`DEFAULT_PROBABILITY_PERCENT`].
#[must_use]
pub fn parse_probability(description: &str) -> f64 {
    PERCENT_RE
        .captures(description)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_PROBABILITY_PERCENT)
}

/// A catalogued fault with its trace as a [`LineString`].
#[derive(Debug, Clone, PartialEq)]
pub struct FaultLine {
    definition: FaultDefinition,
    trace: LineString<f64>,
    slip_rate_mm_per_yr: f64,
    probability_percent: f64,
}

impl FaultLine {
    /// Builds a fault from its catalogue definition.
    #[must_use]
    pub fn new(definition: FaultDefinition) -> Self {
        let trace = LineString::new(
            definition
                .coordinates
                .iter()
                .map(|&[x, y]| Coord { x, y })
                .collect(),
        );
        let slip_rate_mm_per_yr = parse_slip_rate(&definition.slip_rate);
        let probability_percent = definition
            .probability
            .as_deref()
            .map_or(DEFAULT_PROBABILITY_PERCENT, parse_probability);

        Self {
            definition,
            trace,
            slip_rate_mm_per_yr,
            probability_percent,
        }
    }

    /// Fault name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Descriptive slip rate as catalogued.
    #[must_use]
    pub fn slip_rate(&self) -> &str {
        &self.definition.slip_rate
    }

    /// Slip rate in mm/yr parsed from [`Self::slip_rate`].
    #[must_use]
    pub const fn slip_rate_mm_per_yr(&self) -> f64 {
        self.slip_rate_mm_per_yr
    }

    /// Descriptive rupture probability, or `"Unknown"`.
    #[must_use]
    pub fn probability(&self) -> &str {
        self.definition
            .probability
            .as_deref()
            .unwrap_or(UNKNOWN_PROBABILITY)
    }

    /// Rupture probability in percent parsed from [`Self::probability`].
    #[must_use]
    pub const fn probability_percent(&self) -> f64 {
        self.probability_percent
    }

    /// Display tier.
    #[must_use]
    pub const fn significance(&self) -> FaultSignificance {
        self.definition.significance
    }

    /// Surface trace.
    #[must_use]
    pub const fn trace(&self) -> &LineString<f64> {
        &self.trace
    }

    /// The catalogue entry this fault was built from.
    #[must_use]
    pub const fn definition(&self) -> &FaultDefinition {
        &self.definition
    }
}

impl AsRef<LineString<f64>> for FaultLine {
    fn as_ref(&self) -> &LineString<f64> {
        &self.trace
    }
}

/// Faults in catalogue order.
#[derive(Debug, Clone, Default)]
pub struct FaultCatalogue {
    faults: Vec<FaultLine>,
}

impl FaultCatalogue {
    /// Builds the catalogue from file definitions.
    ///
    /// Faults with fewer than two vertices are kept (they are skipped by
    /// the nearest-fault search) but logged.
    ///
    /// # Errors
    ///
    /// Returns an error if a fault has an empty name.
    pub fn new(definitions: Vec<FaultDefinition>) -> Result<Self, ReferenceError> {
        let mut faults = Vec::with_capacity(definitions.len());

        for (index, definition) in definitions.into_iter().enumerate() {
            if definition.name.trim().is_empty() {
                return Err(ReferenceError::EmptyName {
                    kind: "fault",
                    index,
                });
            }
            if definition.coordinates.len() < 2 {
                log::warn!(
                    "Fault {} has {} vertices and will never match a proximity search",
                    definition.name,
                    definition.coordinates.len()
                );
            }
            faults.push(FaultLine::new(definition));
        }

        Ok(Self { faults })
    }

    /// All faults as a slice, in catalogue order.
    #[must_use]
    pub fn as_slice(&self) -> &[FaultLine] {
        &self.faults
    }

    /// Iterates faults in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &FaultLine> {
        self.faults.iter()
    }

    /// Fault names in catalogue order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.faults.iter().map(FaultLine::name).collect()
    }

    /// Looks up a fault by exact name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&FaultLine> {
        self.faults.iter().find(|f| f.name() == name)
    }

    /// Number of faults.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }
}
