#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hazard taxonomy, risk score, and loss estimate types.
//!
//! This crate defines the result shapes produced by the risk engine for a
//! single coordinate query. Every type here is a plain value: created fresh
//! per query, never mutated afterwards, and free of any identity beyond the
//! query that produced it.

pub mod mitigation;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A WGS84 position in degrees.
///
/// No range validation is performed. Coordinates outside California are a
/// defined case (they resolve to no region), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (negative west of Greenwich).
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from a `(longitude, latitude)` pair.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Whether both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// The natural hazard categories the engine scores.
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
pub enum Hazard {
    /// Wildland fire
    Wildfire,
    /// Riverine and coastal flooding
    Flood,
    /// Ground shaking from fault rupture
    Earthquake,
    /// Hurricanes and tropical storm remnants
    Hurricane,
}

impl Hazard {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Wildfire,
            Self::Flood,
            Self::Earthquake,
            Self::Hurricane,
        ]
    }
}

/// Qualitative three-band classification of a risk score.
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
pub enum RiskLevel {
    /// Raw score below 40
    Low,
    /// Raw score from 40 up to (not including) 70
    Medium,
    /// Raw score of 70 or more
    High,
}

impl RiskLevel {
    /// Raw (0-100) score at which a hazard becomes [`RiskLevel::Medium`].
    pub const MEDIUM_THRESHOLD: f64 = 40.0;
    /// Raw (0-100) score at which a hazard becomes [`RiskLevel::High`].
    pub const HIGH_THRESHOLD: f64 = 70.0;

    /// Classifies a raw score on the 0-100 scale.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        if raw >= Self::HIGH_THRESHOLD {
            Self::High
        } else if raw >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Per-region prior scores (0-100) for each hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStatistics {
    /// Wildfire prior.
    pub wildfire: u8,
    /// Flood prior.
    pub flood: u8,
    /// Earthquake prior.
    pub earthquake: u8,
    /// Hurricane prior.
    pub hurricane: u8,
}

impl BaseStatistics {
    /// Returns the prior for a single hazard.
    #[must_use]
    pub const fn get(&self, hazard: Hazard) -> u8 {
        match hazard {
            Hazard::Wildfire => self.wildfire,
            Hazard::Flood => self.flood,
            Hazard::Earthquake => self.earthquake,
            Hazard::Hurricane => self.hurricane,
        }
    }
}

/// Scored exposure to one hazard.
///
/// Only constructible from a raw 0-100 value, so the public 0-10 `score`
/// and the `level` can never disagree with each other: the level is always
/// the threshold function of the clamped raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    score: f64,
    level: RiskLevel,
    factors: Vec<String>,
    source: String,
    #[serde(skip)]
    raw: f64,
}

impl RiskScore {
    /// Builds a score from a raw value on the 0-100 scale.
    ///
    /// The raw value is clamped to `[0, 100]`, the level is derived from the
    /// clamped value, and the public score is `raw / 10` rounded to one
    /// decimal.
    #[must_use]
    pub fn from_raw(raw: f64, factors: Vec<String>, source: impl Into<String>) -> Self {
        Self::from_raw_with_ceiling(raw, 10.0, factors, source)
    }

    /// Like [`RiskScore::from_raw`], additionally capping the scaled 0-10
    /// value at `ceiling` before rounding.
    #[must_use]
    pub fn from_raw_with_ceiling(
        raw: f64,
        ceiling: f64,
        factors: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        debug_assert!(!factors.is_empty(), "risk factors must not be empty");

        let raw = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 100.0) };
        let scaled = (raw / 100.0 * 10.0).min(ceiling.clamp(0.0, 10.0));

        Self {
            score: round_tenths(scaled),
            level: RiskLevel::from_raw(raw),
            factors,
            source: source.into(),
            raw,
        }
    }

    /// Score on the public 0-10 scale, one decimal of precision.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Qualitative band derived from the raw value.
    #[must_use]
    pub const fn level(&self) -> RiskLevel {
        self.level
    }

    /// Explanatory factors, most specific first. Never empty.
    #[must_use]
    pub fn factors(&self) -> &[String] {
        &self.factors
    }

    /// Data source attribution.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The clamped 0-100 value the score and level were derived from.
    #[must_use]
    pub const fn raw(&self) -> f64 {
        self.raw
    }
}

/// Projected 10-year financial loss for an average home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossEstimate {
    /// Loss with no mitigation in place.
    pub unprotected: u32,
    /// Loss after recommended mitigation. Never exceeds `unprotected`.
    pub with_protection: u32,
}

impl LossEstimate {
    /// Amount saved by mitigating.
    #[must_use]
    pub const fn savings(&self) -> u32 {
        self.unprotected.saturating_sub(self.with_protection)
    }
}

/// Full result of one risk query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskData {
    /// Wildfire exposure.
    pub wildfire: RiskScore,
    /// Flood exposure.
    pub flood: RiskScore,
    /// Earthquake exposure.
    pub earthquake: RiskScore,
    /// Hurricane exposure.
    pub hurricane: RiskScore,
    /// Projected loss derived from the wildfire, flood, and earthquake scores.
    pub loss_estimate: LossEstimate,
    /// Resolved region name, `None` when the coordinate is outside every
    /// known boundary.
    pub region: Option<String>,
}

impl RiskData {
    /// Returns the score for a single hazard.
    #[must_use]
    pub const fn score(&self, hazard: Hazard) -> &RiskScore {
        match hazard {
            Hazard::Wildfire => &self.wildfire,
            Hazard::Flood => &self.flood,
            Hazard::Earthquake => &self.earthquake,
            Hazard::Hurricane => &self.hurricane,
        }
    }

    /// Whether the coordinate resolved to a known region.
    #[must_use]
    pub const fn in_coverage(&self) -> bool {
        self.region.is_some()
    }
}

/// Rounds to one decimal place, half away from zero.
#[must_use]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
