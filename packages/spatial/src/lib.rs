#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry primitives and boundary attribution for the risk engine.
//!
//! Loads county boundary polygons from a `GeoJSON` `FeatureCollection`,
//! resolves coordinates to the first containing county by linear scan, and
//! finds the nearest polyline (fault trace) to a coordinate. All lookups are
//! read-only over data loaded once, so a loaded [`RegionBoundaries`] can be
//! shared freely across threads.

pub mod boundaries;
pub mod geometry;
pub mod proximity;

use thiserror::Error;

pub use boundaries::{RegionBoundaries, RegionBoundary, resolve_region};
pub use geometry::{distance_miles, nearest_point_on_polyline, point_in_polygon, to_point};
pub use proximity::{NearestPolyline, nearest_polyline};

/// Errors that can occur while loading boundary data.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// Reading the boundary file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The document parsed but is not a `FeatureCollection`.
    #[error("Expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    /// No feature had both a `name` and a polygonal geometry.
    #[error("No usable region boundaries found")]
    NoRegions,
}
