//! County boundary set and the region resolver.
//!
//! Boundaries are loaded once from a `GeoJSON` `FeatureCollection` whose
//! features carry a `name` property and a `Polygon` or `MultiPolygon`
//! geometry. Resolution is a linear scan in data order: the first boundary
//! containing the point wins, so overlapping boundaries are settled by the
//! order of the source file.

use std::path::Path;

use geo::{BoundingRect, MultiPolygon, Point, Rect};
use geojson::GeoJson;
use hazard_map_hazard_models::Coordinate;

use crate::SpatialError;
use crate::geometry::{point_in_polygon, to_point};

/// One named region boundary.
#[derive(Debug, Clone)]
pub struct RegionBoundary {
    name: String,
    polygon: MultiPolygon<f64>,
    bounds: Option<Rect<f64>>,
}

impl RegionBoundary {
    /// Creates a boundary from a name and its (possibly multi-part) polygon.
    #[must_use]
    pub fn new(name: impl Into<String>, polygon: MultiPolygon<f64>) -> Self {
        let bounds = polygon.bounding_rect();
        Self {
            name: name.into(),
            polygon,
            bounds,
        }
    }

    /// Region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Boundary geometry.
    #[must_use]
    pub const fn polygon(&self) -> &MultiPolygon<f64> {
        &self.polygon
    }

    /// Whether this boundary contains `point`.
    ///
    /// Checks the bounding box first; points on the boundary itself are
    /// outside.
    #[must_use]
    pub fn contains(&self, point: &Point<f64>) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        let (min, max) = (bounds.min(), bounds.max());
        if point.x() < min.x || point.x() > max.x || point.y() < min.y || point.y() > max.y {
            return false;
        }
        point_in_polygon(point, &self.polygon)
    }
}

/// The full set of region boundaries, in data order.
///
/// Holding one of these is the precondition for resolving regions: it can
/// only be built from already-loaded geometry.
#[derive(Debug, Clone, Default)]
pub struct RegionBoundaries {
    regions: Vec<RegionBoundary>,
}

impl RegionBoundaries {
    /// Wraps already-built boundaries, keeping their order.
    #[must_use]
    pub const fn new(regions: Vec<RegionBoundary>) -> Self {
        Self { regions }
    }

    /// Parses a `GeoJSON` `FeatureCollection`.
    ///
    /// Features without a non-empty `name` property or without polygonal
    /// geometry are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not `GeoJSON`, is not a
    /// `FeatureCollection`, or contains no usable region.
    pub fn from_geojson_str(text: &str) -> Result<Self, SpatialError> {
        let geojson: GeoJson = text.parse()?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(SpatialError::NotFeatureCollection);
        };

        let total = collection.features.len();
        let mut regions = Vec::with_capacity(total);

        for (index, feature) in collection.features.into_iter().enumerate() {
            let name = feature
                .property("name")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string);

            let Some(name) = name else {
                log::warn!("Skipping boundary feature {index}: missing name");
                continue;
            };

            let Some(polygon) = feature.geometry.and_then(geometry_to_multipolygon) else {
                log::warn!("Skipping boundary feature {name}: not a Polygon or MultiPolygon");
                continue;
            };

            regions.push(RegionBoundary::new(name, polygon));
        }

        if regions.is_empty() {
            return Err(SpatialError::NoRegions);
        }

        log::info!(
            "Loaded {} region boundaries ({} features skipped)",
            regions.len(),
            total - regions.len()
        );

        Ok(Self { regions })
    }

    /// Reads and parses a `GeoJSON` boundary file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or
    /// [`Self::from_geojson_str`] fails.
    pub fn from_path(path: &Path) -> Result<Self, SpatialError> {
        log::info!("Loading region boundaries from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&text)
    }

    /// Returns the first region (in data order) whose boundary contains the
    /// coordinate, or `None` if none does.
    #[must_use]
    pub fn resolve(&self, coordinate: Coordinate) -> Option<&RegionBoundary> {
        let point = to_point(coordinate);
        let found = self.regions.iter().find(|r| r.contains(&point));

        log::debug!(
            "Resolved ({}, {}) to {}",
            coordinate.longitude,
            coordinate.latitude,
            found.map_or("<none>", RegionBoundary::name)
        );

        found
    }

    /// Iterates boundaries in data order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RegionBoundary> {
        self.regions.iter()
    }

    /// Number of boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the set is empty. An empty set resolves every coordinate to
    /// `None`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Resolves a coordinate to the first containing region.
///
/// Free-function form of [`RegionBoundaries::resolve`].
#[must_use]
pub fn resolve_region(
    coordinate: Coordinate,
    boundaries: &RegionBoundaries,
) -> Option<&RegionBoundary> {
    boundaries.resolve(coordinate)
}

/// Converts a `GeoJSON` geometry into a [`MultiPolygon`].
/// Handles both `Polygon` and `MultiPolygon` geometry types.
fn geometry_to_multipolygon(geometry: geojson::Geometry) -> Option<MultiPolygon<f64>> {
    let geo_geom: geo::Geometry<f64> = geometry.try_into().ok()?;
    match geo_geom {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}
