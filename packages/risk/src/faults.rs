//! Nearest-fault resolution.

use hazard_map_hazard_models::{Coordinate, round_tenths};
use hazard_map_reference::{FaultCatalogue, FaultLine};
use hazard_map_spatial::nearest_polyline;

/// The fault trace closest to a query coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestFault<'a> {
    /// The winning fault.
    pub fault: &'a FaultLine,
    /// Closest point on the fault trace.
    pub closest: Coordinate,
    /// Great-circle distance in miles, rounded to one decimal.
    pub distance_miles: f64,
}

/// Finds the fault whose trace passes closest to `coordinate`.
///
/// Faults are compared on unrounded distance; only the reported distance is
/// rounded. Returns `None` when the catalogue has no usable trace.
#[must_use]
pub fn nearest_fault(coordinate: Coordinate, catalogue: &FaultCatalogue) -> Option<NearestFault<'_>> {
    let nearest = nearest_polyline(coordinate, catalogue.as_slice())?;

    log::debug!(
        "Nearest fault to ({}, {}) is {} at {:.2} mi",
        coordinate.longitude,
        coordinate.latitude,
        nearest.item.name(),
        nearest.distance_miles
    );

    Some(NearestFault {
        fault: nearest.item,
        closest: Coordinate::new(nearest.point.x(), nearest.point.y()),
        distance_miles: round_tenths(nearest.distance_miles),
    })
}
