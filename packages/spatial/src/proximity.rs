//! Nearest-polyline search.
//!
//! A plain linear scan over every polyline. Items whose geometry has no
//! segments are skipped rather than treated as errors.

use geo::{LineString, Point};
use hazard_map_hazard_models::Coordinate;

use crate::geometry::{nearest_point_on_polyline, to_point};

/// The polyline closest to a query coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPolyline<'a, T> {
    /// The winning item.
    pub item: &'a T,
    /// Closest point on the item's polyline.
    pub point: Point<f64>,
    /// Unrounded great-circle distance in miles.
    pub distance_miles: f64,
}

/// Finds the item whose polyline passes closest to `coordinate`.
///
/// Ties on exactly equal distance go to the item that appears first.
/// Returns `None` when `items` is empty or no item has a usable polyline.
#[must_use]
pub fn nearest_polyline<T: AsRef<LineString<f64>>>(
    coordinate: Coordinate,
    items: &[T],
) -> Option<NearestPolyline<'_, T>> {
    let query = to_point(coordinate);
    let mut best: Option<NearestPolyline<'_, T>> = None;

    for item in items {
        let Some((point, distance_miles)) = nearest_point_on_polyline(&query, item.as_ref()) else {
            continue;
        };

        if best
            .as_ref()
            .is_none_or(|current| distance_miles < current.distance_miles)
        {
            best = Some(NearestPolyline {
                item,
                point,
                distance_miles,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Trace {
        name: &'static str,
        line: LineString<f64>,
    }

    impl AsRef<LineString<f64>> for Trace {
        fn as_ref(&self) -> &LineString<f64> {
            &self.line
        }
    }

    fn trace(name: &'static str, coords: Vec<(f64, f64)>) -> Trace {
        Trace {
            name,
            line: LineString::from(coords),
        }
    }

    fn sample() -> Vec<Trace> {
        vec![
            trace("west", vec![(-121.0, 34.0), (-121.0, 36.0)]),
            trace("middle", vec![(-119.0, 34.0), (-119.0, 36.0)]),
            trace("stub", vec![(-118.5, 35.0)]),
            trace("east", vec![(-117.0, 34.0), (-117.0, 36.0)]),
        ]
    }

    #[test]
    fn finds_closest_trace() {
        let traces = sample();
        let nearest = nearest_polyline(Coordinate::new(-118.6, 35.0), &traces).unwrap();
        assert_eq!(nearest.item.name, "middle");
        assert!(nearest.distance_miles > 0.0);
    }

    #[test]
    fn skips_degenerate_geometry() {
        let traces = sample();
        // Sitting right on the one-vertex stub must not select it.
        let nearest = nearest_polyline(Coordinate::new(-118.5, 35.0), &traces).unwrap();
        assert_eq!(nearest.item.name, "middle");
    }

    #[test]
    fn order_independent() {
        let traces = sample();
        let coordinate = Coordinate::new(-117.4, 35.2);
        let forward = nearest_polyline(coordinate, &traces).unwrap();

        let mut reversed = sample();
        reversed.reverse();
        let backward = nearest_polyline(coordinate, &reversed).unwrap();

        assert_eq!(forward.item.name, backward.item.name);
        assert!((forward.distance_miles - backward.distance_miles).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_tie_goes_to_first() {
        let traces = vec![
            trace("a", vec![(-119.0, 34.0), (-119.0, 36.0)]),
            trace("b", vec![(-119.0, 34.0), (-119.0, 36.0)]),
        ];
        let nearest = nearest_polyline(Coordinate::new(-118.0, 35.0), &traces).unwrap();
        assert_eq!(nearest.item.name, "a");
    }

    #[test]
    fn empty_input_is_none() {
        let traces: Vec<Trace> = Vec::new();
        assert!(nearest_polyline(Coordinate::new(-118.0, 35.0), &traces).is_none());

        let only_stub = vec![trace("stub", vec![(-118.0, 35.0)])];
        assert!(nearest_polyline(Coordinate::new(-118.0, 35.0), &only_stub).is_none());
    }
}
