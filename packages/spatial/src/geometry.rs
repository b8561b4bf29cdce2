//! Pure geometry primitives over WGS84 longitude/latitude degrees.
//!
//! Distances use a spherical-earth (haversine) model, which is accurate to
//! well under a percent at the county scale this engine works at.

use geo::{Closest, ClosestPoint, Contains, Distance, Haversine, LineString, MultiPolygon, Point};
use hazard_map_hazard_models::Coordinate;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Converts a [`Coordinate`] into a `geo` point (`x` = longitude).
#[must_use]
pub fn to_point(coordinate: Coordinate) -> Point<f64> {
    Point::new(coordinate.longitude, coordinate.latitude)
}

/// Whether `point` lies inside any part of `polygon`.
///
/// Holes are respected. A point exactly on an exterior or interior ring is
/// treated as outside.
#[must_use]
pub fn point_in_polygon(point: &Point<f64>, polygon: &MultiPolygon<f64>) -> bool {
    polygon.contains(point)
}

/// Great-circle distance between two points in miles.
#[must_use]
pub fn distance_miles(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / METERS_PER_MILE
}

/// Finds the point on `polyline` closest to `point` and its distance in
/// miles.
///
/// Each segment is projected onto in degree space, then candidates are
/// compared by great-circle distance. Zero-length segments contribute their
/// start vertex. Returns `None` when the polyline has no segments (fewer
/// than two vertices) or every candidate distance is non-finite.
#[must_use]
pub fn nearest_point_on_polyline(
    point: &Point<f64>,
    polyline: &LineString<f64>,
) -> Option<(Point<f64>, f64)> {
    let mut best: Option<(Point<f64>, f64)> = None;

    for segment in polyline.lines() {
        let candidate = match segment.closest_point(point) {
            Closest::Intersection(p) | Closest::SinglePoint(p) => p,
            Closest::Indeterminate => Point::from(segment.start),
        };

        let distance = distance_miles(*point, candidate);
        if !distance.is_finite() {
            continue;
        }

        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Polygon, polygon};

    fn square(min_x: f64, min_y: f64, size: f64) -> Polygon<f64> {
        polygon![
            (x: min_x, y: min_y),
            (x: min_x + size, y: min_y),
            (x: min_x + size, y: min_y + size),
            (x: min_x, y: min_y + size),
            (x: min_x, y: min_y),
        ]
    }

    #[test]
    fn contains_point_in_any_part() {
        let parts = MultiPolygon(vec![square(-120.0, 34.0, 1.0), square(-118.0, 34.0, 1.0)]);

        assert!(point_in_polygon(&Point::new(-119.5, 34.5), &parts));
        assert!(point_in_polygon(&Point::new(-117.5, 34.5), &parts));
        assert!(!point_in_polygon(&Point::new(-118.5, 34.5), &parts));
        assert!(!point_in_polygon(&Point::new(-119.5, 36.0), &parts));
    }

    #[test]
    fn excludes_points_in_holes() {
        let exterior = LineString::from(vec![
            (-120.0, 34.0),
            (-116.0, 34.0),
            (-116.0, 38.0),
            (-120.0, 38.0),
            (-120.0, 34.0),
        ]);
        let hole = LineString::from(vec![
            (-119.0, 35.0),
            (-117.0, 35.0),
            (-117.0, 37.0),
            (-119.0, 37.0),
            (-119.0, 35.0),
        ]);
        let donut = MultiPolygon(vec![Polygon::new(exterior, vec![hole])]);

        assert!(!point_in_polygon(&Point::new(-118.0, 36.0), &donut));
        assert!(point_in_polygon(&Point::new(-119.5, 36.0), &donut));
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_miles(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!((d - 69.1).abs() < 0.1, "got {d}");
    }

    #[test]
    fn los_angeles_to_san_francisco() {
        let la = Point::new(-118.2437, 34.0522);
        let sf = Point::new(-122.4194, 37.7749);
        let d = distance_miles(la, sf);
        assert!((340.0..355.0).contains(&d), "got {d}");
        assert!((d - distance_miles(sf, la)).abs() < 1e-9);
    }

    #[test]
    fn zero_distance_to_self() {
        let p = Point::new(-121.5, 38.5);
        assert!(distance_miles(p, p).abs() < f64::EPSILON);
    }

    #[test]
    fn projects_onto_segment_interior() {
        let line = LineString::from(vec![(-118.0, 34.0), (-117.0, 34.0)]);
        let (closest, distance) =
            nearest_point_on_polyline(&Point::new(-117.5, 34.1), &line).unwrap();

        assert!((closest.x() + 117.5).abs() < 1e-9);
        assert!((closest.y() - 34.0).abs() < 1e-9);
        assert!((distance - 6.9).abs() < 0.1, "got {distance}");
    }

    #[test]
    fn clamps_to_endpoint() {
        let line = LineString::from(vec![(-118.0, 34.0), (-117.0, 34.0)]);
        let (closest, _) = nearest_point_on_polyline(&Point::new(-116.0, 34.0), &line).unwrap();
        assert_eq!(closest.0, Coord { x: -117.0, y: 34.0 });
    }

    #[test]
    fn picks_global_minimum_across_segments() {
        let line = LineString::from(vec![(-120.0, 34.0), (-119.0, 34.0), (-119.0, 36.0)]);
        let (closest, _) = nearest_point_on_polyline(&Point::new(-118.9, 35.5), &line).unwrap();
        assert!((closest.x() + 119.0).abs() < 1e-9);
        assert!((closest.y() - 35.5).abs() < 1e-9);
    }

    #[test]
    fn zero_length_segment_uses_vertex() {
        let line = LineString::from(vec![(-118.0, 34.0), (-118.0, 34.0)]);
        let (closest, distance) =
            nearest_point_on_polyline(&Point::new(-118.0, 34.5), &line).unwrap();

        assert_eq!(closest.0, Coord { x: -118.0, y: 34.0 });
        assert!((distance - 34.5).abs() < 0.1, "got {distance}");
    }

    #[test]
    fn no_segments_yields_none() {
        let single = LineString::from(vec![(-118.0, 34.0)]);
        assert!(nearest_point_on_polyline(&Point::new(-118.0, 34.5), &single).is_none());

        let empty: LineString<f64> = LineString::new(vec![]);
        assert!(nearest_point_on_polyline(&Point::new(-118.0, 34.5), &empty).is_none());
    }

    #[test]
    fn non_finite_query_yields_none() {
        let line = LineString::from(vec![(-118.0, 34.0), (-117.0, 34.0)]);
        assert!(nearest_point_on_polyline(&Point::new(f64::NAN, 34.0), &line).is_none());
    }

    #[test]
    fn coordinate_maps_longitude_to_x() {
        let p = to_point(Coordinate::new(-118.2, 34.0));
        assert!((p.x() + 118.2).abs() < f64::EPSILON);
        assert!((p.y() - 34.0).abs() < f64::EPSILON);
    }
}
