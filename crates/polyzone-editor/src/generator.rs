//! Buffer-zone polygon generation.
//!
//! The buffer zone holds freshly generated convex polygons as drag
//! payloads. Vertices are sampled uniformly and sorted by angle around
//! their centroid, which yields a convex, non-self-intersecting vertex
//! order.

use std::cmp::Ordering;

use rand::Rng;

use polyzone_core::geometry::{self, Point};

/// Coordinate range for generated vertices.
const COORD_RANGE: f64 = 100.0;

/// Generates one random convex polygon as a drag payload string.
pub fn random_polygon_points() -> String {
    random_polygon_points_with(&mut rand::rng())
}

/// Deterministic variant for tests: generates a polygon from the supplied
/// RNG.
pub fn random_polygon_points_with<R: Rng>(rng: &mut R) -> String {
    let n: usize = rng.random_range(3..=7);

    let mut points: Vec<Point> = (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(0.0..COORD_RANGE),
                rng.random_range(0.0..COORD_RANGE),
            )
        })
        .collect();

    sort_by_centroid_angle(&mut points);
    geometry::format_points(&points)
}

/// Orders vertices counterclockwise around their centroid so the polygon
/// outline has no crossing edges.
pub fn sort_by_centroid_angle(points: &mut [Point]) {
    let Some(center) = geometry::centroid(points) else {
        return;
    };
    points.sort_by(|a, b| {
        let angle_a = (a.y - center.y).atan2(a.x - center.x);
        let angle_b = (b.y - center.y).atan2(b.x - center.x);
        angle_a.partial_cmp(&angle_b).unwrap_or(Ordering::Equal)
    });
}

/// The buffer zone: generated polygons waiting to be dragged onto the
/// work zone.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuffer {
    entries: Vec<String>,
}

impl ShapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer contents with `count` fresh polygons.
    pub fn create_polygons(&mut self, count: usize) {
        self.entries = (0..count).map(|_| random_polygon_points()).collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Drag payload for the buffered polygon at `index`.
    pub fn payload(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Removes and returns the buffered polygon at `index`, completing a
    /// drag hand-off.
    pub fn take(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
