//! Polygon shape model for the work zone.

use smallvec::SmallVec;

use polyzone_core::error::GeometryError;
use polyzone_core::geometry::{self, Bounds, Point};

/// Vertex storage: generated polygons have 3-7 vertices, so small shapes
/// stay inline.
pub type VertexList = SmallVec<[Point; 8]>;

/// A closed polygon on the canvas.
///
/// Vertex order defines edge connectivity; the last vertex implicitly
/// connects back to the first. Points are world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    id: u64,
    points: VertexList,
}

impl PolygonShape {
    /// Creates a polygon from world-coordinate vertices.
    ///
    /// Rejects fewer than three vertices; everything else (collinear,
    /// duplicate points) is accepted and handled downstream as degenerate
    /// geometry.
    pub fn new(id: u64, points: impl IntoIterator<Item = Point>) -> Result<Self, GeometryError> {
        let points: VertexList = points.into_iter().collect();
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: points.len(),
            });
        }
        Ok(Self { id, points })
    }

    /// Parses a polygon from the `"x1,y1 x2,y2 ..."` payload format.
    pub fn parse(id: u64, payload: &str) -> Result<Self, GeometryError> {
        Self::new(id, geometry::parse_points(payload)?)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Axis-aligned bounding box.
    pub fn bounding_box(&self) -> Bounds {
        // points is never empty (>= 3 vertices by construction)
        Bounds::of_points(&self.points).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Mean of the vertices; the drag anchor when repositioning.
    pub fn centroid(&self) -> Point {
        geometry::centroid(&self.points).unwrap_or_default()
    }

    /// Shifts every vertex by the same delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in self.points.iter_mut() {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Index and distance of the vertex nearest to `target`.
    pub fn nearest_vertex(&self, target: &Point) -> (usize, f64) {
        let mut best_index = 0;
        let mut best_dist = f64::INFINITY;
        for (i, p) in self.points.iter().enumerate() {
            let dist = p.distance_to(target);
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
            }
        }
        (best_index, best_dist)
    }

    /// Serializes back to the point-string boundary format.
    pub fn to_point_string(&self) -> String {
        geometry::format_points(&self.points)
    }
}
