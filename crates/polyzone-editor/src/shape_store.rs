//! Ordered shape storage for the work zone.
//!
//! Draw order equals insertion order: the last inserted shape renders on
//! top. IDs are stable for the lifetime of the store and never reused.

use tracing::warn;

use polyzone_core::error::GeometryError;
use polyzone_core::geometry::{Bounds, Point};

use crate::shapes::PolygonShape;

/// The ordered collection of polygons on the canvas.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<PolygonShape>,
    next_id: u64,
}

impl ShapeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Appends a new shape; points are world coordinates.
    pub fn insert(
        &mut self,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<u64, GeometryError> {
        let id = self.generate_id();
        let shape = PolygonShape::new(id, points)?;
        self.shapes.push(shape);
        Ok(id)
    }

    /// Inserts raw points translated so their bounding-box center lands on
    /// `target`. Used for drop-to-canvas placement: the shape's visual
    /// center ends up under the cursor.
    pub fn insert_centered(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        target: Point,
    ) -> Result<u64, GeometryError> {
        let raw: Vec<Point> = points.into_iter().collect();
        let Some(bounds) = Bounds::of_points(&raw) else {
            return Err(GeometryError::TooFewVertices { count: 0 });
        };
        let center = bounds.center();
        let dx = target.x - center.x;
        let dy = target.y - center.y;
        self.insert(raw.into_iter().map(|p| p.translated(dx, dy)))
    }

    /// Gets a reference to a shape by ID.
    pub fn get(&self, id: u64) -> Option<&PolygonShape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Gets a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut PolygonShape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Shifts every vertex of the shape by the given world delta.
    /// No other shape is touched.
    pub fn translate(&mut self, id: u64, dx: f64, dy: f64) {
        if let Some(shape) = self.get_mut(id) {
            shape.translate(dx, dy);
        }
    }

    /// Centroid of a shape, used as the drag anchor.
    pub fn centroid_of(&self, id: u64) -> Option<Point> {
        self.get(id).map(|s| s.centroid())
    }

    /// Iterates shapes in draw order (bottom to top).
    pub fn iter(&self) -> impl Iterator<Item = &PolygonShape> {
        self.shapes.iter()
    }

    /// Resolves the shape a pointer interaction targets.
    ///
    /// Implemented semantics: nearest vertex across all shapes within
    /// `tolerance`, not point-in-polygon containment. Shapes are scanned
    /// topmost-first (reverse draw order) with a strict comparison so the
    /// topmost shape wins distance ties.
    pub fn hit_test(&self, world: &Point, tolerance: f64) -> Option<u64> {
        let mut best: Option<u64> = None;
        let mut best_dist = f64::INFINITY;

        for shape in self.shapes.iter().rev() {
            let (_, dist) = shape.nearest_vertex(world);
            if dist < best_dist {
                best_dist = dist;
                best = Some(shape.id());
            }
        }

        if best_dist <= tolerance {
            best
        } else {
            None
        }
    }

    /// Union bounding box over all shapes; `None` when the store is empty.
    pub fn bounding_box_all(&self) -> Option<Bounds> {
        self.shapes
            .iter()
            .map(|s| s.bounding_box())
            .reduce(|acc, b| acc.union(&b))
    }

    /// Removes all shapes. IDs are not reset.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replaces all shapes from point-strings. Malformed entries are
    /// dropped with a warning, never propagated.
    pub fn load(&mut self, point_strings: &[String]) {
        self.shapes.clear();
        for entry in point_strings {
            let id = self.generate_id();
            match PolygonShape::parse(id, entry) {
                Ok(shape) => self.shapes.push(shape),
                Err(err) => {
                    warn!(entry = %entry, %err, "dropping malformed polygon entry");
                }
            }
        }
    }

    /// Serializes every shape to the point-string boundary format, in draw
    /// order.
    pub fn export_all(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.to_point_string()).collect()
    }
}
