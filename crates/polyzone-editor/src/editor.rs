//! The work-zone editor: shapes plus the viewport they are viewed through.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use polyzone_core::constants;
use polyzone_core::error::GeometryError;
use polyzone_core::geometry::{self, Bounds, Point};

use crate::grid::{GridLayer, GridRenderer};
use crate::shape_store::ShapeStore;
use crate::shapes::PolygonShape;
use crate::viewport::{PanPolicy, Viewport};

/// Constructor-supplied editor configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_spacing: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub hit_tolerance: f64,
    pub pan_policy: PanPolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_spacing: constants::GRID_SPACING,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            zoom_step: constants::ZOOM_STEP,
            hit_tolerance: constants::HIT_TOLERANCE,
            pan_policy: PanPolicy::default(),
        }
    }
}

/// Editor state managing shapes and the viewport.
#[derive(Debug, Clone)]
pub struct Editor {
    store: ShapeStore,
    viewport: Viewport,
    grid: GridRenderer,
    config: EditorConfig,
}

impl Editor {
    /// Creates an editor with the given surface dimensions and default
    /// configuration.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(EditorConfig::default(), width, height)
    }

    /// Creates an editor with explicit configuration.
    pub fn with_config(config: EditorConfig, width: f64, height: f64) -> Self {
        let viewport = Viewport::new(width, height)
            .with_zoom_limits(config.min_zoom, config.max_zoom, config.zoom_step)
            .with_pan_policy(config.pan_policy);
        Self {
            store: ShapeStore::new(),
            viewport,
            grid: GridRenderer::new(config.grid_spacing),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Gets a reference to the viewport for coordinate transformations.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Gets a mutable reference to the viewport.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ShapeStore {
        &mut self.store
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    /// Iterates shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &PolygonShape> {
        self.store.iter()
    }

    /// Converts screen coordinates to world coordinates.
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        self.viewport.screen_to_world(screen_x, screen_y)
    }

    /// Converts world coordinates to screen coordinates.
    pub fn world_to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        self.viewport.world_to_screen(world_x, world_y)
    }

    /// Sets the rendering surface dimensions.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
    }

    /// Pans by a screen-space delta, clamped per the configured policy.
    pub fn pan_by(&mut self, screen_dx: f64, screen_dy: f64) {
        self.viewport.pan_by(screen_dx, screen_dy);
    }

    /// Wheel zoom anchored at the given screen position.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, delta_y: f64) {
        self.viewport.zoom_at(screen_x, screen_y, delta_y);
    }

    /// Inserts a polygon from world-coordinate points.
    pub fn insert_polygon(
        &mut self,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<u64, GeometryError> {
        self.store.insert(points)
    }

    /// Inserts a polygon centered on a world position.
    pub fn insert_centered(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        target: Point,
    ) -> Result<u64, GeometryError> {
        self.store.insert_centered(points, target)
    }

    /// Handles an external drop of a point-string payload at a screen
    /// position. An empty or malformed payload is a no-op: the entry is
    /// dropped locally, never propagated as an error.
    pub fn drop_payload(&mut self, payload: &str, screen_x: f64, screen_y: f64) -> Option<u64> {
        if payload.trim().is_empty() {
            return None;
        }

        let points = match geometry::parse_points(payload) {
            Ok(points) => points,
            Err(err) => {
                warn!(payload, %err, "ignoring malformed drop payload");
                return None;
            }
        };

        let target = self.screen_to_world(screen_x, screen_y);
        match self.store.insert_centered(points, target) {
            Ok(id) => {
                debug!(id, x = target.x, y = target.y, "inserted dropped polygon");
                Some(id)
            }
            Err(err) => {
                warn!(payload, %err, "ignoring degenerate drop payload");
                None
            }
        }
    }

    /// Resolves which shape a world position targets, using the configured
    /// hit tolerance.
    pub fn hit_test(&self, world: &Point) -> Option<u64> {
        self.store.hit_test(world, self.config.hit_tolerance)
    }

    /// Shifts a shape by a world delta.
    pub fn translate_shape(&mut self, id: u64, dx: f64, dy: f64) {
        self.store.translate(id, dx, dy);
    }

    /// Centroid of a shape (drag anchor).
    pub fn centroid_of(&self, id: u64) -> Option<Point> {
        self.store.centroid_of(id)
    }

    /// Union bounding box over all shapes.
    pub fn bounding_box_all(&self) -> Option<Bounds> {
        self.store.bounding_box_all()
    }

    /// Fits the viewport to show all shapes with the default padding.
    /// No-op when the canvas is empty: the viewport state is unchanged.
    pub fn fit_all_shapes(&mut self) {
        if let Some(bounds) = self.store.bounding_box_all() {
            self.viewport.fit_to_view(&bounds);
        }
    }

    /// Builds the grid layer for the current viewport.
    pub fn grid_layer(&self) -> GridLayer {
        self.grid.render(&self.viewport)
    }

    /// Removes all shapes.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Replaces all shapes from point-strings, dropping malformed entries.
    pub fn load(&mut self, point_strings: &[String]) {
        self.store.load(point_strings);
    }

    /// Serializes every shape to the point-string boundary format.
    pub fn export_all(&self) -> Vec<String> {
        self.store.export_all()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(900.0, 600.0)
    }
}
