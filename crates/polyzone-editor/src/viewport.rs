//! Viewport and coordinate transformation for the work zone.
//!
//! Handles conversion between screen coordinates (pixels, origin top-left)
//! and world coordinates (polygon space). Manages zoom and pan operations
//! with proper coordinate mapping.
//!
//! One transform convention is canonical for the lifetime of an editor
//! instance:
//!
//! ```text
//! screen = (world + offset) * scale
//! world  = screen / scale - offset
//! ```
//!
//! `offset` is a world-space translation applied before scaling. Centering
//! operations (`center_on`, `fit_to_bounds`) update the same state instead
//! of switching to a separate center-based mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use polyzone_core::constants;
use polyzone_core::geometry::{Bounds, Point};

/// Policy applied to the pan offset after each pan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanPolicy {
    /// Never pan into positive offsets: the world origin stays at or
    /// left/above the screen origin, so negative world coordinates never
    /// scroll into view through panning.
    #[default]
    ClampNonPositive,
    /// Unrestricted panning.
    Free,
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
    pan_policy: PanPolicy,
}

impl Viewport {
    /// Creates a new viewport at 1:1 scale with no offset.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            canvas_width,
            canvas_height,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            zoom_step: constants::ZOOM_STEP,
            pan_policy: PanPolicy::default(),
        }
    }

    /// Overrides the zoom bounds and wheel step.
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64, zoom_step: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom_step = zoom_step;
        self
    }

    /// Overrides the pan clamp policy.
    pub fn with_pan_policy(mut self, policy: PanPolicy) -> Self {
        self.pan_policy = policy;
        self
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the surface resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gets the pan offset (X component, world units).
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Gets the pan offset (Y component, world units).
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Sets the pan offset directly, bypassing the pan policy.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Gets the configured pan policy.
    pub fn pan_policy(&self) -> PanPolicy {
        self.pan_policy
    }

    /// Sets the zoom level, silently clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.scale = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Zooms in by one wheel step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.scale * self.zoom_step);
    }

    /// Zooms out by one wheel step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.scale / self.zoom_step);
    }

    /// Converts screen coordinates to world coordinates.
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            screen_x / self.scale - self.offset_x,
            screen_y / self.scale - self.offset_y,
        )
    }

    /// Converts world coordinates to screen coordinates.
    pub fn world_to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            (world_x + self.offset_x) * self.scale,
            (world_y + self.offset_y) * self.scale,
        )
    }

    /// Converts a world point to screen coordinates.
    pub fn world_point_to_screen(&self, point: &Point) -> (f64, f64) {
        self.world_to_screen(point.x, point.y)
    }

    /// Zooms by one step toward or away from the given screen position,
    /// keeping the world point under the cursor fixed on screen.
    ///
    /// `delta_y` follows wheel conventions: negative zooms in.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, delta_y: f64) {
        let anchor = self.screen_to_world(screen_x, screen_y);

        if delta_y < 0.0 {
            self.set_zoom(self.scale * self.zoom_step);
        } else {
            self.set_zoom(self.scale / self.zoom_step);
        }

        // Keep `anchor` under the cursor:
        // screen = (anchor + offset') * scale'  =>  offset' = screen / scale' - anchor
        self.offset_x = screen_x / self.scale - anchor.x;
        self.offset_y = screen_y / self.scale - anchor.y;
    }

    /// Zooms in, keeping the given screen position fixed.
    pub fn zoom_in_at(&mut self, screen_x: f64, screen_y: f64) {
        self.zoom_at(screen_x, screen_y, -1.0);
    }

    /// Zooms out, keeping the given screen position fixed.
    pub fn zoom_out_at(&mut self, screen_x: f64, screen_y: f64) {
        self.zoom_at(screen_x, screen_y, 1.0);
    }

    /// Pans by a screen-space delta. The offset moves by `delta / scale`
    /// and is then clamped per the configured policy.
    pub fn pan_by(&mut self, screen_dx: f64, screen_dy: f64) {
        self.offset_x += screen_dx / self.scale;
        self.offset_y += screen_dy / self.scale;

        if self.pan_policy == PanPolicy::ClampNonPositive {
            self.offset_x = self.offset_x.min(0.0);
            self.offset_y = self.offset_y.min(0.0);
        }
    }

    /// Fits the given world bounds into the viewport.
    ///
    /// `margin` is the fraction of each viewport dimension reserved as
    /// padding (0.2 leaves 80% for content). Sets the scale so the bounds
    /// fit both dimensions and centers the bounds on screen. Degenerate
    /// bounds or a non-positive viewport leave the state untouched, never
    /// producing a NaN or infinite scale.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, margin: f64) {
        if bounds.is_degenerate() || self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return;
        }

        let usable = 1.0 - margin;
        let zoom_x = self.canvas_width * usable / bounds.width();
        let zoom_y = self.canvas_height * usable / bounds.height();
        self.set_zoom(zoom_x.min(zoom_y));

        self.center_on_point(&bounds.center());
    }

    /// Fits the viewport to the given bounds with the default view padding.
    pub fn fit_to_view(&mut self, bounds: &Bounds) {
        self.fit_to_bounds(bounds, constants::VIEW_PADDING);
    }

    /// Centers the viewport on a world coordinate at the current zoom.
    pub fn center_on(&mut self, world_x: f64, world_y: f64) {
        // screen_center = (world + offset) * scale  =>  offset = screen_center / scale - world
        self.offset_x = self.canvas_width / 2.0 / self.scale - world_x;
        self.offset_y = self.canvas_height / 2.0 / self.scale - world_y;
    }

    /// Centers the viewport on a point.
    pub fn center_on_point(&mut self, point: &Point) {
        self.center_on(point.x, point.y);
    }

    /// Returns the SVG group transform for the shape layer.
    ///
    /// The translation components are pre-multiplied by the scale so the
    /// rendered result matches `world_to_screen`: SVG applies the rightmost
    /// operation first, so `p -> scale * p + offset * scale`.
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.offset_x * self.scale,
            self.offset_y * self.scale,
            self.scale
        )
    }

    /// World-coordinate range currently visible on screen.
    ///
    /// Returns the bounds spanned by the four viewport corners.
    pub fn visible_world(&self) -> Bounds {
        let top_left = self.screen_to_world(0.0, 0.0);
        let bottom_right = self.screen_to_world(self.canvas_width, self.canvas_height);
        Bounds::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Resets viewport to its initial state (1:1 zoom, no offset).
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Offset: ({:.1}, {:.1})",
            self.scale, self.offset_x, self.offset_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(900.0, 600.0)
    }
}
