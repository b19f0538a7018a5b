//! Grid layer construction.
//!
//! The grid is a pure function of the current viewport: lines land on
//! world-coordinate multiples of the spacing, converted to screen space
//! through the viewport transform, while the axis bands and their border
//! lines are fixed screen-space chrome along the bottom and left edges.

use serde::Serialize;

use polyzone_core::constants;

use crate::viewport::Viewport;

/// Upper bound on grid lines per direction; a runaway spacing/zoom
/// combination degrades to a truncated grid instead of hanging.
const MAX_LINES: usize = 100_000;

/// A single grid line at a world-coordinate multiple of the spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    /// World coordinate the line sits on.
    pub world: f64,
    /// Screen coordinate of the line (x for vertical lines, y for
    /// horizontal lines).
    pub screen: f64,
}

/// A screen-space rectangle (axis background band).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A screen-space line segment (axis border).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A coordinate label anchored in screen space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to draw the grid layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridLayer {
    pub vertical_lines: Vec<GridLine>,
    pub horizontal_lines: Vec<GridLine>,
    pub bands: Vec<ScreenRect>,
    pub axes: Vec<AxisLine>,
    pub labels: Vec<GridLabel>,
}

/// Builds the grid layer for a viewport.
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    spacing: f64,
}

impl GridRenderer {
    pub fn new(spacing: f64) -> Self {
        Self { spacing }
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Produces the draw primitives for the current viewport state.
    ///
    /// Line positions run from `floor(visible_min / spacing) * spacing` to
    /// `ceil(visible_max / spacing) * spacing` inclusive. Labels on the
    /// horizontal axis render only for non-negative world coordinates; the
    /// vertical axis carries no such restriction.
    pub fn render(&self, viewport: &Viewport) -> GridLayer {
        let width = viewport.canvas_width();
        let height = viewport.canvas_height();
        if width <= 0.0 || height <= 0.0 || self.spacing <= 0.0 {
            return GridLayer::default();
        }

        let visible = viewport.visible_world();
        let mut layer = GridLayer::default();

        let start_x = (visible.min_x / self.spacing).floor() * self.spacing;
        let end_x = (visible.max_x / self.spacing).ceil() * self.spacing;
        let mut x = start_x;
        while x <= end_x && layer.vertical_lines.len() < MAX_LINES {
            let (screen_x, _) = viewport.world_to_screen(x, 0.0);
            layer.vertical_lines.push(GridLine {
                world: x,
                screen: screen_x,
            });
            x += self.spacing;
        }

        let start_y = (visible.min_y / self.spacing).floor() * self.spacing;
        let end_y = (visible.max_y / self.spacing).ceil() * self.spacing;
        let mut y = start_y;
        while y <= end_y && layer.horizontal_lines.len() < MAX_LINES {
            let (_, screen_y) = viewport.world_to_screen(0.0, y);
            layer.horizontal_lines.push(GridLine {
                world: y,
                screen: screen_y,
            });
            y += self.spacing;
        }

        // Axis chrome: bottom band for the horizontal axis, left band for
        // the vertical axis, each with a border line.
        layer.bands.push(ScreenRect {
            x: 0.0,
            y: height - constants::X_AXIS_BAND_HEIGHT,
            width,
            height: constants::X_AXIS_BAND_HEIGHT,
        });
        layer.bands.push(ScreenRect {
            x: 0.0,
            y: 0.0,
            width: constants::Y_AXIS_BAND_WIDTH,
            height,
        });
        layer.axes.push(AxisLine {
            x1: 0.0,
            y1: height - 0.5,
            x2: width,
            y2: height - 0.5,
        });
        layer.axes.push(AxisLine {
            x1: constants::Y_AXIS_BAND_WIDTH,
            y1: 0.0,
            x2: constants::Y_AXIS_BAND_WIDTH,
            y2: height,
        });

        // Horizontal-axis labels skip negative world coordinates.
        for line in &layer.vertical_lines {
            if line.world < 0.0 {
                continue;
            }
            layer.labels.push(GridLabel {
                text: format!("{}", line.world.round() as i64),
                x: line.screen + 2.0,
                y: height - 5.0,
            });
        }

        for line in &layer.horizontal_lines {
            layer.labels.push(GridLabel {
                text: format!("{}", line.world.round() as i64),
                x: 2.0,
                y: line.screen - 2.0,
            });
        }

        layer
    }

    /// Builds a grid layer for an arbitrary pixel size, leaving the
    /// viewport untouched.
    pub fn render_sized(&self, viewport: &Viewport, width: f64, height: f64) -> GridLayer {
        let mut sized = viewport.clone();
        sized.set_canvas_size(width, height);
        self.render(&sized)
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(constants::GRID_SPACING)
    }
}
