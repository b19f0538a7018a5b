//! Shared layout constants.
//!
//! Editor defaults live here so the editor, grid, and host shell agree on
//! one set of values. All lengths are world units unless noted.

/// Grid line spacing in world units.
pub const GRID_SPACING: f64 = 50.0;

/// Minimum viewport zoom (10%).
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum viewport zoom (1000%).
pub const MAX_ZOOM: f64 = 10.0;

/// Multiplicative step applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Fraction of the viewport reserved as margin by fit-to-view.
pub const VIEW_PADDING: f64 = 0.2;

/// World-distance tolerance for vertex hit-testing (one grid cell).
pub const HIT_TOLERANCE: f64 = 50.0;

/// Key the saved layout is stored under.
pub const LAYOUT_KEY: &str = "polygons";

/// Height of the horizontal axis band in pixels.
pub const X_AXIS_BAND_HEIGHT: f64 = 20.0;

/// Width of the vertical axis band in pixels.
pub const Y_AXIS_BAND_WIDTH: f64 = 40.0;
