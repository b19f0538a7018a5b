//! # Polyzone
//!
//! A pan/zoom polygon layout editor core:
//! - Buffer zone generating random convex polygons as drag payloads
//! - Work zone with a pannable, zoomable, grid-backed canvas
//! - Drag-to-canvas placement and pointer-driven repositioning
//! - Layout persistence as a JSON array of point-strings
//!
//! ## Architecture
//!
//! Polyzone is organized as a workspace with multiple crates:
//!
//! 1. **polyzone-core** - Geometry primitives, error taxonomy, constants
//! 2. **polyzone-editor** - Viewport, grid, shapes, interaction, persistence
//! 3. **polyzone** - Shell crate: logging setup and the demo driver
//!
//! The editor core is headless: pointer and wheel events arrive through a
//! normalized event enum, and rendering is exposed as draw primitives that
//! an adapter (the bundled SVG renderer, for instance) serializes.

pub use polyzone_core::{
    centroid, format_points, parse_points, Bounds, Error, GeometryError, Point, Result,
    StorageError,
};

pub use polyzone_editor::{
    random_polygon_points, CursorStyle, Editor, EditorConfig, EditorSession, FileStore, GridLayer,
    GridRenderer, InteractionController, LayoutStore, MemoryStore, PanPolicy, PointerEvent,
    PointerState, PolygonShape, ShapeBuffer, ShapeStore, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
