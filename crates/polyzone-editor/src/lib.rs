//! # Polyzone Editor
//!
//! The work-zone editor core: a pannable, zoomable canvas that polygons
//! are dragged onto, repositioned on, and persisted from.
//!
//! ## Core Components
//!
//! - **Viewport**: screen/world coordinate mapping under one composable
//!   pan+zoom transform, with cursor-anchored zoom and fit-to-bounds
//! - **Grid**: pure viewport-to-draw-primitives grid construction
//! - **Shapes**: polygon model and the ordered, hit-testable shape store
//! - **Interaction**: the pointer state machine dispatching pan, zoom,
//!   and drag, mutually exclusive
//! - **Generator**: buffer-zone random convex polygon production
//! - **Persistence**: the JSON layout format behind a key-value seam
//! - **SVG Renderer**: serialization of the grid and shape layers
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (host commands: create / save / reset)
//!   ├── Editor
//!   │     ├── ShapeStore (polygons, draw order, hit-testing)
//!   │     ├── Viewport (pan/zoom state)
//!   │     └── GridRenderer (grid layer)
//!   ├── InteractionController (pointer state machine)
//!   ├── ShapeBuffer (buffer zone)
//!   └── LayoutStore (persistence seam)
//! ```
//!
//! Everything is synchronous and single-threaded: events are handled to
//! completion, and state is owned by exactly one editor instance.

pub mod editor;
pub mod generator;
pub mod grid;
pub mod interaction;
pub mod persistence;
pub mod session;
pub mod shape_store;
pub mod shapes;
pub mod svg_renderer;
pub mod viewport;

pub use editor::{Editor, EditorConfig};
pub use generator::{random_polygon_points, ShapeBuffer};
pub use grid::{GridLayer, GridLine, GridRenderer};
pub use interaction::{CursorStyle, InteractionController, PointerEvent, PointerState};
pub use persistence::{FileStore, LayoutStore, MemoryStore};
pub use session::EditorSession;
pub use shape_store::ShapeStore;
pub use shapes::PolygonShape;
pub use viewport::{PanPolicy, Viewport};
