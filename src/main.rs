use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use polyzone::{init_logging, EditorSession, FileStore, PointerEvent};

/// Headless demo driver: builds a session against a file-backed store,
/// fills the buffer zone, drops the polygons onto the work zone, pans and
/// zooms a little, then saves the layout and writes an SVG snapshot.
fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    info!(
        version = polyzone::VERSION,
        built = polyzone::BUILD_DATE,
        "polyzone demo starting"
    );

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("polyzone-data"));

    let store = FileStore::new(&data_dir)?;
    let mut session = EditorSession::new(store, 900.0, 600.0);

    // Fill the buffer zone and drop everything onto the canvas in a row.
    session.create_shapes(5);
    let mut screen_x = 150.0;
    while !session.buffer().is_empty() {
        let _ = session.drop_from_buffer(0, screen_x, 300.0);
        screen_x += 150.0;
    }

    // Exercise the pointer path: pan left a bit, then zoom in at center.
    session.handle_pointer(PointerEvent::Down { x: 450.0, y: 550.0 });
    session.handle_pointer(PointerEvent::Move { x: 430.0, y: 550.0 });
    session.handle_pointer(PointerEvent::Up);
    session.handle_pointer(PointerEvent::Wheel {
        x: 450.0,
        y: 300.0,
        delta_y: -1.0,
    });

    session.editor_mut().fit_all_shapes();
    session.save()?;

    let svg = polyzone_editor::svg_renderer::render_document(session.editor());
    let svg_path = data_dir.join("layout.svg");
    std::fs::write(&svg_path, svg)
        .with_context(|| format!("Failed to write {}", svg_path.display()))?;

    info!(
        shapes = session.editor().shape_count(),
        viewport = %session.editor().viewport(),
        svg = %svg_path.display(),
        "demo finished"
    );

    Ok(())
}
