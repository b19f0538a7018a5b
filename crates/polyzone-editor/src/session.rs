//! Editing session facade.
//!
//! Owns the editor, the interaction controller, the buffer zone, and the
//! layout store, and exposes the host-UI command surface: create shapes
//! into the buffer, save the layout, reset it, and hand drag payloads
//! from the buffer into the work zone.

use anyhow::Result;
use tracing::info;

use crate::editor::{Editor, EditorConfig};
use crate::generator::ShapeBuffer;
use crate::interaction::{CursorStyle, InteractionController, PointerEvent};
use crate::persistence::{self, LayoutStore};

/// A complete editing session bound to a layout store.
#[derive(Debug)]
pub struct EditorSession<S: LayoutStore> {
    editor: Editor,
    controller: InteractionController,
    buffer: ShapeBuffer,
    store: S,
}

impl<S: LayoutStore> EditorSession<S> {
    /// Creates a session and loads any previously saved layout.
    pub fn new(store: S, width: f64, height: f64) -> Self {
        Self::with_config(store, EditorConfig::default(), width, height)
    }

    /// Creates a session with explicit editor configuration.
    pub fn with_config(store: S, config: EditorConfig, width: f64, height: f64) -> Self {
        let mut session = Self {
            editor: Editor::with_config(config, width, height),
            controller: InteractionController::new(),
            buffer: ShapeBuffer::new(),
            store,
        };
        session.load_on_start();
        session
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn buffer(&self) -> &ShapeBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> CursorStyle {
        self.controller.cursor()
    }

    /// Loads the saved layout, or starts empty when nothing is stored.
    pub fn load_on_start(&mut self) {
        persistence::load_layout(&self.store, &mut self.editor);
        info!(shapes = self.editor.shape_count(), "layout loaded");
    }

    /// Host command: generate `count` random polygons into the buffer.
    pub fn create_shapes(&mut self, count: usize) {
        self.buffer.create_polygons(count);
        info!(count, "buffer populated");
    }

    /// Host command: persist the current layout.
    pub fn save(&mut self) -> Result<()> {
        persistence::save_layout(&mut self.store, &self.editor)?;
        info!(shapes = self.editor.shape_count(), "layout saved");
        Ok(())
    }

    /// Host command: delete the saved layout and clear the work zone.
    pub fn reset(&mut self) -> Result<()> {
        persistence::reset_layout(&mut self.store, &mut self.editor)?;
        info!("layout reset");
        Ok(())
    }

    /// Completes a drag from the buffer: removes the buffered polygon and
    /// drops it onto the work zone at the given screen position.
    pub fn drop_from_buffer(&mut self, index: usize, screen_x: f64, screen_y: f64) -> Option<u64> {
        let payload = self.buffer.take(index)?;
        self.editor.drop_payload(&payload, screen_x, screen_y)
    }

    /// Handles a raw drop payload (external drag sources). Empty payloads
    /// are a no-op.
    pub fn drop_payload(&mut self, payload: &str, screen_x: f64, screen_y: f64) -> Option<u64> {
        self.editor.drop_payload(payload, screen_x, screen_y)
    }

    /// Feeds a pointer event through the interaction controller. Returns
    /// `true` when a re-render is needed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.controller.handle(&mut self.editor, event)
    }
}
