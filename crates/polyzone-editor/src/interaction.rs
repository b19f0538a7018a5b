//! Pointer interaction state machine.
//!
//! Normalized pointer and wheel events come in through [`PointerEvent`];
//! the controller dispatches them to panning, zooming, or shape dragging,
//! mutually exclusive. No event source is assumed, so the whole machine is
//! testable headless.
//!
//! ```text
//! Idle --down(empty)--> Panning --move--> Panning --up/leave--> Idle
//! Idle --down(shape)--> DraggingShape --move--> DraggingShape --up/leave--> Idle
//! Idle --wheel--> Idle   (stateless zoom)
//! ```
//!
//! A pointer-down while a session is active is ignored; there are no
//! nested sessions.

use tracing::debug;

use polyzone_core::geometry::Point;

use crate::editor::Editor;

/// A normalized pointer/wheel event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Wheel { x: f64, y: f64, delta_y: f64 },
}

/// Cursor affordance the host surface should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Grab,
    Grabbing,
}

/// Current interaction session. At most one session is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    /// Pan session: last pointer position in screen coordinates.
    Panning { last_x: f64, last_y: f64 },
    /// Drag session: target shape and the world-space offset between the
    /// pointer and the shape's centroid, fixed at grab time.
    DraggingShape { id: u64, grab_dx: f64, grab_dy: f64 },
}

/// Dispatches pointer events to the editor.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: PointerState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: PointerState::Idle,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == PointerState::Idle
    }

    /// Cursor the host should show for the current state.
    pub fn cursor(&self) -> CursorStyle {
        match self.state {
            PointerState::Idle => CursorStyle::Grab,
            _ => CursorStyle::Grabbing,
        }
    }

    /// Feeds one event through the state machine. Returns `true` when the
    /// scene changed and a re-render is needed.
    pub fn handle(&mut self, editor: &mut Editor, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y } => self.on_down(editor, x, y),
            PointerEvent::Move { x, y } => self.on_move(editor, x, y),
            PointerEvent::Up | PointerEvent::Leave => self.on_release(),
            PointerEvent::Wheel { x, y, delta_y } => self.on_wheel(editor, x, y, delta_y),
        }
    }

    fn on_down(&mut self, editor: &mut Editor, x: f64, y: f64) -> bool {
        if self.state != PointerState::Idle {
            // No nested sessions.
            return false;
        }

        let world = editor.screen_to_world(x, y);
        if let Some(id) = editor.hit_test(&world) {
            // A shape-targeted pointer-down suppresses pan-start.
            let anchor = editor.centroid_of(id).unwrap_or(world);
            self.state = PointerState::DraggingShape {
                id,
                grab_dx: world.x - anchor.x,
                grab_dy: world.y - anchor.y,
            };
            debug!(id, "drag session started");
        } else {
            self.state = PointerState::Panning { last_x: x, last_y: y };
            debug!("pan session started");
        }
        false
    }

    fn on_move(&mut self, editor: &mut Editor, x: f64, y: f64) -> bool {
        match self.state {
            PointerState::Idle => false,
            PointerState::Panning { last_x, last_y } => {
                editor.pan_by(x - last_x, y - last_y);
                self.state = PointerState::Panning { last_x: x, last_y: y };
                true
            }
            PointerState::DraggingShape { id, grab_dx, grab_dy } => {
                let world = editor.screen_to_world(x, y);
                let anchor = Point::new(world.x - grab_dx, world.y - grab_dy);
                let Some(centroid) = editor.centroid_of(id) else {
                    // Shape vanished mid-drag; release the session.
                    self.state = PointerState::Idle;
                    return false;
                };
                editor.translate_shape(id, anchor.x - centroid.x, anchor.y - centroid.y);
                true
            }
        }
    }

    fn on_release(&mut self) -> bool {
        if self.state != PointerState::Idle {
            debug!("session released");
            self.state = PointerState::Idle;
        }
        false
    }

    fn on_wheel(&mut self, editor: &mut Editor, x: f64, y: f64, delta_y: f64) -> bool {
        // Zoom is stateless and only applies outside pan/drag sessions.
        if self.state != PointerState::Idle {
            return false;
        }
        editor.zoom_at(x, y, delta_y);
        true
    }
}
