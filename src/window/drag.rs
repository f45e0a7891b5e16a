use super::{Point, WindowManager, clamp_position};

#[derive(Debug)]
struct DragSession {
    id: String,
    /// Pointer offset from the window origin at grab time, so the window
    /// does not jump to the cursor.
    offset: Point,
}

/// Tracks at most one header-drag session and keeps the dragged window
/// inside the viewport.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id.as_str())
    }

    pub fn start_drag(&mut self, windows: &mut WindowManager, id: &str, pointer: Point) {
        let Some(frame) = windows.frame(id) else {
            tracing::debug!(app = id, "drag start on unknown or hidden window");
            return;
        };
        windows.focus_window(id);
        self.session = Some(DragSession {
            id: id.to_string(),
            offset: Point::new(pointer.x - frame.x, pointer.y - frame.y),
        });
    }

    /// Moves the dragged window to follow the pointer, clamping each axis
    /// independently to `[0, viewport - size]`.
    pub fn on_pointer_move(&mut self, windows: &mut WindowManager, pointer: Point) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(win) = windows.window(&session.id) else {
            self.session = None;
            return;
        };
        let raw = Point::new(pointer.x - session.offset.x, pointer.y - session.offset.y);
        let clamped = clamp_position(raw, win.size, windows.viewport());
        windows.set_window_position(&session.id, clamped);
    }

    /// Safe to call with no session in flight.
    pub fn stop_drag(&mut self) {
        self.session = None;
    }
}
