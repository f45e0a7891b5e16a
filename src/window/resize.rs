use super::{Bounds, Point, Size, WindowManager};
use crate::constants::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};

/// The eight grab zones around a window border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    fn moves_left_edge(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }
}

/// Computes the frame that results from dragging `handle` by `delta` from
/// the frame the gesture started on. Width and height clamp to
/// `[min, max]`; top/left handles shift the origin by exactly the clamped
/// size change so the opposite edge never moves.
pub fn apply_resize(
    start: Bounds,
    handle: ResizeHandle,
    delta: Point,
    min: Size,
    max: Size,
) -> Bounds {
    let mut width = start.width;
    let mut height = start.height;

    if handle.moves_left_edge() {
        width = start.width - delta.x;
    } else if handle.moves_right_edge() {
        width = start.width + delta.x;
    }
    if handle.moves_top_edge() {
        height = start.height - delta.y;
    } else if handle.moves_bottom_edge() {
        height = start.height + delta.y;
    }

    width = width.clamp(min.width, max.width);
    height = height.clamp(min.height, max.height);

    let x = if handle.moves_left_edge() {
        start.x + (start.width - width)
    } else {
        start.x
    };
    let y = if handle.moves_top_edge() {
        start.y + (start.height - height)
    } else {
        start.y
    };

    Bounds {
        x,
        y,
        width,
        height,
    }
}

#[derive(Debug)]
struct ResizeSession {
    id: String,
    handle: ResizeHandle,
    start: Bounds,
    pointer: Point,
}

/// Tracks at most one border-resize session. Movement is applied against
/// the frame captured at grab time, so out-of-range drags do not
/// accumulate error.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resizing(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id.as_str())
    }

    pub fn start_resize(
        &mut self,
        windows: &mut WindowManager,
        id: &str,
        handle: ResizeHandle,
        pointer: Point,
    ) {
        let Some(win) = windows.window(id) else {
            tracing::debug!(app = id, "resize start on unknown window");
            return;
        };
        if win.maximized {
            tracing::debug!(app = id, "resize ignored on maximized window");
            return;
        }
        let start = Bounds::from_parts(win.position, win.size);
        windows.focus_window(id);
        self.session = Some(ResizeSession {
            id: id.to_string(),
            handle,
            start,
            pointer,
        });
    }

    pub fn on_pointer_move(&mut self, windows: &mut WindowManager, pointer: Point) {
        let Some(session) = &self.session else {
            return;
        };
        if !windows.is_open(&session.id) {
            self.session = None;
            return;
        }
        let delta = Point::new(
            pointer.x - session.pointer.x,
            pointer.y - session.pointer.y,
        );
        let bounds = apply_resize(
            session.start,
            session.handle,
            delta,
            MIN_WINDOW_SIZE,
            MAX_WINDOW_SIZE,
        );
        windows.set_window_bounds(&session.id, bounds);
    }

    pub fn stop_resize(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size {
        width: 10,
        height: 4,
    };
    const MAX: Size = Size {
        width: 80,
        height: 30,
    };

    #[test]
    fn east_handle_grows_width_only() {
        let start = Bounds::new(5, 5, 20, 10);
        let out = apply_resize(start, ResizeHandle::Right, Point::new(6, 99), MIN, MAX);
        assert_eq!(out, Bounds::new(5, 5, 26, 10));
    }

    #[test]
    fn west_handle_keeps_right_edge_fixed() {
        let start = Bounds::new(10, 5, 20, 10);
        let out = apply_resize(start, ResizeHandle::Left, Point::new(4, 0), MIN, MAX);
        assert_eq!(out, Bounds::new(14, 5, 16, 10));
        assert_eq!(out.right(), start.right());
    }

    #[test]
    fn north_west_handle_anchors_bottom_right_corner() {
        let start = Bounds::new(12, 8, 30, 12);
        for delta in [
            Point::new(5, 3),
            Point::new(-7, -2),
            Point::new(100, 100),
            Point::new(-100, -100),
        ] {
            let out = apply_resize(start, ResizeHandle::TopLeft, delta, MIN, MAX);
            assert_eq!(out.right(), start.right(), "delta {delta:?}");
            assert_eq!(out.bottom(), start.bottom(), "delta {delta:?}");
        }
    }

    #[test]
    fn sizes_clamp_to_min_even_under_huge_drags() {
        let start = Bounds::new(12, 8, 30, 12);
        let out = apply_resize(start, ResizeHandle::TopLeft, Point::new(500, 500), MIN, MAX);
        assert_eq!(out.size(), MIN);
        // origin compensated by the clamped delta, not the raw one
        assert_eq!(out, Bounds::new(32, 16, 10, 4));
    }

    #[test]
    fn sizes_clamp_to_max() {
        let start = Bounds::new(2, 2, 30, 12);
        let out = apply_resize(
            start,
            ResizeHandle::BottomRight,
            Point::new(500, 500),
            MIN,
            MAX,
        );
        assert_eq!(out.size(), MAX);
        assert_eq!(out.position(), start.position());
    }

    #[test]
    fn vertical_only_handles_ignore_horizontal_motion() {
        let start = Bounds::new(5, 5, 20, 10);
        let out = apply_resize(start, ResizeHandle::Top, Point::new(42, -3), MIN, MAX);
        assert_eq!(out, Bounds::new(5, 2, 20, 13));
    }

    #[test]
    fn controller_applies_cumulative_motion_from_grab_frame() {
        let mut wm = WindowManager::new(Size::new(200, 60));
        wm.register_app("about", "About", Size::new(30, 12));
        wm.open_window("about");
        let start = wm.frame("about").unwrap();

        let mut resize = ResizeController::new();
        let grab = Point::new(start.right() - 1, start.bottom() - 1);
        resize.start_resize(&mut wm, "about", ResizeHandle::BottomRight, grab);
        assert_eq!(resize.resizing(), Some("about"));

        resize.on_pointer_move(&mut wm, Point::new(grab.x + 4, grab.y + 2));
        resize.on_pointer_move(&mut wm, Point::new(grab.x + 6, grab.y + 1));
        let win = wm.window("about").unwrap();
        assert_eq!(win.size, Size::new(36, 13));
        assert_eq!(win.position, start.position());
        resize.stop_resize();
        assert!(resize.resizing().is_none());
    }

    #[test]
    fn controller_refuses_maximized_windows() {
        let mut wm = WindowManager::new(Size::new(200, 60));
        wm.register_app("about", "About", Size::new(30, 12));
        wm.open_window("about");
        wm.toggle_maximize("about");
        let mut resize = ResizeController::new();
        resize.start_resize(&mut wm, "about", ResizeHandle::Right, Point::new(0, 0));
        assert!(resize.resizing().is_none());
    }
}
