pub mod decorator;
mod drag;
mod manager;
mod resize;

pub use drag::DragController;
pub use manager::{TaskbarEntry, WindowManager};
pub use resize::{ResizeController, ResizeHandle, apply_resize};

/// A point in desktop cell space. Signed so intermediate drag/resize math
/// can go negative before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Clamps a window origin so the window stays inside the viewport on each
/// axis independently. Windows larger than the viewport pin to 0.
pub fn clamp_position(position: Point, size: Size, viewport: Size) -> Point {
    let max_x = (viewport.width - size.width).max(0);
    let max_y = (viewport.height - size.height).max(0);
    Point {
        x: position.x.clamp(0, max_x),
        y: position.y.clamp(0, max_y),
    }
}

/// Per-window state tracked by the manager. Position/size describe the
/// floating frame; a maximized window keeps them as its restore target.
#[derive(Debug, Clone)]
pub struct WindowState {
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
    pub maximized: bool,
    restore_bounds: Option<Bounds>,
    z_order: i64,
    opened_seq: u64,
}

impl WindowState {
    fn new(title: String, position: Point, size: Size, z_order: i64, opened_seq: u64) -> Self {
        Self {
            title,
            position,
            size,
            minimized: false,
            maximized: false,
            restore_bounds: None,
            z_order,
            opened_seq,
        }
    }

    pub fn z_order(&self) -> i64 {
        self.z_order
    }

    pub fn opened_seq(&self) -> u64 {
        self.opened_seq
    }

    pub fn restore_bounds(&self) -> Option<Bounds> {
        self.restore_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_position_keeps_window_inside_viewport() {
        let viewport = Size::new(100, 40);
        let size = Size::new(30, 10);
        assert_eq!(
            clamp_position(Point::new(-5, -5), size, viewport),
            Point::new(0, 0)
        );
        assert_eq!(
            clamp_position(Point::new(500, 500), size, viewport),
            Point::new(70, 30)
        );
        assert_eq!(
            clamp_position(Point::new(12, 7), size, viewport),
            Point::new(12, 7)
        );
    }

    #[test]
    fn clamp_position_pins_oversized_window_to_origin() {
        let viewport = Size::new(20, 10);
        let size = Size::new(40, 30);
        assert_eq!(
            clamp_position(Point::new(9, 9), size, viewport),
            Point::new(0, 0)
        );
    }

    #[test]
    fn bounds_contains_is_half_open() {
        let b = Bounds::new(2, 3, 4, 2);
        assert!(b.contains(Point::new(2, 3)));
        assert!(b.contains(Point::new(5, 4)));
        assert!(!b.contains(Point::new(6, 3)));
        assert!(!b.contains(Point::new(2, 5)));
    }
}
