use std::time::Duration;

use crate::window::{Point, Size};

/// Rows reserved for the taskbar at the bottom of the screen.
pub const TASKBAR_HEIGHT: u16 = 1;

/// z-order values start above this floor and only ever grow.
pub const Z_ORDER_FLOOR: i64 = 100;

/// Maximum per-axis offset applied to a freshly opened window so stacked
/// opens do not land exactly on top of each other.
pub const OPEN_JITTER: i32 = 2;

pub const MIN_WINDOW_SIZE: Size = Size {
    width: 18,
    height: 5,
};

pub const MAX_WINDOW_SIZE: Size = Size {
    width: 160,
    height: 48,
};

/// Desktop icon grid: cell extent, gap between cells, and the top-left
/// origin of cell (0, 0).
pub const ICON_CELL_SIZE: Size = Size {
    width: 10,
    height: 4,
};
pub const ICON_CELL_MARGIN: i32 = 2;
pub const ICON_GRID_ORIGIN: Point = Point { x: 2, y: 1 };
pub const ICON_OUTER_MARGIN: i32 = 2;

/// Pointer travel (Chebyshev, in cells) before a pressed icon counts as
/// being dragged rather than clicked.
pub const ICON_DRAG_THRESHOLD: i32 = 2;

pub const DOUBLE_CLICK_DELAY: Duration = Duration::from_millis(500);

/// Click-ripple budget and timing.
pub const MAX_RIPPLES: usize = 6;
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1200);
pub const RIPPLE_WAVE_MS: u64 = 180;

/// Boot log typewriter speed and how long the finished log lingers.
pub const BOOT_CHARS_PER_SEC: u64 = 240;
pub const BOOT_LINGER: Duration = Duration::from_millis(600);

pub const DEFAULT_FRAME_MS: u64 = 16;
