use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{Bounds, Point, Size, WindowState, clamp_position};
use crate::constants::{OPEN_JITTER, Z_ORDER_FLOOR};

/// Launchable application as registered in the catalog.
#[derive(Debug, Clone)]
struct AppSpec {
    title: String,
    size: Size,
}

/// One taskbar button worth of window state, in open order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: String,
    pub title: String,
    pub minimized: bool,
    pub active: bool,
}

/// Owns every open window and the rules for moving between their states:
/// open, focused, minimized, maximized, closed. All operations are total;
/// ids that do not resolve are logged and ignored.
#[derive(Debug)]
pub struct WindowManager {
    registry: BTreeMap<String, WindowState>,
    catalog: BTreeMap<String, AppSpec>,
    active: Option<String>,
    viewport: Size,
    next_seq: u64,
    jitter: Jitter,
}

impl WindowManager {
    pub fn new(viewport: Size) -> Self {
        Self {
            registry: BTreeMap::new(),
            catalog: BTreeMap::new(),
            active: None,
            viewport,
            next_seq: 0,
            jitter: Jitter::seeded(),
        }
    }

    /// Makes an app launchable. Opening an id that was never registered is
    /// a no-op.
    pub fn register_app(&mut self, id: &str, title: &str, size: Size) {
        self.catalog.insert(
            id.to_string(),
            AppSpec {
                title: title.to_string(),
                size,
            },
        );
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Adopts a new viewport and re-clamps window origins so every floating
    /// window still starts inside it.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        for win in self.registry.values_mut() {
            win.position = clamp_position(win.position, win.size, viewport);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.registry.contains_key(id)
    }

    pub fn window(&self, id: &str) -> Option<&WindowState> {
        self.registry.get(id)
    }

    pub fn active_window(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Opens (or re-surfaces) the window for `id`. Already open and visible
    /// means focus; minimized means restore. New windows spawn centered in
    /// the viewport with a little jitter.
    pub fn open_window(&mut self, id: &str) {
        if let Some(win) = self.registry.get(id) {
            if win.minimized {
                self.restore_window(id);
            } else {
                self.focus_window(id);
            }
            return;
        }
        let Some(spec) = self.catalog.get(id).cloned() else {
            tracing::debug!(app = id, "open requested for unregistered app");
            return;
        };
        let centered = Point {
            x: (self.viewport.width - spec.size.width) / 2,
            y: (self.viewport.height - spec.size.height) / 2,
        };
        let jittered = Point {
            x: centered.x + self.jitter.offset(OPEN_JITTER),
            y: centered.y + self.jitter.offset(OPEN_JITTER),
        };
        let position = clamp_position(jittered, spec.size, self.viewport);
        let z_order = self.next_z_index();
        let opened_seq = self.next_seq;
        self.next_seq += 1;
        self.registry.insert(
            id.to_string(),
            WindowState::new(spec.title, position, spec.size, z_order, opened_seq),
        );
        self.active = Some(id.to_string());
        tracing::debug!(app = id, x = position.x, y = position.y, "opened window");
    }

    /// Raises `id` above every other window and makes it active, clearing
    /// its minimized flag if set.
    pub fn focus_window(&mut self, id: &str) {
        let z_order = self.next_z_index();
        let Some(win) = self.registry.get_mut(id) else {
            tracing::debug!(app = id, "focus requested for unknown window");
            return;
        };
        win.z_order = z_order;
        win.minimized = false;
        self.active = Some(id.to_string());
    }

    pub fn minimize_window(&mut self, id: &str) {
        let Some(win) = self.registry.get_mut(id) else {
            tracing::debug!(app = id, "minimize requested for unknown window");
            return;
        };
        if win.minimized {
            return;
        }
        win.minimized = true;
        tracing::debug!(app = id, "minimized window");
        if self.active.as_deref() == Some(id) {
            self.active = self.most_recently_focused();
        }
    }

    /// Un-hides and focuses a window; safe on ids that are not minimized
    /// (plain focus) or not open (ignored).
    pub fn restore_window(&mut self, id: &str) {
        if !self.registry.contains_key(id) {
            tracing::debug!(app = id, "restore requested for unknown window");
            return;
        }
        self.focus_window(id);
    }

    /// Flips `id` between maximized and its remembered floating frame.
    pub fn toggle_maximize(&mut self, id: &str) {
        let Some(win) = self.registry.get_mut(id) else {
            tracing::debug!(app = id, "maximize requested for unknown window");
            return;
        };
        if win.maximized {
            win.maximized = false;
            if let Some(prev) = win.restore_bounds.take() {
                win.position = prev.position();
                win.size = prev.size();
            }
        } else {
            win.restore_bounds = Some(Bounds::from_parts(win.position, win.size));
            win.maximized = true;
        }
        self.focus_window(id);
    }

    pub fn close_window(&mut self, id: &str) {
        if self.registry.remove(id).is_none() {
            tracing::debug!(app = id, "close requested for unknown window");
            return;
        }
        tracing::debug!(app = id, "closed window");
        if self.active.as_deref() == Some(id) {
            self.active = self.most_recently_focused();
        }
    }

    /// Focuses the next non-minimized window in open order, wrapping at the
    /// end. With fewer than two candidates this does nothing.
    pub fn cycle_windows(&mut self) {
        let mut order: Vec<(String, u64)> = self
            .registry
            .iter()
            .filter(|(_, win)| !win.minimized)
            .map(|(id, win)| (id.clone(), win.opened_seq))
            .collect();
        if order.len() < 2 {
            return;
        }
        order.sort_by_key(|(_, seq)| *seq);
        let next = match self
            .active
            .as_deref()
            .and_then(|active| order.iter().position(|(id, _)| id == active))
        {
            Some(index) => order[(index + 1) % order.len()].0.clone(),
            None => order[0].0.clone(),
        };
        self.focus_window(&next);
    }

    /// The on-screen frame for `id`: the maximized frame when maximized,
    /// otherwise the floating position/size.
    pub fn frame(&self, id: &str) -> Option<Bounds> {
        let win = self.registry.get(id)?;
        if win.minimized {
            return None;
        }
        Some(if win.maximized {
            self.maximized_bounds()
        } else {
            Bounds::from_parts(win.position, win.size)
        })
    }

    /// Maximized windows cover the central 90% x 80% of the viewport,
    /// inset 5% horizontally and 10% vertically.
    pub fn maximized_bounds(&self) -> Bounds {
        Bounds {
            x: self.viewport.width * 5 / 100,
            y: self.viewport.height * 10 / 100,
            width: self.viewport.width * 90 / 100,
            height: self.viewport.height * 80 / 100,
        }
    }

    /// Visible window ids from back to front.
    pub fn windows_by_z(&self) -> Vec<&str> {
        let mut visible: Vec<(&str, i64)> = self
            .registry
            .iter()
            .filter(|(_, win)| !win.minimized)
            .map(|(id, win)| (id.as_str(), win.z_order))
            .collect();
        visible.sort_by_key(|(_, z)| *z);
        visible.into_iter().map(|(id, _)| id).collect()
    }

    /// Every open window in open order, for the taskbar.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let mut entries: Vec<(&String, &WindowState)> = self.registry.iter().collect();
        entries.sort_by_key(|(_, win)| win.opened_seq);
        entries
            .into_iter()
            .map(|(id, win)| TaskbarEntry {
                id: id.clone(),
                title: win.title.clone(),
                minimized: win.minimized,
                active: self.active.as_deref() == Some(id.as_str()),
            })
            .collect()
    }

    /// Writes a dragged position. Maximized windows keep their frame.
    pub fn set_window_position(&mut self, id: &str, position: Point) {
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };
        if win.maximized {
            return;
        }
        win.position = position;
    }

    /// Writes a resized frame. Maximized windows keep their frame.
    pub fn set_window_bounds(&mut self, id: &str, bounds: Bounds) {
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };
        if win.maximized {
            return;
        }
        win.position = bounds.position();
        win.size = bounds.size();
    }

    fn next_z_index(&self) -> i64 {
        let top = self
            .registry
            .values()
            .map(|win| win.z_order)
            .max()
            .unwrap_or(Z_ORDER_FLOOR)
            .max(Z_ORDER_FLOOR);
        top + 1
    }

    fn most_recently_focused(&self) -> Option<String> {
        self.registry
            .iter()
            .filter(|(_, win)| !win.minimized)
            .max_by_key(|(_, win)| win.z_order)
            .map(|(id, _)| id.clone())
    }
}

/// xorshift64 generator for open-position jitter. Not cryptographic; just
/// enough to scatter stacked windows.
#[derive(Debug)]
struct Jitter(u64);

impl Jitter {
    fn seeded() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
            .unwrap_or(0);
        Self(nanos | 1)
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform offset in `[-range, range]`.
    fn offset(&mut self, range: i32) -> i32 {
        if range <= 0 {
            return 0;
        }
        let span = (range as u64) * 2 + 1;
        (self.next() % span) as i32 - range
    }
}
