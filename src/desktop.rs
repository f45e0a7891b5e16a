use std::time::Instant;

use crate::apps::AppEntry;
use crate::constants::{
    DOUBLE_CLICK_DELAY, ICON_CELL_MARGIN, ICON_CELL_SIZE, ICON_DRAG_THRESHOLD, ICON_GRID_ORIGIN,
    ICON_OUTER_MARGIN,
};
use crate::window::{Bounds, Point, Size};

/// Grid coordinates for a desktop icon, column-then-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

#[derive(Debug, Clone)]
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    pub glyph: &'static str,
    pub cell: GridCell,
}

/// Maps between grid cells and desktop positions, and finds free cells
/// for dropped icons.
#[derive(Debug, Clone, Copy)]
pub struct GridPlacer {
    pub origin: Point,
    pub cell_size: Size,
    pub cell_margin: i32,
    pub viewport: Size,
}

impl GridPlacer {
    pub fn new(viewport: Size) -> Self {
        Self {
            origin: ICON_GRID_ORIGIN,
            cell_size: ICON_CELL_SIZE,
            cell_margin: ICON_CELL_MARGIN,
            viewport,
        }
    }

    fn pitch(&self) -> (i32, i32) {
        (
            self.cell_size.width + self.cell_margin,
            self.cell_size.height + self.cell_margin,
        )
    }

    /// Columns that fit in the viewport, never less than one.
    pub fn columns(&self) -> i32 {
        let (pitch_x, _) = self.pitch();
        ((self.viewport.width - ICON_OUTER_MARGIN) / pitch_x).max(1)
    }

    fn rows_in_viewport(&self) -> i32 {
        let (_, pitch_y) = self.pitch();
        ((self.viewport.height - ICON_OUTER_MARGIN) / pitch_y).max(1)
    }

    /// Row-major initial layout: icon `i` lands in cell
    /// `(i % columns, i / columns)`.
    pub fn place_all(&self, icons: &mut [DesktopIcon]) {
        let columns = self.columns();
        for (index, icon) in icons.iter_mut().enumerate() {
            let index = index as i32;
            icon.cell = GridCell::new(index % columns, index / columns);
        }
    }

    pub fn cell_position(&self, cell: GridCell) -> Point {
        let (pitch_x, pitch_y) = self.pitch();
        Point {
            x: self.origin.x + cell.col * pitch_x,
            y: self.origin.y + cell.row * pitch_y,
        }
    }

    /// The grid cell whose slot is closest to an icon center, clamped into
    /// the viewport grid.
    pub fn nearest_cell(&self, center: Point) -> GridCell {
        let (pitch_x, pitch_y) = self.pitch();
        let rel_x = center.x - self.origin.x - self.cell_size.width / 2;
        let rel_y = center.y - self.origin.y - self.cell_size.height / 2;
        let col = (rel_x + pitch_x / 2).div_euclid(pitch_x);
        let row = (rel_y + pitch_y / 2).div_euclid(pitch_y);
        GridCell {
            col: col.clamp(0, self.columns() - 1),
            row: row.clamp(0, self.rows_in_viewport() - 1),
        }
    }

    /// Snaps the icon at `index` to the free cell nearest `center`.
    ///
    /// The target cell is taken as-is when free. Otherwise candidate cells
    /// are scanned in expanding rings (Chebyshev radius 1, 2, ...) within
    /// the viewport grid; if every on-screen cell is taken, the icon falls
    /// back to column 0 below the target row, probing further rows until a
    /// free one is found. Exactly one icon per cell, always.
    pub fn snap_to_grid(&self, icons: &mut [DesktopIcon], index: usize, center: Point) {
        let target = self.nearest_cell(center);
        let occupied = |icons: &[DesktopIcon], cell: GridCell| {
            icons
                .iter()
                .enumerate()
                .any(|(i, icon)| i != index && icon.cell == cell)
        };

        if !occupied(icons, target) {
            icons[index].cell = target;
            return;
        }

        let columns = self.columns();
        let rows = self.rows_in_viewport();
        let max_radius = columns.max(rows);
        for radius in 1..=max_radius {
            for row in target.row - radius..=target.row + radius {
                for col in target.col - radius..=target.col + radius {
                    let on_ring =
                        (row - target.row).abs() == radius || (col - target.col).abs() == radius;
                    if !on_ring {
                        continue;
                    }
                    if col < 0 || col >= columns || row < 0 || row >= rows {
                        continue;
                    }
                    let cell = GridCell::new(col, row);
                    if !occupied(icons, cell) {
                        icons[index].cell = cell;
                        return;
                    }
                }
            }
        }

        // every on-screen cell is taken; grow the grid downward
        let mut fallback = GridCell::new(0, target.row + 1);
        while occupied(icons, fallback) {
            fallback.row += 1;
        }
        tracing::debug!(
            icon = icons[index].id.as_str(),
            row = fallback.row,
            "icon grid full, growing below viewport"
        );
        icons[index].cell = fallback;
    }
}

#[derive(Debug)]
struct IconPress {
    index: usize,
    at: Point,
    offset: Point,
    position: Point,
    dragging: bool,
}

/// What an icon press turned out to be once the button came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRelease {
    /// Single sub-threshold click; selection only.
    Click(usize),
    /// Second click within the double-click window; launch the app.
    Open(usize),
    /// Drag finished; `position` is the icon's final top-left.
    Drop { index: usize, position: Point },
}

/// Press/move/release bookkeeping that turns raw pointer events into
/// click, double-click, or drag gestures on icons.
#[derive(Debug, Default)]
pub struct IconInteraction {
    press: Option<IconPress>,
    last_click: Option<(usize, Instant)>,
}

impl IconInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, index: usize, icon_origin: Point, pointer: Point) {
        self.press = Some(IconPress {
            index,
            at: pointer,
            offset: Point::new(pointer.x - icon_origin.x, pointer.y - icon_origin.y),
            position: icon_origin,
            dragging: false,
        });
    }

    /// While pressed, tracks the pointer; once travel exceeds the drag
    /// threshold the press is committed as a drag and the icon follows.
    pub fn pointer_move(&mut self, pointer: Point) {
        let Some(press) = &mut self.press else {
            return;
        };
        if !press.dragging {
            let travel = (pointer.x - press.at.x)
                .abs()
                .max((pointer.y - press.at.y).abs());
            if travel < ICON_DRAG_THRESHOLD {
                return;
            }
            press.dragging = true;
        }
        press.position = Point::new(pointer.x - press.offset.x, pointer.y - press.offset.y);
    }

    pub fn pointer_up(&mut self, now: Instant) -> Option<IconRelease> {
        let press = self.press.take()?;
        if press.dragging {
            self.last_click = None;
            return Some(IconRelease::Drop {
                index: press.index,
                position: press.position,
            });
        }
        if let Some((index, at)) = self.last_click
            && index == press.index
            && now.duration_since(at) <= DOUBLE_CLICK_DELAY
        {
            self.last_click = None;
            return Some(IconRelease::Open(press.index));
        }
        self.last_click = Some((press.index, now));
        Some(IconRelease::Click(press.index))
    }

    /// The icon being dragged right now, with its floating top-left.
    pub fn drag_override(&self) -> Option<(usize, Point)> {
        self.press
            .as_ref()
            .filter(|press| press.dragging)
            .map(|press| (press.index, press.position))
    }
}

/// The icon layer of the desktop: the grid, the icons on it, and the
/// gesture recognizer driving them.
#[derive(Debug)]
pub struct Desktop {
    placer: GridPlacer,
    icons: Vec<DesktopIcon>,
    interaction: IconInteraction,
}

impl Desktop {
    pub fn new(viewport: Size, apps: &[AppEntry]) -> Self {
        let placer = GridPlacer::new(viewport);
        let mut icons: Vec<DesktopIcon> = apps
            .iter()
            .map(|app| DesktopIcon {
                id: app.id.to_string(),
                label: app.title.to_string(),
                glyph: app.glyph,
                cell: GridCell::new(0, 0),
            })
            .collect();
        placer.place_all(&mut icons);
        Self {
            placer,
            icons,
            interaction: IconInteraction::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.placer.viewport = viewport;
    }

    pub fn placer(&self) -> &GridPlacer {
        &self.placer
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Where to draw icon `index`: its grid slot, or the floating drag
    /// position while it is being dragged.
    pub fn icon_origin(&self, index: usize) -> Point {
        if let Some((drag_index, position)) = self.interaction.drag_override()
            && drag_index == index
        {
            return position;
        }
        self.placer.cell_position(self.icons[index].cell)
    }

    pub fn icon_at(&self, pointer: Point) -> Option<usize> {
        self.icons.iter().enumerate().position(|(index, _)| {
            Bounds::from_parts(self.icon_origin(index), self.placer.cell_size).contains(pointer)
        })
    }

    /// Returns true when the press landed on an icon and was consumed.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        let Some(index) = self.icon_at(pointer) else {
            return false;
        };
        self.interaction
            .pointer_down(index, self.icon_origin(index), pointer);
        true
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        self.interaction.pointer_move(pointer);
    }

    /// Completes the in-flight gesture. A double-click yields the app id
    /// to open; a drag snaps the icon to the nearest free cell.
    pub fn pointer_up(&mut self, now: Instant) -> Option<String> {
        match self.interaction.pointer_up(now)? {
            IconRelease::Open(index) => Some(self.icons[index].id.clone()),
            IconRelease::Click(_) => None,
            IconRelease::Drop { index, position } => {
                let center = Point::new(
                    position.x + self.placer.cell_size.width / 2,
                    position.y + self.placer.cell_size.height / 2,
                );
                self.placer.snap_to_grid(&mut self.icons, index, center);
                None
            }
        }
    }
}
