use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::{rect_contains, safe_set_string, truncate_to_width};

/// One selectable row in the start menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
}

/// Pop-up menu anchored above the start button. Like the taskbar it
/// records item rects while rendering and hit-tests against them.
#[derive(Debug, Default)]
pub struct StartMenuView {
    bounds: Option<Rect>,
    item_rects: Vec<(usize, Rect)>,
}

impl StartMenuView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        buffer: &mut Buffer,
        screen: Rect,
        anchor: Rect,
        items: &[MenuItem],
        selected: usize,
    ) {
        self.bounds = None;
        self.item_rects.clear();
        if items.is_empty() || screen.width < 10 || screen.height < 4 {
            return;
        }

        // dim everything behind the menu
        for y in screen.y..screen.y + screen.height {
            for x in screen.x..screen.x + screen.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    let style = cell.style();
                    cell.set_style(style.add_modifier(Modifier::DIM));
                }
            }
        }

        let inner_width = items
            .iter()
            .map(|item| item.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(12) as u16
            + 4;
        let width = inner_width.min(screen.width);
        let height = (items.len() as u16 + 2).min(screen.height);
        let x = anchor.x.min(screen.x + screen.width - width);
        let y = anchor.y.saturating_sub(height).max(screen.y);
        let menu = Rect::new(x, y, width, height);
        self.bounds = Some(menu);

        let style = theme::menu_style();
        for row in menu.y..menu.y + menu.height {
            for col in menu.x..menu.x + menu.width {
                if let Some(cell) = buffer.cell_mut((col, row)) {
                    let symbol = if row == menu.y || row == menu.y + menu.height - 1 {
                        if col == menu.x || col == menu.x + menu.width - 1 {
                            if row == menu.y {
                                if col == menu.x { "┌" } else { "┐" }
                            } else if col == menu.x {
                                "└"
                            } else {
                                "┘"
                            }
                        } else {
                            "─"
                        }
                    } else if col == menu.x || col == menu.x + menu.width - 1 {
                        "│"
                    } else {
                        " "
                    };
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }

        for (index, item) in items.iter().enumerate() {
            let row = menu.y + 1 + index as u16;
            if row >= menu.y + menu.height - 1 {
                break;
            }
            let item_style = if index == selected {
                theme::menu_selected_style()
            } else {
                style
            };
            let marker = if index == selected { "▸ " } else { "  " };
            let text = format!(
                "{marker}{}",
                truncate_to_width(&item.label, width.saturating_sub(4) as usize)
            );
            let row_rect = Rect::new(menu.x + 1, row, menu.width - 2, 1);
            // fill the row so the selection bar spans the menu
            for col in row_rect.x..row_rect.x + row_rect.width {
                if let Some(cell) = buffer.cell_mut((col, row)) {
                    cell.set_symbol(" ");
                    cell.set_style(item_style);
                }
            }
            safe_set_string(buffer, menu, row_rect.x, row, &text, item_style);
            self.item_rects.push((index, row_rect));
        }
    }

    /// Forgets the rects recorded by the last render. The menu may anchor
    /// elsewhere next frame, so a click arriving in between must not match
    /// rows from its previous appearance.
    pub fn reset(&mut self) {
        self.bounds = None;
        self.item_rects.clear();
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.bounds
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn hit_test_item(&self, column: u16, row: u16) -> Option<usize> {
        self.item_rects
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(index, _)| *index)
    }

    pub fn item_count(&self) -> usize {
        self.item_rects.len()
    }
}

/// Overlay styling helper for the shutdown prompt; lives here because the
/// prompt is launched from this menu.
pub fn confirm_button_style(selected: bool) -> Style {
    if selected {
        theme::menu_selected_style()
    } else {
        theme::menu_style()
    }
}
