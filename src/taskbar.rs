use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::clock::Clock;
use crate::constants::TASKBAR_HEIGHT;
use crate::theme;
use crate::ui::{rect_contains, safe_set_string, truncate_to_width};
use crate::window::TaskbarEntry;

const START_LABEL: &str = " start ";

#[derive(Debug, Clone)]
struct WindowButton {
    id: String,
    rect: Rect,
}

/// Bottom-of-screen taskbar. Rendering records where the start button and
/// each window button landed; later mouse events are answered from those
/// rects, so hit-testing always matches the last drawn frame.
#[derive(Debug, Default)]
pub struct TaskbarView {
    area: Rect,
    start_rect: Option<Rect>,
    window_buttons: Vec<WindowButton>,
    host_label: Option<String>,
}

impl TaskbarView {
    pub fn new() -> Self {
        let host_label = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .filter(|h| !h.is_empty());
        Self {
            host_label,
            ..Self::default()
        }
    }

    /// Splits the screen into desktop area (returned) and the taskbar
    /// strip this view will draw into.
    pub fn split_area(&mut self, area: Rect) -> Rect {
        let bar_height = TASKBAR_HEIGHT.min(area.height);
        self.area = Rect::new(
            area.x,
            area.y + area.height - bar_height,
            area.width,
            bar_height,
        );
        Rect::new(area.x, area.y, area.width, area.height - bar_height)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn render(
        &mut self,
        buffer: &mut Buffer,
        entries: &[TaskbarEntry],
        start_open: bool,
        clock: &Clock,
    ) {
        self.start_rect = None;
        self.window_buttons.clear();
        let bar = self.area;
        if bar.width == 0 || bar.height == 0 {
            return;
        }
        let y = bar.y;
        for x in bar.x..bar.x + bar.width {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(" ");
                cell.set_style(theme::taskbar_style());
            }
        }

        // start button
        let start_width = (START_LABEL.len() as u16).min(bar.width);
        safe_set_string(
            buffer,
            bar,
            bar.x,
            y,
            START_LABEL,
            theme::start_button_style(start_open),
        );
        self.start_rect = Some(Rect::new(bar.x, y, start_width, 1));

        // right corner: clock, then hostname when there is room
        let clock_text = format!(" {} ", clock.text());
        let clock_width = clock_text.len() as u16;
        let mut right_edge = bar.x + bar.width;
        if bar.width > start_width + clock_width {
            let x = right_edge - clock_width;
            safe_set_string(buffer, bar, x, y, &clock_text, theme::taskbar_style());
            right_edge = x;
        }
        if let Some(host) = &self.host_label {
            let host_text = format!(" {host} |");
            let host_width = host_text.chars().count() as u16;
            if right_edge > bar.x + start_width + host_width + 2 {
                let x = right_edge - host_width;
                safe_set_string(buffer, bar, x, y, &host_text, theme::taskbar_style());
                right_edge = x;
            }
        }

        // one button per open window, left to right in open order
        let mut x = bar.x + start_width + 1;
        for entry in entries {
            let label = format!(" {} ", truncate_to_width(&entry.title, 12));
            let width = label.chars().count() as u16;
            if x + width >= right_edge {
                break;
            }
            safe_set_string(
                buffer,
                bar,
                x,
                y,
                &label,
                theme::taskbar_button_style(entry.active, entry.minimized),
            );
            self.window_buttons.push(WindowButton {
                id: entry.id.clone(),
                rect: Rect::new(x, y, width, 1),
            });
            x += width + 1;
        }
    }

    pub fn hit_test_start(&self, column: u16, row: u16) -> bool {
        self.start_rect
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn hit_test_window(&self, column: u16, row: u16) -> Option<&str> {
        self.window_buttons
            .iter()
            .find(|button| rect_contains(button.rect, column, row))
            .map(|button| button.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<TaskbarEntry> {
        vec![
            TaskbarEntry {
                id: "game".into(),
                title: "Retro Game".into(),
                minimized: false,
                active: true,
            },
            TaskbarEntry {
                id: "about".into(),
                title: "About".into(),
                minimized: true,
                active: false,
            },
        ]
    }

    #[test]
    fn split_reserves_the_bottom_row() {
        let mut bar = TaskbarView::default();
        let desktop = bar.split_area(Rect::new(0, 0, 80, 24));
        assert_eq!(desktop, Rect::new(0, 0, 80, 23));
        assert_eq!(bar.area(), Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn render_records_start_and_window_hits() {
        let mut bar = TaskbarView::default();
        bar.split_area(Rect::new(0, 0, 80, 24));
        let mut buffer = Buffer::empty(Rect::new(0, 0, 80, 24));
        bar.render(&mut buffer, &entries(), false, &Clock::new());

        assert!(bar.hit_test_start(1, 23));
        assert!(!bar.hit_test_start(1, 22));
        assert_eq!(bar.hit_test_window(9, 23), Some("game"));
        assert_eq!(bar.hit_test_window(79, 23), None);
        // second button sits after the first
        let about_x = 8 + " Retro Game ".len() as u16 + 1 + 1;
        assert_eq!(bar.hit_test_window(about_x, 23), Some("about"));
    }

    #[test]
    fn hits_reset_each_frame() {
        let mut bar = TaskbarView::default();
        bar.split_area(Rect::new(0, 0, 80, 24));
        let mut buffer = Buffer::empty(Rect::new(0, 0, 80, 24));
        bar.render(&mut buffer, &entries(), false, &Clock::new());
        bar.render(&mut buffer, &[], false, &Clock::new());
        assert_eq!(bar.hit_test_window(9, 23), None);
        assert!(bar.hit_test_start(0, 23));
    }
}
