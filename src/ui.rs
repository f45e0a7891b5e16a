use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::window::Bounds;

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Converts a cell-space frame to a screen `Rect`, clipped to `clip`.
/// Returns `None` when nothing of the frame is on screen.
pub fn screen_rect(bounds: Bounds, clip: Rect) -> Option<Rect> {
    if bounds.width <= 0 || bounds.height <= 0 {
        return None;
    }
    let left = bounds.x.max(clip.x as i32);
    let top = bounds.y.max(clip.y as i32);
    let right = bounds.right().min(clip.x as i32 + clip.width as i32);
    let bottom = bounds.bottom().min(clip.y as i32 + clip.height as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 1 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Writes `text` starting at (x, y), dropping characters outside `clip`.
pub fn safe_set_string(buffer: &mut Buffer, clip: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < clip.y || y >= clip.y.saturating_add(clip.height) {
        return;
    }
    let mut col = x;
    for ch in text.chars() {
        if col >= clip.x.saturating_add(clip.width) {
            break;
        }
        if col >= clip.x
            && let Some(cell) = buffer.cell_mut((col, y))
        {
            cell.set_symbol(&ch.to_string());
            cell.set_style(style);
        }
        col = col.saturating_add(1);
    }
}

/// Fills `rect` (pre-clipped to `clip`) with a symbol and style.
pub fn fill_rect(buffer: &mut Buffer, clip: Rect, rect: Rect, symbol: &str, style: Style) {
    let area = rect.intersection(clip);
    if area.is_empty() {
        return;
    }
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        }
    }
}
