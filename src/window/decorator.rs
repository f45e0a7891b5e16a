use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::ResizeHandle;
use crate::theme;
use crate::ui::{rect_contains, safe_set_string, truncate_to_width};

/// What a mouse-down inside a window frame resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    Drag,
    Body,
}

// Header control cells sit at fixed offsets from the right border:
// "_ □ ×" with a space between each, rendered on the header row.
const CLOSE_OFFSET: u16 = 2;
const MAXIMIZE_OFFSET: u16 = 4;
const MINIMIZE_OFFSET: u16 = 6;

/// Minimum frame that still has a border, a header row, and one content
/// row. Anything smaller is not hit-tested.
pub const MIN_CHROME: (u16, u16) = (8, 4);

/// Resolves a pointer position inside `rect` against the window chrome.
/// Callers should check resize handles first; the header row is below the
/// top border so the two never overlap.
pub fn header_hit(rect: Rect, column: u16, row: u16) -> Option<HeaderAction> {
    if !rect_contains(rect, column, row) || rect.width < MIN_CHROME.0 || rect.height < MIN_CHROME.1
    {
        return None;
    }
    let right = rect.x + rect.width - 1;
    let header_y = rect.y + 1;
    if row == header_y && column > rect.x && column < right {
        if column == right - CLOSE_OFFSET {
            return Some(HeaderAction::Close);
        }
        if column == right - MAXIMIZE_OFFSET {
            return Some(HeaderAction::Maximize);
        }
        if column == right - MINIMIZE_OFFSET {
            return Some(HeaderAction::Minimize);
        }
        return Some(HeaderAction::Drag);
    }
    Some(HeaderAction::Body)
}

/// Maps a pointer on the window border to a resize handle. Corners win
/// over edges.
pub fn resize_handle_at(rect: Rect, column: u16, row: u16) -> Option<ResizeHandle> {
    if !rect_contains(rect, column, row) || rect.width < MIN_CHROME.0 || rect.height < MIN_CHROME.1
    {
        return None;
    }
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;
    let on_left = column == rect.x;
    let on_right = column == right;
    let on_top = row == rect.y;
    let on_bottom = row == bottom;

    match (on_left, on_right, on_top, on_bottom) {
        (true, _, true, _) => Some(ResizeHandle::TopLeft),
        (_, true, true, _) => Some(ResizeHandle::TopRight),
        (true, _, _, true) => Some(ResizeHandle::BottomLeft),
        (_, true, _, true) => Some(ResizeHandle::BottomRight),
        (true, ..) => Some(ResizeHandle::Left),
        (_, true, ..) => Some(ResizeHandle::Right),
        (_, _, true, _) => Some(ResizeHandle::Top),
        (_, _, _, true) => Some(ResizeHandle::Bottom),
        _ => None,
    }
}

/// Paints one window: border, header row with title and controls, and
/// content lines. Windows render back to front, so overlap needs no
/// obscure tracking here.
pub fn render_window(
    buffer: &mut Buffer,
    rect: Rect,
    clip: Rect,
    title: &str,
    focused: bool,
    content: &[&str],
) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let border_style = theme::window_border_style(focused);
    let body_style = theme::window_body_style();
    let header_style = theme::header_style(focused);

    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;

    // body fill
    for y in top + 1..bottom {
        for x in left + 1..right {
            if rect_contains(clip, x, y)
                && let Some(cell) = buffer.cell_mut((x, y))
            {
                cell.set_symbol(" ");
                cell.set_style(body_style);
            }
        }
    }

    // horizontal borders
    for x in left..=right {
        let top_symbol = if x == left {
            "┌"
        } else if x == right {
            "┐"
        } else {
            "─"
        };
        let bottom_symbol = if x == left {
            "└"
        } else if x == right {
            "┘"
        } else {
            "─"
        };
        if rect_contains(clip, x, top)
            && let Some(cell) = buffer.cell_mut((x, top))
        {
            cell.set_symbol(top_symbol);
            cell.set_style(border_style);
        }
        if rect_contains(clip, x, bottom)
            && let Some(cell) = buffer.cell_mut((x, bottom))
        {
            cell.set_symbol(bottom_symbol);
            cell.set_style(border_style);
        }
    }
    // vertical borders
    for y in top + 1..bottom {
        for x in [left, right] {
            if rect_contains(clip, x, y)
                && let Some(cell) = buffer.cell_mut((x, y))
            {
                cell.set_symbol("│");
                cell.set_style(border_style);
            }
        }
    }

    if rect.width < MIN_CHROME.0 || rect.height < MIN_CHROME.1 {
        return;
    }

    // header row
    let header_y = top + 1;
    for x in left + 1..right {
        if rect_contains(clip, x, header_y)
            && let Some(cell) = buffer.cell_mut((x, header_y))
        {
            cell.set_symbol(" ");
            cell.set_style(header_style);
        }
    }
    let title_width = rect.width.saturating_sub(MINIMIZE_OFFSET + 3) as usize;
    let title_text = truncate_to_width(title, title_width);
    safe_set_string(buffer, clip, left + 2, header_y, &title_text, header_style);
    safe_set_string(
        buffer,
        clip,
        right - MINIMIZE_OFFSET,
        header_y,
        "_ □ ×",
        header_style,
    );

    // content below the header
    let mut y = header_y + 1;
    for line in content {
        if y >= bottom {
            break;
        }
        let text = truncate_to_width(line, rect.width.saturating_sub(4) as usize);
        safe_set_string(buffer, clip, left + 2, y, &text, body_style);
        y += 1;
    }
}
