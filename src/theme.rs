use ratatui::style::{Color, Modifier, Style};

// Red accents on near-black, the house retro look.
const ACCENT: Color = Color::Rgb(255, 68, 68);
const DESKTOP_BG: Color = Color::Rgb(10, 10, 14);
const SURFACE_BG: Color = Color::Rgb(24, 24, 28);

pub fn desktop_style() -> Style {
    Style::default().bg(DESKTOP_BG).fg(Color::DarkGray)
}

pub fn wallpaper_grid_style() -> Style {
    Style::default().bg(DESKTOP_BG).fg(Color::Rgb(40, 20, 20))
}

pub fn window_body_style() -> Style {
    Style::default().bg(SURFACE_BG).fg(Color::Gray)
}

pub fn window_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).bg(SURFACE_BG)
    } else {
        Style::default().fg(Color::DarkGray).bg(SURFACE_BG)
    }
}

pub fn header_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(ACCENT)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

pub fn icon_style() -> Style {
    Style::default().bg(DESKTOP_BG).fg(Color::White)
}

pub fn icon_glyph_style() -> Style {
    Style::default().bg(DESKTOP_BG).fg(ACCENT)
}

pub fn taskbar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 36)).fg(Color::Gray)
}

pub fn taskbar_button_style(active: bool, minimized: bool) -> Style {
    let base = taskbar_style();
    if active {
        base.fg(Color::White).add_modifier(Modifier::BOLD)
    } else if minimized {
        base.add_modifier(Modifier::DIM)
    } else {
        base
    }
}

pub fn start_button_style(open: bool) -> Style {
    if open {
        Style::default()
            .bg(ACCENT)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        taskbar_style().fg(ACCENT).add_modifier(Modifier::BOLD)
    }
}

pub fn menu_style() -> Style {
    Style::default().bg(SURFACE_BG).fg(Color::White)
}

pub fn menu_selected_style() -> Style {
    Style::default()
        .bg(ACCENT)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn boot_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::Rgb(200, 60, 60))
}

pub fn ripple_style() -> Style {
    Style::default().fg(Color::Rgb(120, 40, 40))
}

pub fn cursor_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
