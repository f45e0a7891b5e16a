use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::apps::{self, AppEntry};
use crate::boot::BootSequence;
use crate::clock::Clock;
use crate::constants::TASKBAR_HEIGHT;
use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::effects::{Cursor, RippleEffect};
use crate::errors::ShellError;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::{Action, Keybindings};
use crate::start_menu::{MenuItem, StartMenuView, confirm_button_style};
use crate::state::ShellState;
use crate::taskbar::TaskbarView;
use crate::theme;
use crate::ui::{fill_rect, rect_contains, safe_set_string, screen_rect};
use crate::window::decorator::{self, HeaderAction};
use crate::window::{
    Bounds, DragController, Point, ResizeController, Size, WindowManager,
};

#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub skip_boot: bool,
    pub effects: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            skip_boot: false,
            effects: true,
        }
    }
}

/// The whole desktop: window manager, icon grid, chrome views, and the
/// decorative collaborators. Event handling and rendering are plain
/// methods over crossterm events and a ratatui frame, so integration
/// tests can drive a `Shell` without a terminal.
pub struct Shell {
    pub windows: WindowManager,
    pub desktop: Desktop,
    taskbar: TaskbarView,
    start_menu: StartMenuView,
    drag: DragController,
    resize: ResizeController,
    pub clock: Clock,
    boot: Option<BootSequence>,
    ripples: RippleEffect,
    cursor: Cursor,
    state: ShellState,
    apps: Vec<AppEntry>,
    keys: Keybindings,
    quit: bool,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        Self::with_viewport(options, Size::new(80, 24 - TASKBAR_HEIGHT as i32))
    }

    pub fn with_viewport(options: ShellOptions, viewport: Size) -> Self {
        let apps = apps::catalog();
        let mut windows = WindowManager::new(viewport);
        for app in &apps {
            windows.register_app(app.id, app.title, app.size);
        }
        let desktop = Desktop::new(viewport, &apps);
        let mut clock = Clock::new();
        let boot = if options.skip_boot {
            clock.start();
            None
        } else {
            Some(BootSequence::new(Instant::now()))
        };
        Self {
            windows,
            desktop,
            taskbar: TaskbarView::new(),
            start_menu: StartMenuView::new(),
            drag: DragController::new(),
            resize: ResizeController::new(),
            clock,
            boot,
            ripples: RippleEffect::new(),
            cursor: Cursor::new(),
            state: ShellState::new(options.effects),
            apps,
            keys: Keybindings::new(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn booting(&self) -> bool {
        self.boot.is_some()
    }

    fn menu_items(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self
            .apps
            .iter()
            .map(|app| MenuItem {
                label: app.title.to_string(),
            })
            .collect();
        items.push(MenuItem {
            label: "Shut Down...".to_string(),
        });
        items
    }

    fn toggle_start_menu(&mut self) {
        self.state.toggle_start_menu();
        // the view's hit rects describe the menu's previous appearance
        self.start_menu.reset();
    }

    fn activate_menu_item(&mut self, index: usize) {
        self.state.close_start_menu();
        if index < self.apps.len() {
            let id = self.apps[index].id;
            self.windows.open_window(id);
        } else {
            self.state.open_shutdown_prompt();
        }
    }

    fn confirm_shutdown(&mut self) {
        tracing::debug!("shutdown confirmed");
        let open: Vec<String> = self
            .windows
            .taskbar_entries()
            .into_iter()
            .map(|entry| entry.id)
            .collect();
        for id in open {
            self.windows.close_window(&id);
        }
        self.clock.stop();
        self.quit = true;
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Resize(width, height) => {
                let viewport = Size::new(
                    *width as i32,
                    (*height as i32 - TASKBAR_HEIGHT as i32).max(0),
                );
                self.windows.set_viewport(viewport);
                self.desktop.set_viewport(viewport);
            }
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, _now: Instant) {
        // any key skips the boot splash
        if let Some(boot) = &mut self.boot {
            boot.skip();
            return;
        }

        if self.state.shutdown_prompt_open() {
            match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    self.state.toggle_shutdown_choice()
                }
                KeyCode::Enter => {
                    let accept = self.state.shutdown_confirm_selected();
                    self.state.close_shutdown_prompt();
                    if accept {
                        self.confirm_shutdown();
                    }
                }
                KeyCode::Esc => self.state.close_shutdown_prompt(),
                _ => {}
            }
            return;
        }

        if self.state.start_menu_open() {
            let count = self.menu_items().len();
            match key.code {
                KeyCode::Up => {
                    let selected = self.state.start_menu_selected();
                    self.state
                        .set_start_menu_selected(selected.checked_sub(1).unwrap_or(count - 1));
                    return;
                }
                KeyCode::Down => {
                    let selected = self.state.start_menu_selected();
                    self.state.set_start_menu_selected((selected + 1) % count);
                    return;
                }
                KeyCode::Enter => {
                    self.activate_menu_item(self.state.start_menu_selected());
                    return;
                }
                _ => {}
            }
        }

        match self.keys.action_for(key) {
            Some(Action::Quit) => self.quit = true,
            Some(Action::CycleWindows) => self.windows.cycle_windows(),
            Some(Action::ToggleStartMenu) => self.toggle_start_menu(),
            Some(Action::CloseOverlay) => {
                if self.state.start_menu_open() {
                    self.state.close_start_menu();
                } else if let Some(active) = self.windows.active_window() {
                    let active = active.to_string();
                    self.windows.minimize_window(&active);
                }
            }
            Some(Action::OpenGame) => self.windows.open_window("game"),
            Some(Action::OpenAbout) => self.windows.open_window("about"),
            Some(Action::OpenDownloads) => self.windows.open_window("download"),
            Some(Action::OpenFumo) => self.windows.open_window("fumo"),
            None => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        let pointer = Point::new(mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.cursor.set_position(pointer);
                if self.boot.is_some() {
                    return;
                }
                if self.state.effects_enabled() {
                    self.ripples.spawn(pointer, now);
                }
                if self.state.shutdown_prompt_open() {
                    // modal; clicks outside the prompt are swallowed
                    return;
                }
                self.dispatch_press(mouse.column, mouse.row, pointer);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.cursor.set_position(pointer);
                self.drag.on_pointer_move(&mut self.windows, pointer);
                self.resize.on_pointer_move(&mut self.windows, pointer);
                self.desktop.pointer_move(pointer);
            }
            MouseEventKind::Moved => self.cursor.set_position(pointer),
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.stop_drag();
                self.resize.stop_resize();
                if let Some(id) = self.desktop.pointer_up(now) {
                    self.windows.open_window(&id);
                }
            }
            _ => {}
        }
    }

    /// Mouse-down routing, front to back: taskbar, start menu, windows by
    /// descending z (chrome before body), then desktop icons.
    fn dispatch_press(&mut self, column: u16, row: u16, pointer: Point) {
        if rect_contains(self.taskbar.area(), column, row) {
            if self.taskbar.hit_test_start(column, row) {
                self.toggle_start_menu();
                return;
            }
            if let Some(id) = self.taskbar.hit_test_window(column, row) {
                let id = id.to_string();
                self.state.close_start_menu();
                self.windows.restore_window(&id);
            }
            return;
        }

        if self.state.start_menu_open() {
            if let Some(index) = self.start_menu.hit_test_item(column, row) {
                self.activate_menu_item(index);
                return;
            }
            if self.start_menu.contains(column, row) {
                return;
            }
            self.state.close_start_menu();
            // the click falls through to whatever was underneath
        }

        let stack: Vec<String> = self
            .windows
            .windows_by_z()
            .into_iter()
            .map(str::to_string)
            .collect();
        for id in stack.into_iter().rev() {
            let Some(frame) = self.windows.frame(&id) else {
                continue;
            };
            let rect = frame_to_rect(frame);
            if !rect_contains(rect, column, row) {
                continue;
            }
            let maximized = self
                .windows
                .window(&id)
                .is_some_and(|win| win.maximized);
            if !maximized
                && let Some(handle) = decorator::resize_handle_at(rect, column, row)
            {
                self.resize
                    .start_resize(&mut self.windows, &id, handle, pointer);
                return;
            }
            match decorator::header_hit(rect, column, row) {
                Some(HeaderAction::Minimize) => self.windows.minimize_window(&id),
                Some(HeaderAction::Maximize) => self.windows.toggle_maximize(&id),
                Some(HeaderAction::Close) => self.windows.close_window(&id),
                Some(HeaderAction::Drag) => {
                    self.drag.start_drag(&mut self.windows, &id, pointer)
                }
                Some(HeaderAction::Body) | None => self.windows.focus_window(&id),
            }
            return;
        }

        self.desktop.pointer_down(pointer);
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, now: Instant) {
        let area = frame.area();
        let desktop_area = self.taskbar.split_area(area);
        let viewport = Size::new(desktop_area.width as i32, desktop_area.height as i32);
        self.windows.set_viewport(viewport);
        self.desktop.set_viewport(viewport);

        let buffer = frame.buffer_mut();

        if let Some(boot) = self.boot.take() {
            if boot.finished(now) {
                self.clock.start();
            } else {
                render_boot(buffer, area, &boot.visible_lines(now));
                self.boot = Some(boot);
                return;
            }
        }

        render_wallpaper(buffer, desktop_area);
        self.render_icons(buffer, desktop_area);
        self.render_windows(buffer, desktop_area);
        self.render_ripples(buffer, desktop_area, now);

        let entries = self.windows.taskbar_entries();
        self.taskbar.render(
            buffer,
            &entries,
            self.state.start_menu_open(),
            &self.clock,
        );

        if self.state.start_menu_open() {
            let anchor = Rect::new(self.taskbar.area().x, self.taskbar.area().y, 7, 1);
            let items = self.menu_items();
            self.start_menu.render(
                buffer,
                desktop_area,
                anchor,
                &items,
                self.state.start_menu_selected(),
            );
        }

        if self.state.shutdown_prompt_open() {
            render_shutdown_prompt(buffer, area, self.state.shutdown_confirm_selected());
        }

        if let Some(position) = self.cursor.position()
            && position.x >= 0
            && position.y >= 0
            && let Some(cell) = buffer.cell_mut((position.x as u16, position.y as u16))
        {
            cell.set_style(theme::cursor_style());
        }
    }

    fn render_icons(&self, buffer: &mut Buffer, clip: Rect) {
        for (index, icon) in self.desktop.icons().iter().enumerate() {
            let origin = self.desktop.icon_origin(index);
            let size = self.desktop.placer().cell_size;
            let Some(rect) = screen_rect(Bounds::from_parts(origin, size), clip) else {
                continue;
            };
            let glyph_x = rect.x + rect.width / 2;
            safe_set_string(buffer, clip, glyph_x, rect.y, icon.glyph, theme::icon_glyph_style());
            let label = crate::ui::truncate_to_width(&icon.label, size.width as usize);
            let label_x = rect.x
                + (rect.width.saturating_sub(label.chars().count() as u16)) / 2;
            safe_set_string(
                buffer,
                clip,
                label_x,
                rect.y + 2,
                &label,
                theme::icon_style(),
            );
        }
    }

    fn render_windows(&self, buffer: &mut Buffer, clip: Rect) {
        let active = self.windows.active_window().map(str::to_string);
        for id in self.windows.windows_by_z() {
            let Some(frame) = self.windows.frame(id) else {
                continue;
            };
            let rect = frame_to_rect(frame);
            let Some(win) = self.windows.window(id) else {
                continue;
            };
            let focused = active.as_deref() == Some(id);
            decorator::render_window(
                buffer,
                rect,
                clip,
                &win.title,
                focused,
                apps::content_lines(id),
            );
        }
    }

    fn render_ripples(&self, buffer: &mut Buffer, clip: Rect, now: Instant) {
        for (center, radius) in self.ripples.frames(now) {
            let points = if radius == 0 {
                vec![center]
            } else {
                vec![
                    Point::new(center.x - radius, center.y),
                    Point::new(center.x + radius, center.y),
                    Point::new(center.x, center.y - radius),
                    Point::new(center.x, center.y + radius),
                ]
            };
            for point in points {
                if point.x >= 0
                    && point.y >= 0
                    && rect_contains(clip, point.x as u16, point.y as u16)
                    && let Some(cell) = buffer.cell_mut((point.x as u16, point.y as u16))
                {
                    cell.set_symbol("◦");
                    cell.set_style(theme::ripple_style());
                }
            }
        }
    }

    /// Housekeeping between frames; called from the event loop tick.
    pub fn tick(&mut self, now: Instant) {
        self.ripples.prune(now);
    }
}

fn frame_to_rect(frame: Bounds) -> Rect {
    Rect::new(
        frame.x.max(0) as u16,
        frame.y.max(0) as u16,
        frame.width.max(0) as u16,
        frame.height.max(0) as u16,
    )
}

fn render_wallpaper(buffer: &mut Buffer, area: Rect) {
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                // faint wireframe grid, the closest a terminal gets to a
                // retro wallpaper
                if x % 12 == 0 && y % 6 == 0 {
                    cell.set_symbol("·");
                    cell.set_style(theme::wallpaper_grid_style());
                } else {
                    cell.set_symbol(" ");
                    cell.set_style(theme::desktop_style());
                }
            }
        }
    }
}

fn render_boot(buffer: &mut Buffer, area: Rect, lines: &[String]) {
    fill_rect(buffer, area, area, " ", theme::boot_style());
    for (index, line) in lines.iter().enumerate() {
        let y = area.y + 1 + index as u16;
        if y >= area.y + area.height {
            break;
        }
        safe_set_string(buffer, area, area.x + 2, y, line, theme::boot_style());
    }
}

fn render_shutdown_prompt(buffer: &mut Buffer, area: Rect, accept_selected: bool) {
    let width: u16 = 34;
    let height: u16 = 6;
    if area.width < width || area.height < height {
        return;
    }
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let style = theme::menu_style();
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                let symbol = if y == rect.y || y == rect.y + rect.height - 1 {
                    "─"
                } else if x == rect.x || x == rect.x + rect.width - 1 {
                    "│"
                } else {
                    " "
                };
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        }
    }
    safe_set_string(
        buffer,
        rect,
        rect.x + 2,
        rect.y + 1,
        "Shut down retrodesk?",
        style,
    );
    safe_set_string(
        buffer,
        rect,
        rect.x + 4,
        rect.y + 3,
        "[ Shut down ]",
        confirm_button_style(accept_selected),
    );
    safe_set_string(
        buffer,
        rect,
        rect.x + 20,
        rect.y + 3,
        "[ Cancel ]",
        confirm_button_style(!accept_selected),
    );
}

/// Drives the shell against a real (or test) terminal until it quits.
pub fn run_shell<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    shell: &mut Shell,
    poll_interval: Duration,
) -> Result<(), ShellError>
where
    B: Backend,
    D: InputDriver,
    ShellError: From<<B as Backend>::Error>,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    event_loop.run(|_, event| -> Result<ControlFlow, ShellError> {
        let now = Instant::now();
        match event {
            Some(event) => shell.handle_event(&event, now),
            None => {
                shell.tick(now);
                terminal.draw(|frame| shell.render(frame, now))?;
            }
        }
        if shell.should_quit() {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    })?;
    event_loop.driver().set_mouse_capture(false)?;
    shell.clock.stop();
    Ok(())
}
