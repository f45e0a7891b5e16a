use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use retrodesk::runner::{Shell, ShellOptions};

fn shell() -> (Shell, Terminal<TestBackend>) {
    let shell = Shell::new(ShellOptions {
        skip_boot: true,
        effects: true,
    });
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    (shell, terminal)
}

fn draw(shell: &mut Shell, terminal: &mut Terminal<TestBackend>, now: Instant) {
    terminal.draw(|frame| shell.render(frame, now)).unwrap();
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag_to(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn release(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

#[test]
fn boot_splash_skips_on_keypress() {
    let mut shell = Shell::new(ShellOptions {
        skip_boot: false,
        effects: true,
    });
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let t0 = Instant::now();
    assert!(shell.booting());
    assert!(!shell.clock.is_running());

    shell.handle_event(&key(KeyCode::Char(' '), KeyModifiers::NONE), t0);
    draw(&mut shell, &mut terminal, t0);
    assert!(!shell.booting());
    assert!(shell.clock.is_running());
}

#[test]
fn header_drag_moves_the_window_with_the_pointer() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("about");
    draw(&mut shell, &mut terminal, t0);

    let frame = shell.windows.frame("about").unwrap();
    let grab = (frame.x as u16 + 3, frame.y as u16 + 1);
    shell.handle_event(&press(grab.0, grab.1), t0);
    shell.handle_event(&drag_to(grab.0 + 6, grab.1 + 4), t0);
    shell.handle_event(&release(grab.0 + 6, grab.1 + 4), t0);

    let moved = shell.windows.frame("about").unwrap();
    assert_eq!(moved.x, frame.x + 6);
    assert_eq!(moved.y, frame.y + 4);
    // drag focused the window
    assert_eq!(shell.windows.active_window(), Some("about"));
}

#[test]
fn corner_resize_grows_the_window() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("about");
    draw(&mut shell, &mut terminal, t0);

    let frame = shell.windows.frame("about").unwrap();
    let corner = (
        (frame.x + frame.width - 1) as u16,
        (frame.y + frame.height - 1) as u16,
    );
    shell.handle_event(&press(corner.0, corner.1), t0);
    shell.handle_event(&drag_to(corner.0 + 5, corner.1 + 2), t0);
    shell.handle_event(&release(corner.0 + 5, corner.1 + 2), t0);

    let resized = shell.windows.frame("about").unwrap();
    assert_eq!(resized.width, frame.width + 5);
    assert_eq!(resized.height, frame.height + 2);
    assert_eq!((resized.x, resized.y), (frame.x, frame.y));
}

#[test]
fn header_buttons_minimize_maximize_and_close() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("about");
    draw(&mut shell, &mut terminal, t0);

    let frame = shell.windows.frame("about").unwrap();
    let header_row = frame.y as u16 + 1;
    let right = (frame.x + frame.width - 1) as u16;

    shell.handle_event(&press(right - 4, header_row), t0);
    assert!(shell.windows.window("about").unwrap().maximized);

    // controls move with the maximized frame
    let max_frame = shell.windows.frame("about").unwrap();
    let max_right = (max_frame.x + max_frame.width - 1) as u16;
    let max_header = max_frame.y as u16 + 1;
    shell.handle_event(&press(max_right - 4, max_header), t0);
    assert!(!shell.windows.window("about").unwrap().maximized);
    assert_eq!(shell.windows.frame("about").unwrap(), frame);

    shell.handle_event(&press(right - 6, header_row), t0);
    assert!(shell.windows.window("about").unwrap().minimized);

    shell.windows.restore_window("about");
    shell.handle_event(&press(right - 2, header_row), t0);
    assert!(!shell.windows.is_open("about"));
}

#[test]
fn taskbar_button_restores_a_minimized_window() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("about");
    shell.windows.minimize_window("about");
    draw(&mut shell, &mut terminal, t0);

    // first window button sits just right of the start button
    shell.handle_event(&press(9, 23), t0);
    let win = shell.windows.window("about").unwrap();
    assert!(!win.minimized);
    assert_eq!(shell.windows.active_window(), Some("about"));
}

#[test]
fn start_menu_launches_apps_by_click() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    draw(&mut shell, &mut terminal, t0);

    shell.handle_event(&press(1, 23), t0);
    assert!(shell.state().start_menu_open());
    draw(&mut shell, &mut terminal, t0);

    // menu is anchored above the start button; item 0 is the first app
    shell.handle_event(&press(2, 17), t0);
    assert!(!shell.state().start_menu_open());
    assert!(shell.windows.is_open("game"));
}

#[test]
fn reopened_menu_ignores_clicks_until_redrawn() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    draw(&mut shell, &mut terminal, t0);

    // open, render, close: the view has seen one appearance
    shell.handle_event(&press(1, 23), t0);
    draw(&mut shell, &mut terminal, t0);
    shell.handle_event(&key(KeyCode::Esc, KeyModifiers::NONE), t0);
    assert!(!shell.state().start_menu_open());

    // reopen and click where item 0 used to be, before any redraw
    shell.handle_event(&key(KeyCode::F(1), KeyModifiers::NONE), t0);
    shell.handle_event(&press(2, 17), t0);
    assert!(!shell.windows.is_open("game"));
    assert!(shell.windows.is_empty());
}

#[test]
fn start_menu_keyboard_flow_reaches_shutdown_prompt() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("about");
    draw(&mut shell, &mut terminal, t0);

    shell.handle_event(&key(KeyCode::F(1), KeyModifiers::NONE), t0);
    assert!(shell.state().start_menu_open());
    // last item is Shut Down
    for _ in 0..4 {
        shell.handle_event(&key(KeyCode::Down, KeyModifiers::NONE), t0);
    }
    shell.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), t0);
    assert!(shell.state().shutdown_prompt_open());

    // declining leaves everything untouched
    shell.handle_event(&key(KeyCode::Esc, KeyModifiers::NONE), t0);
    assert!(!shell.state().shutdown_prompt_open());
    assert!(!shell.should_quit());
    assert!(shell.windows.is_open("about"));

    // accepting closes the windows and quits
    shell.handle_event(&key(KeyCode::F(1), KeyModifiers::NONE), t0);
    for _ in 0..4 {
        shell.handle_event(&key(KeyCode::Down, KeyModifiers::NONE), t0);
    }
    shell.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), t0);
    shell.handle_event(&key(KeyCode::Tab, KeyModifiers::NONE), t0);
    shell.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), t0);
    assert!(shell.should_quit());
    assert!(shell.windows.is_empty());
}

#[test]
fn tab_cycles_and_ctrl_q_quits() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("game");
    shell.windows.open_window("about");
    shell.windows.open_window("download");
    shell.windows.focus_window("about");
    draw(&mut shell, &mut terminal, t0);

    shell.handle_event(&key(KeyCode::Tab, KeyModifiers::NONE), t0);
    assert_eq!(shell.windows.active_window(), Some("download"));

    shell.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL), t0);
    assert!(shell.should_quit());
}

#[test]
fn terminal_resize_keeps_windows_reachable() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("game");
    draw(&mut shell, &mut terminal, t0);

    shell.handle_event(&Event::Resize(50, 18), t0);
    let frame = shell.windows.frame("game").unwrap();
    assert!(frame.x >= 0 && frame.y >= 0);
    assert!(frame.x + frame.width <= 50);
    // viewport excludes the taskbar row
    assert!(frame.y + frame.height <= 17);
}

#[test]
fn body_click_focuses_the_window_under_the_pointer() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    shell.windows.open_window("game");
    shell.windows.open_window("about");
    draw(&mut shell, &mut terminal, t0);

    // park the two windows apart so the click is unambiguous
    shell.windows.set_window_position("game", retrodesk::window::Point::new(0, 0));
    shell
        .windows
        .set_window_position("about", retrodesk::window::Point::new(40, 8));
    let frame = shell.windows.frame("game").unwrap();
    let body = (frame.x as u16 + 4, frame.y as u16 + 3);
    shell.handle_event(&press(body.0, body.1), t0);
    assert_eq!(shell.windows.active_window(), Some("game"));
}

#[test]
fn clicks_spawn_at_most_six_ripples() {
    let (mut shell, mut terminal) = shell();
    let t0 = Instant::now();
    draw(&mut shell, &mut terminal, t0);
    for i in 0..12 {
        shell.handle_event(&press(60 + i % 4, 10), t0);
        shell.handle_event(&release(60 + i % 4, 10), t0);
    }
    // rendering after the spam must not panic and the shell stays alive
    draw(&mut shell, &mut terminal, t0 + Duration::from_millis(400));
    assert!(!shell.should_quit());
}
