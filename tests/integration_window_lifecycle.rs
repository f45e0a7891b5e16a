use retrodesk::constants::{OPEN_JITTER, Z_ORDER_FLOOR};
use retrodesk::window::{DragController, Point, Size, WindowManager};

fn desktop_1080p() -> WindowManager {
    let mut wm = WindowManager::new(Size::new(1920, 1080));
    wm.register_app("game", "Retro Game", Size::new(600, 500));
    wm.register_app("about", "About", Size::new(500, 400));
    wm.register_app("download", "Downloads", Size::new(550, 420));
    wm
}

#[test]
fn opening_about_spawns_centered_focused_and_unminimized() {
    let mut wm = desktop_1080p();
    wm.open_window("about");
    let win = wm.window("about").expect("about is open");
    assert!((win.position.x - 710).abs() <= OPEN_JITTER);
    assert!((win.position.y - 340).abs() <= OPEN_JITTER);
    assert!(!win.minimized);
    assert!(!win.maximized);
    assert!(win.z_order() > Z_ORDER_FLOOR);
    assert_eq!(wm.active_window(), Some("about"));
}

#[test]
fn double_open_focuses_instead_of_duplicating() {
    let mut wm = desktop_1080p();
    wm.open_window("about");
    wm.open_window("game");
    let z_before = wm.window("about").unwrap().z_order();
    wm.open_window("about");
    assert_eq!(wm.len(), 2);
    assert_eq!(wm.taskbar_entries().len(), 2);
    assert_eq!(wm.active_window(), Some("about"));
    assert!(wm.window("about").unwrap().z_order() > z_before);
}

#[test]
fn minimize_restore_round_trip_via_open() {
    let mut wm = desktop_1080p();
    wm.open_window("about");
    let frame = wm.frame("about").unwrap();
    wm.minimize_window("about");
    assert!(wm.window("about").unwrap().minimized);
    assert!(wm.frame("about").is_none(), "minimized windows have no frame");
    assert!(wm.windows_by_z().is_empty());

    wm.open_window("about");
    assert!(!wm.window("about").unwrap().minimized);
    assert_eq!(wm.frame("about"), Some(frame), "geometry survives minimize");
}

#[test]
fn maximize_restores_exact_bounds_even_after_focus_churn() {
    let mut wm = desktop_1080p();
    wm.open_window("about");
    wm.open_window("game");
    let original = wm.frame("about").unwrap();

    wm.toggle_maximize("about");
    assert_eq!(wm.frame("about"), Some(wm.maximized_bounds()));
    wm.focus_window("game");
    wm.focus_window("about");
    wm.toggle_maximize("about");
    assert_eq!(wm.frame("about"), Some(original));
}

#[test]
fn closing_the_top_window_hands_focus_to_the_one_below() {
    let mut wm = desktop_1080p();
    wm.open_window("game");
    wm.open_window("about");
    wm.open_window("download");
    wm.close_window("download");
    assert_eq!(wm.active_window(), Some("about"));
    assert_eq!(wm.windows_by_z().last().copied(), Some("about"));
    wm.close_window("about");
    wm.close_window("game");
    assert_eq!(wm.active_window(), None);
    assert!(wm.is_empty());
}

#[test]
fn cycle_scenario_b_to_c_then_wraps_to_a() {
    let mut wm = desktop_1080p();
    wm.open_window("game"); // a
    wm.open_window("about"); // b
    wm.open_window("download"); // c
    wm.focus_window("about");

    wm.cycle_windows();
    assert_eq!(wm.active_window(), Some("download"));
    wm.cycle_windows();
    assert_eq!(wm.active_window(), Some("game"));
}

#[test]
fn active_window_always_carries_the_top_z() {
    let mut wm = desktop_1080p();
    let script: &[&dyn Fn(&mut WindowManager)] = &[
        &|wm| wm.open_window("game"),
        &|wm| wm.open_window("about"),
        &|wm| wm.open_window("download"),
        &|wm| wm.focus_window("game"),
        &|wm| wm.minimize_window("game"),
        &|wm| wm.cycle_windows(),
        &|wm| wm.toggle_maximize("about"),
        &|wm| wm.close_window("download"),
        &|wm| wm.open_window("game"),
        &|wm| wm.cycle_windows(),
    ];
    for step in script {
        step(&mut wm);
        let stack = wm.windows_by_z();
        match wm.active_window() {
            Some(active) => assert_eq!(stack.last().copied(), Some(active)),
            None => assert!(stack.is_empty()),
        }
    }
}

#[test]
fn dragging_an_open_window_never_escapes_the_viewport() {
    let mut wm = desktop_1080p();
    wm.open_window("about");
    let origin = wm.window("about").unwrap().position;
    let mut drag = DragController::new();
    drag.start_drag(&mut wm, "about", Point::new(origin.x + 10, origin.y));

    let wild_path = [
        Point::new(5000, 5000),
        Point::new(-900, 200),
        Point::new(200, -900),
        Point::new(1919, 1079),
        Point::new(0, 0),
    ];
    for pointer in wild_path {
        drag.on_pointer_move(&mut wm, pointer);
        let win = wm.window("about").unwrap();
        assert!(win.position.x >= 0 && win.position.y >= 0);
        assert!(win.position.x + win.size.width <= 1920);
        assert!(win.position.y + win.size.height <= 1080);
    }
    drag.stop_drag();
}

#[test]
fn unknown_ids_leave_every_operation_untouched() {
    let mut wm = desktop_1080p();
    wm.open_window("game");
    let snapshot = wm.frame("game").unwrap();

    wm.open_window("paint");
    wm.focus_window("paint");
    wm.minimize_window("paint");
    wm.restore_window("paint");
    wm.toggle_maximize("paint");
    wm.close_window("paint");

    assert_eq!(wm.len(), 1);
    assert_eq!(wm.active_window(), Some("game"));
    assert_eq!(wm.frame("game"), Some(snapshot));
}
