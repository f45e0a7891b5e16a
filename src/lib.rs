pub mod apps;
pub mod boot;
pub mod clock;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod effects;
pub mod errors;
pub mod event_loop;
pub mod keybindings;
pub mod runner;
pub mod start_menu;
pub mod state;
pub mod taskbar;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
