use chrono::{DateTime, Local};

/// Taskbar clock. Purely decorative; the window manager never reads it.
#[derive(Debug, Default)]
pub struct Clock {
    running: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// "HH:MM DD/MM/YYYY", or a placeholder while stopped (during boot).
    pub fn text(&self) -> String {
        if !self.running {
            return "--:-- --/--/----".to_string();
        }
        format_stamp(&Local::now())
    }
}

fn format_stamp(stamp: &DateTime<Local>) -> String {
    stamp.format("%H:%M %d/%m/%Y").to_string()
}
