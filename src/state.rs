/// UI flags that sit outside the window manager: overlays and toggles the
/// shell consults while routing events.
#[derive(Debug, Clone, Copy)]
pub struct ShellState {
    start_menu_open: bool,
    start_menu_selected: usize,
    shutdown_prompt_open: bool,
    shutdown_confirm_selected: bool,
    effects_enabled: bool,
}

impl ShellState {
    pub fn new(effects_enabled: bool) -> Self {
        Self {
            start_menu_open: false,
            start_menu_selected: 0,
            shutdown_prompt_open: false,
            shutdown_confirm_selected: false,
            effects_enabled,
        }
    }

    pub fn start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    pub fn open_start_menu(&mut self) {
        self.start_menu_open = true;
        self.start_menu_selected = 0;
    }

    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    pub fn toggle_start_menu(&mut self) {
        if self.start_menu_open {
            self.close_start_menu();
        } else {
            self.open_start_menu();
        }
    }

    pub fn start_menu_selected(&self) -> usize {
        self.start_menu_selected
    }

    pub fn set_start_menu_selected(&mut self, selected: usize) {
        self.start_menu_selected = selected;
    }

    pub fn shutdown_prompt_open(&self) -> bool {
        self.shutdown_prompt_open
    }

    pub fn open_shutdown_prompt(&mut self) {
        self.shutdown_prompt_open = true;
        // default to the safe choice
        self.shutdown_confirm_selected = false;
    }

    pub fn close_shutdown_prompt(&mut self) {
        self.shutdown_prompt_open = false;
    }

    pub fn shutdown_confirm_selected(&self) -> bool {
        self.shutdown_confirm_selected
    }

    pub fn toggle_shutdown_choice(&mut self) {
        self.shutdown_confirm_selected = !self.shutdown_confirm_selected;
    }

    pub fn effects_enabled(&self) -> bool {
        self.effects_enabled
    }
}
