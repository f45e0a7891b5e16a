use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shell-level actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CycleWindows,
    ToggleStartMenu,
    CloseOverlay,
    OpenGame,
    OpenAbout,
    OpenDownloads,
    OpenFumo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.modifiers
    }
}

#[derive(Debug)]
pub struct Keybindings {
    entries: Vec<(KeyCombo, Action)>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            entries: vec![
                (
                    KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
                    Action::Quit,
                ),
                (
                    KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE),
                    Action::CycleWindows,
                ),
                (
                    KeyCombo::new(KeyCode::F(1), KeyModifiers::NONE),
                    Action::ToggleStartMenu,
                ),
                (
                    KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE),
                    Action::CloseOverlay,
                ),
                (
                    KeyCombo::new(KeyCode::Char('1'), KeyModifiers::CONTROL),
                    Action::OpenGame,
                ),
                (
                    KeyCombo::new(KeyCode::Char('2'), KeyModifiers::CONTROL),
                    Action::OpenAbout,
                ),
                (
                    KeyCombo::new(KeyCode::Char('3'), KeyModifiers::CONTROL),
                    Action::OpenDownloads,
                ),
                (
                    KeyCombo::new(KeyCode::Char('4'), KeyModifiers::CONTROL),
                    Action::OpenFumo,
                ),
            ],
        }
    }
}

impl Keybindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.entries
            .iter()
            .find(|(combo, _)| combo.matches(key))
            .map(|(_, action)| *action)
    }
}
