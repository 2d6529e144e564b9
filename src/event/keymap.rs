use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key plus the exact modifiers it must be pressed with
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);

    // Input
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CLEAR_QUERY: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    // Suggestions and cards
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_must_match_exactly() {
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&plain_c));
        assert!(DefaultKeymap::FORCE_QUIT.matches(&ctrl_c));
    }
}
