//! Keyboard input.
//!
//! Terminals only report key presses (and auto-repeats), not held keys, so a
//! frame's input is every action whose key was seen since the previous frame.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::{HashMap, HashSet};
use std::io;
use std::time::Duration;

use crate::game::types::{Action, Side};

/// Key to action mapping.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (KeyCode::Char('w'), Action::Up(Side::Left)),
            (KeyCode::Char('s'), Action::Down(Side::Left)),
            (KeyCode::Up, Action::Up(Side::Right)),
            (KeyCode::Down, Action::Down(Side::Right)),
            (KeyCode::Char('r'), Action::Restart),
            (KeyCode::Char('q'), Action::Quit),
            (KeyCode::Esc, Action::Quit),
        ]);
        Self { keys }
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char(c) => self.keys.get(&KeyCode::Char(c.to_ascii_lowercase())).copied(),
            code => self.keys.get(&code).copied(),
        }
    }
}

/// Actions requested during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    actions: HashSet<Action>,
}

impl InputFrame {
    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn insert(&mut self, action: Action) {
        self.actions.insert(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn record(&mut self, bindings: &KeyBindings, key: &KeyEvent) {
        // Windows also reports releases.
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(action) = bindings.action_for(key) {
            self.insert(action);
        }
    }
}

impl<const N: usize> From<[Action; N]> for InputFrame {
    fn from(actions: [Action; N]) -> Self {
        Self { actions: HashSet::from(actions) }
    }
}

/// Drain every pending terminal event into an [`InputFrame`].
/// Returns once no event arrives within `poll_interval`.
pub fn collect_input(bindings: &KeyBindings, poll_interval: Duration) -> io::Result<InputFrame> {
    let mut frame = InputFrame::default();

    while event::poll(poll_interval)? {
        if let Event::Key(key) = event::read()? {
            frame.record(bindings, &key);
        }
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(&press(KeyCode::Char('w'))), Some(Action::Up(Side::Left)));
        assert_eq!(bindings.action_for(&press(KeyCode::Char('s'))), Some(Action::Down(Side::Left)));
        assert_eq!(bindings.action_for(&press(KeyCode::Up)), Some(Action::Up(Side::Right)));
        assert_eq!(bindings.action_for(&press(KeyCode::Down)), Some(Action::Down(Side::Right)));
        assert_eq!(bindings.action_for(&press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(bindings.action_for(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_not() {
        let bindings = KeyBindings::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.action_for(&ctrl_c), Some(Action::Quit));
        assert_eq!(bindings.action_for(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_uppercase_keys_match() {
        let bindings = KeyBindings::default();
        let shifted = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(bindings.action_for(&shifted), Some(Action::Up(Side::Left)));
    }

    #[test]
    fn test_record_ignores_releases() {
        let bindings = KeyBindings::default();
        let mut frame = InputFrame::default();

        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        frame.record(&bindings, &release);
        assert!(frame.is_empty());

        frame.record(&bindings, &press(KeyCode::Up));
        frame.record(&bindings, &press(KeyCode::Char('s')));
        assert_eq!(frame, InputFrame::from([Action::Up(Side::Right), Action::Down(Side::Left)]));
    }
}
