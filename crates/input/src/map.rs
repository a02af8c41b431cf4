//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Action;

/// Map a key to a game action, ignoring the event kind.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Action::MoveDown),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Action::Rotate),
        KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Hold),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Press-only filter in front of [`map_key`].
///
/// Terminals that report key kinds send `Repeat` while a key is held; those
/// and `Release` events are dropped. Terminals without kind reporting only
/// ever send `Press`, and may still auto-repeat; for them a held key is
/// recognised by the same code arriving again with no other key in between
/// within `repeat_window_ms`.
#[derive(Debug, Clone)]
pub struct KeyFilter {
    last: Option<(KeyCode, u64)>,
    repeat_window_ms: u64,
}

/// Terminal auto-repeat typically fires every 30-50ms once it starts
const DEFAULT_REPEAT_WINDOW_MS: u64 = 60;

impl KeyFilter {
    pub fn new() -> Self {
        Self::with_repeat_window_ms(DEFAULT_REPEAT_WINDOW_MS)
    }

    pub fn with_repeat_window_ms(repeat_window_ms: u64) -> Self {
        Self {
            last: None,
            repeat_window_ms,
        }
    }

    /// Feed a key event observed at `now_ms`; returns the action for an
    /// initial press.
    pub fn accept(&mut self, key: KeyEvent, now_ms: u64) -> Option<Action> {
        match key.kind {
            KeyEventKind::Press => {}
            KeyEventKind::Repeat => {
                self.last = Some((key.code, now_ms));
                return None;
            }
            KeyEventKind::Release => {
                self.last = None;
                return None;
            }
        }

        let repeated = matches!(
            self.last,
            Some((code, at)) if code == key.code && now_ms.saturating_sub(at) < self.repeat_window_ms
        );
        self.last = Some((key.code, now_ms));
        if repeated {
            return None;
        }

        map_key(key)
    }
}

impl Default for KeyFilter {
    fn default() -> Self {
        Self::new()
    }
}
