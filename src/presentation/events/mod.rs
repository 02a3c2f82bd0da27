//! Key classification shared by screens and dialogs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Terminal key event classifier.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key dismisses an alert.
    #[must_use]
    pub fn is_dismiss_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
    }

    /// Checks if key accepts a confirmation.
    #[must_use]
    pub fn is_confirm_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Char('y' | 'Y'))
    }

    /// Checks if key rejects a confirmation.
    #[must_use]
    pub fn is_cancel_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Esc | KeyCode::Char('n' | 'N'))
    }

    /// Returns the character typed with Alt held, lower-cased.
    #[must_use]
    pub fn alt_shortcut(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(c.to_ascii_lowercase())
            }
            _ => None,
        }
    }
}
