//! Per-screen key handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::domain::screen::Screen;
use crate::runtime::EventResult;

pub(crate) mod conversation;
pub(crate) mod home;
pub(crate) mod notification;
pub(crate) mod panel;
pub(crate) mod pricing;
pub(crate) mod settings;

/// Dispatches a key to the handler of the active screen.
pub(crate) fn handle_screen(app: &mut App, key: KeyEvent) -> EventResult {
    match app.screen() {
        Screen::Home => home::handle(app, key),
        Screen::Sales | Screen::Expense => conversation::handle(app, key),
        Screen::Profit | Screen::Summary | Screen::History => panel::handle(app, key),
        Screen::Pricing => pricing::handle(app, key),
        Screen::Settings => settings::handle(app, key),
    }
}

/// Returns true for Ctrl-C, which quits from every screen.
pub(crate) fn is_quit_chord(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Returns true when the key event is a plain character key with no
/// modifiers.
pub(crate) fn is_plain_char_key(key: KeyEvent, character: char) -> bool {
    key.code == KeyCode::Char(character) && key.modifiers == KeyModifiers::NONE
}

/// Returns the typed character for text inputs, accepting shifted keys.
pub(crate) fn typed_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(character)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(character)
        }
        _ => None,
    }
}

/// Moves along the bottom navigation bar for Tab and `BackTab`.
///
/// Returns `true` when the key was consumed.
pub(crate) fn handle_nav_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => app.navigate(app.screen().next_nav()),
        KeyCode::BackTab => app.navigate(app.screen().previous_nav()),
        _ => return false,
    }

    true
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_char_accepts_shifted_characters() {
        // Arrange
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);

        // Act
        let character = typed_char(key);

        // Assert
        assert_eq!(character, Some('A'));
    }

    #[test]
    fn test_typed_char_rejects_control_chords() {
        // Arrange
        let key = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL);

        // Act
        let character = typed_char(key);

        // Assert
        assert_eq!(character, None);
    }

    #[test]
    fn test_is_quit_chord_matches_ctrl_c_only() {
        // Arrange
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);

        // Act & Assert
        assert!(is_quit_chord(ctrl_c));
        assert!(!is_quit_chord(plain_c));
    }
}
