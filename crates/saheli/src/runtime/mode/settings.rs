use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::screen::Screen;
use crate::runtime::EventResult;
use crate::runtime::mode::handle_nav_key;

/// Handles key input on the settings page.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if handle_nav_key(app, key) {
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_setting(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_setting(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_setting(),
        KeyCode::Esc | KeyCode::Char('q') => app.navigate(Screen::Home),
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::domain::settings::{Language, SettingsField};
    use crate::infra::transport::MockAgentTransport;
    use crate::runtime::mode::test_support::new_test_app;

    #[tokio::test]
    async fn test_handle_enter_on_language_cycles_language() {
        // Arrange
        let mut app = new_test_app(MockAgentTransport::new());
        app.navigate(Screen::Settings);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        assert_eq!(app.settings().language, Language::Hindi.next());
    }

    #[tokio::test]
    async fn test_handle_k_wraps_to_last_row_and_space_toggles() {
        // Arrange
        let mut app = new_test_app(MockAgentTransport::new());
        app.navigate(Screen::Settings);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE));
        handle(&mut app, KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));

        // Assert
        assert_eq!(app.settings_selection(), SettingsField::WeeklySummary);
        assert!(!app.settings().weekly_summary);
    }
}
