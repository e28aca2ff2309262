use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::screen::Screen;
use crate::runtime::EventResult;
use crate::runtime::mode::handle_nav_key;

/// Handles key input on the read-only pages: profit, summary and history.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if handle_nav_key(app, key) {
        return EventResult::Continue;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
        app.navigate(Screen::Home);
    }

    EventResult::Continue
}
