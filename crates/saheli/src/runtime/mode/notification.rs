use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;

/// Handles key input while a notification overlay is showing.
///
/// Only dismissal keys are accepted; everything else is swallowed.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.notifications_mut().dismiss();
    }

    EventResult::Continue
}
