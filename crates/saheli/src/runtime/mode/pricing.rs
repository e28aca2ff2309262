use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::screen::Screen;
use crate::runtime::EventResult;
use crate::runtime::mode::{handle_nav_key, is_plain_char_key, typed_char};

/// Handles key input on the pricing page.
///
/// While advice is shown, `m` asks for more advice; otherwise keys edit the
/// product description.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if handle_nav_key(app, key) {
        return EventResult::Continue;
    }

    if key.code == KeyCode::Esc {
        app.navigate(Screen::Home);

        return EventResult::Continue;
    }

    if app.pricing().record().is_some() {
        if is_plain_char_key(key, 'm') {
            app.restart_pricing();
        }

        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Enter => app.request_pricing_advice(),
        KeyCode::Backspace => app.pop_pricing_input(),
        _ => {
            if let Some(character) = typed_char(key) {
                app.push_pricing_input(character);
            }
        }
    }

    EventResult::Continue
}
