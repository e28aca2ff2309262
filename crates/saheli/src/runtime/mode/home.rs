use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::screen::Screen;
use crate::runtime::EventResult;
use crate::runtime::mode::{handle_nav_key, is_plain_char_key};

/// Handles key input on the home page.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if handle_nav_key(app, key) {
        return EventResult::Continue;
    }
    let KeyCode::Char(character) = key.code else {
        return EventResult::Continue;
    };
    if !is_plain_char_key(key, character) {
        return EventResult::Continue;
    }

    match character {
        '1' => app.navigate(Screen::Sales),
        '2' => app.navigate(Screen::Expense),
        '3' => app.navigate(Screen::Profit),
        '4' => app.navigate(Screen::Summary),
        'p' => app.navigate(Screen::Pricing),
        'h' => app.navigate(Screen::History),
        's' => app.navigate(Screen::Settings),
        'v' => app.announce_voice_unavailable(),
        'x' => app.dismiss_reminder(),
        'q' => return EventResult::Quit,
        _ => {}
    }

    EventResult::Continue
}
