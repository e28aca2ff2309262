//! Terminal rendering: pages, shared components and the screen router.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;

pub mod components;
pub mod icon;
pub mod pages;
pub mod router;
pub mod text_util;

/// Full-screen content owned by one [`crate::domain::screen::Screen`].
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// Reusable widget drawn inside a page or on top of it.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Draws the whole frame for the current app state.
pub fn render(f: &mut Frame, app: &App) {
    router::route_frame(f, app);
}
