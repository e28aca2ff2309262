use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::App;
use crate::app::conversation::ConversationController;
use crate::domain::screen::Screen;
use crate::ui::components::nav_bar::NavBar;
use crate::ui::components::notification_overlay::NotificationOverlay;
use crate::ui::components::status_bar::StatusBar;
use crate::ui::{Component, Page, pages};

const NAV_BAR_HEIGHT: u16 = 2;

/// Draws the status bar, the active page, the bottom navigation and, on top
/// of everything, the front notification.
pub fn route_frame(f: &mut Frame, app: &App) {
    let screen = app.screen();
    let nav_bar_height = if screen.shows_nav_bar() {
        NAV_BAR_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(nav_bar_height),
        ])
        .split(f.area());

    StatusBar::new(screen.title())
        .is_loading(is_screen_loading(app))
        .render(f, chunks[0]);
    render_page(f, chunks[1], app);
    if screen.shows_nav_bar() {
        NavBar::new(screen).render(f, chunks[2]);
    }

    if let Some(notification) = app.notifications().front() {
        let queued = app.notifications().len().saturating_sub(1);
        NotificationOverlay::new(notification, queued).render(f, f.area());
    }
}

fn render_page(f: &mut Frame, area: Rect, app: &App) {
    match app.screen() {
        Screen::Home => pages::home::HomePage::new(app.visible_reminder()).render(f, area),
        Screen::Sales | Screen::Expense => {
            if let Some(conversation) = app.conversation() {
                pages::conversation::ConversationPage::new(conversation).render(f, area);
            }
        }
        Screen::Profit => pages::profit::ProfitPage::new(app.profit()).render(f, area),
        Screen::Summary => pages::summary::SummaryPage::new(app.summary()).render(f, area),
        Screen::Pricing => {
            pages::pricing::PricingPage::new(app.pricing(), app.pricing_input()).render(f, area);
        }
        Screen::History => pages::history::HistoryPage::new(app.history()).render(f, area),
        Screen::Settings => {
            pages::settings::SettingsPage::new(app.settings(), app.settings_selection())
                .render(f, area);
        }
    }
}

fn is_screen_loading(app: &App) -> bool {
    match app.screen() {
        Screen::Home => false,
        Screen::Sales | Screen::Expense => app
            .conversation()
            .is_some_and(ConversationController::is_loading),
        Screen::Profit => app.profit().is_loading(),
        Screen::Summary => app.summary().is_loading(),
        Screen::Pricing => app.pricing().is_loading(),
        Screen::History | Screen::Settings => false,
    }
}
