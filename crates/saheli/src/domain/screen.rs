//! Screen definitions and bottom-navigation ordering.

use crate::domain::agent::AgentRole;

/// Every page the companion can show. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Home,
    Sales,
    Expense,
    Profit,
    Summary,
    Pricing,
    History,
    Settings,
}

impl Screen {
    /// Returns the page header label.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Sales => "Record Sale",
            Screen::Expense => "Add Expense",
            Screen::Profit => "How am I doing?",
            Screen::Summary => "Weekly Summary",
            Screen::Pricing => "Pricing Advice",
            Screen::History => "History",
            Screen::Settings => "Settings",
        }
    }

    /// Returns the agent a conversational screen talks to.
    pub fn conversation_role(self) -> Option<AgentRole> {
        match self {
            Screen::Sales => Some(AgentRole::Sales),
            Screen::Expense => Some(AgentRole::Expense),
            _ => None,
        }
    }

    /// Returns whether the screen shows the bottom navigation bar.
    pub fn shows_nav_bar(self) -> bool {
        self.conversation_role().is_none()
    }

    /// Returns the bottom-navigation entry highlighted while this screen is
    /// active.
    pub fn nav_anchor(self) -> Screen {
        match self {
            Screen::History => Screen::History,
            Screen::Settings => Screen::Settings,
            _ => Screen::Home,
        }
    }

    /// Cycles to the next bottom-navigation entry.
    #[must_use]
    pub fn next_nav(self) -> Self {
        match self.nav_anchor() {
            Screen::History => Screen::Settings,
            Screen::Settings => Screen::Home,
            _ => Screen::History,
        }
    }

    /// Cycles to the previous bottom-navigation entry.
    #[must_use]
    pub fn previous_nav(self) -> Self {
        match self.nav_anchor() {
            Screen::History => Screen::Home,
            Screen::Settings => Screen::History,
            _ => Screen::Settings,
        }
    }
}

/// Entries of the bottom navigation bar in display order.
pub const NAV_SCREENS: [Screen; 3] = [Screen::Home, Screen::History, Screen::Settings];
