use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::screen::{NAV_SCREENS, Screen};
use crate::ui::Component;

/// Bottom navigation bar shared by the non-conversational pages.
pub struct NavBar {
    active: Screen,
}

impl NavBar {
    /// Creates a nav bar highlighting the entry that owns `screen`.
    pub fn new(screen: Screen) -> Self {
        Self {
            active: screen.nav_anchor(),
        }
    }
}

impl Component for NavBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Line::from(nav_spans(self.active)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(paragraph, area);
    }
}

fn nav_label(screen: Screen) -> &'static str {
    match screen {
        Screen::History => "History",
        Screen::Settings => "Settings",
        _ => "Ghar",
    }
}

fn nav_spans(active: Screen) -> Vec<Span<'static>> {
    NAV_SCREENS
        .iter()
        .map(|screen| {
            let label = format!("   {}   ", nav_label(*screen));
            if *screen == active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
            } else {
                Span::styled(label, Style::default().fg(Color::Gray))
            }
        })
        .collect()
}
