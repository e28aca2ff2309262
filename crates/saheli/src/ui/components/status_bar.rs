use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::icon::Icon;

/// Top status bar showing the app version and the active page.
pub struct StatusBar {
    is_loading: bool,
    title: &'static str,
}

impl StatusBar {
    pub fn new(title: &'static str) -> Self {
        Self {
            is_loading: false,
            title,
        }
    }

    /// Shows a spinner while an agent request is pending.
    #[must_use]
    pub fn is_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" Saheli {}", env!("CARGO_PKG_VERSION")),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.title),
        ];
        if self.is_loading {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                Icon::current_spinner().to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }

        let status_bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
