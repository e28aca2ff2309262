use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::panel::Panel;
use crate::domain::payload::Profit;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::pages::help_line;

const LOAD_FAILED_MESSAGE: &str = "Unable to load your business status. Please try again.";
const HELP_TEXT: &str = "Enter: Back to Home  Tab: navigate";

/// Weekly business status from the profit agent.
pub struct ProfitPage<'a> {
    panel: &'a Panel<Profit>,
}

impl<'a> ProfitPage<'a> {
    pub fn new(panel: &'a Panel<Profit>) -> Self {
        Self { panel }
    }
}

impl Page for ProfitPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let lines = if self.panel.is_loading() {
            vec![loading_line()]
        } else if let Some(profit) = self.panel.record() {
            profit_lines(profit)
        } else {
            vec![Line::from(Span::styled(
                LOAD_FAILED_MESSAGE,
                Style::default().fg(Color::Gray),
            ))]
        };

        let content = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" How You're Doing "),
            );
        f.render_widget(content, chunks[0]);
        f.render_widget(help_line(HELP_TEXT), chunks[1]);
    }
}

/// Centered spinner shown while a panel request is in flight.
pub(crate) fn loading_line() -> Line<'static> {
    Line::from(Span::styled(
        format!("{} Loading...", Icon::current_spinner()),
        Style::default().fg(Color::Cyan),
    ))
}

fn profit_lines(profit: &Profit) -> Vec<Line<'static>> {
    let mood = Icon::for_mood(profit.mood);

    vec![
        Line::from(""),
        Line::from(Span::styled(
            mood.to_string(),
            Style::default().fg(mood.color()).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            profit.visualization.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(profit.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            profit.encouragement.clone(),
            Style::default().fg(Color::Green),
        )),
    ]
}
