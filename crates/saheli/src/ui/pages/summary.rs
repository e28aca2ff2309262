use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::panel::Panel;
use crate::domain::payload::Summary;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::pages::help_line;
use crate::ui::pages::profit::loading_line;

const LOAD_FAILED_MESSAGE: &str = "Unable to load your weekly summary. Please try again.";
const HELP_TEXT: &str = "Enter: Back to Home  Tab: navigate";

/// Weekly recap from the summary agent.
pub struct SummaryPage<'a> {
    panel: &'a Panel<Summary>,
}

impl<'a> SummaryPage<'a> {
    pub fn new(panel: &'a Panel<Summary>) -> Self {
        Self { panel }
    }
}

impl Page for SummaryPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let lines = if self.panel.is_loading() {
            vec![loading_line()]
        } else if let Some(summary) = self.panel.record() {
            summary_lines(summary)
        } else {
            vec![Line::from(Span::styled(
                LOAD_FAILED_MESSAGE,
                Style::default().fg(Color::Gray),
            ))]
        };

        let content = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue))
                .title(" This Week "),
        );
        f.render_widget(content, chunks[0]);
        f.render_widget(help_line(HELP_TEXT), chunks[1]);
    }
}

fn summary_lines(summary: &Summary) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            summary.week_summary.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if !summary.wins.is_empty() {
        lines.push(section_heading(Icon::Check, "Your Wins"));
        lines.extend(
            summary
                .wins
                .iter()
                .map(|win| Line::from(format!("  {} {win}", Icon::Check))),
        );
        lines.push(Line::from(""));
    }

    if !summary.concerns.is_empty() {
        lines.push(section_heading(Icon::Warn, "Things to Consider"));
        lines.extend(
            summary
                .concerns
                .iter()
                .map(|concern| Line::from(format!("  {} {concern}", Icon::Bullet))),
        );
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("💪 {}", summary.encouragement),
        Style::default().fg(Color::Cyan),
    )));

    lines
}

fn section_heading(icon: Icon, title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{icon} {title}"),
        Style::default()
            .fg(icon.color())
            .add_modifier(Modifier::BOLD),
    ))
}
