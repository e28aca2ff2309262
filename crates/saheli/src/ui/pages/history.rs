use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::domain::history::{HistoryItem, HistoryKind};
use crate::ui::Page;
use crate::ui::pages::help_line;
use crate::ui::text_util::gap_between;

const EMPTY_MESSAGE: &str = "No history yet. Start recording your sales and expenses!";
const HELP_TEXT: &str = "Tab: navigate  Esc: Back to Home";

/// Recent sales and expenses.
pub struct HistoryPage<'a> {
    items: &'a [HistoryItem],
}

impl<'a> HistoryPage<'a> {
    pub fn new(items: &'a [HistoryItem]) -> Self {
        Self { items }
    }
}

impl Page for HistoryPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);
        let row_width = usize::from(chunks[0].width.saturating_sub(4));

        let lines = if self.items.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(Color::Gray)))
                    .alignment(Alignment::Center),
            ]
        } else {
            self.items
                .iter()
                .flat_map(|item| item_lines(item, row_width))
                .collect()
        };

        let history = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" History "),
        );
        f.render_widget(history, chunks[0]);
        f.render_widget(help_line(HELP_TEXT), chunks[1]);
    }
}

fn item_lines(item: &HistoryItem, row_width: usize) -> [Line<'static>; 3] {
    let amount_color = match item.kind {
        HistoryKind::Sale => Color::Green,
        HistoryKind::Expense => Color::LightRed,
    };
    let amount = item.signed_amount();
    let gap = gap_between(&item.description, &amount, row_width);

    [
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                item.description.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(gap),
            Span::styled(
                amount,
                Style::default()
                    .fg(amount_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", item.date),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::sample_history;
    use crate::ui::pages::test_support::render_page_text;

    #[test]
    fn test_history_page_render_lists_signed_amounts() {
        // Arrange
        let items = sample_history();
        let mut page = HistoryPage::new(&items);

        // Act
        let text = render_page_text(&mut page, 60, 16);

        // Assert
        assert!(text.contains("5 samosas sold"));
        assert!(text.contains("+₹100"));
        assert!(text.contains("-₹250"));
        assert!(text.contains("Yesterday, 5:00 PM"));
    }

    #[test]
    fn test_history_page_render_shows_empty_state() {
        // Arrange
        let mut page = HistoryPage::new(&[]);

        // Act
        let text = render_page_text(&mut page, 80, 10);

        // Assert
        assert!(text.contains(EMPTY_MESSAGE));
    }
}
