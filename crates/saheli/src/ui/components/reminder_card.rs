use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::domain::payload::Reminder;
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::text_util::wrap_lines;

const HORIZONTAL_CHROME: u16 = 4;

/// Morning reminder card drawn at the top of the home page.
pub struct ReminderCard<'a> {
    reminder: &'a Reminder,
}

impl<'a> ReminderCard<'a> {
    pub fn new(reminder: &'a Reminder) -> Self {
        Self { reminder }
    }

    /// Returns the rows the card needs at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let line_count = self.body_lines(Self::body_width(width)).len();

        u16::try_from(line_count).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn body_width(width: u16) -> usize {
        usize::from(width.saturating_sub(HORIZONTAL_CHROME).max(1))
    }

    fn body_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for reminder in &self.reminder.reminders {
            lines.extend(wrap_lines(&format!("{} {reminder}", Icon::Bullet), width));
        }
        if !self.reminder.encouragement.is_empty() {
            let style = Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC);
            lines.extend(
                wrap_lines(&self.reminder.encouragement, width)
                    .into_iter()
                    .map(|line| line.style(style)),
            );
        }

        lines
    }
}

impl Component for ReminderCard<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", Icon::Sun), Style::default().fg(Icon::Sun.color())),
            Span::styled(
                format!("{} ", self.reminder.greeting),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let paragraph = Paragraph::new(self.body_lines(Self::body_width(area.width))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow))
                .padding(Padding::horizontal(1))
                .title(title)
                .title_bottom(Line::from(" x: hide ").right_aligned()),
        );

        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder() -> Reminder {
        Reminder {
            encouragement: "You are doing great".to_string(),
            greeting: "Good morning!".to_string(),
            reminders: vec![
                "Record yesterday's pickle sale".to_string(),
                "Buy oil before noon".to_string(),
            ],
        }
    }

    #[test]
    fn test_reminder_card_height_counts_lines_and_borders() {
        // Arrange
        let reminder = reminder();
        let card = ReminderCard::new(&reminder);

        // Act
        let height = card.height(80);

        // Assert
        assert_eq!(height, 5);
    }

    #[test]
    fn test_reminder_card_render_shows_greeting_and_reminders() {
        // Arrange
        let reminder = reminder();
        let card = ReminderCard::new(&reminder);
        let backend = ratatui::backend::TestBackend::new(80, 5);
        let mut terminal = ratatui::Terminal::new(backend).expect("failed to create terminal");

        // Act
        terminal
            .draw(|frame| {
                let area = frame.area();
                crate::ui::Component::render(&card, frame, area);
            })
            .expect("failed to draw");

        // Assert
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Good morning!"));
        assert!(text.contains("Buy oil before noon"));
        assert!(text.contains("You are doing great"));
    }
}
