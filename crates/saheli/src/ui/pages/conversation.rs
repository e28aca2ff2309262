use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::conversation::{ConversationController, ConversationPhase};
use crate::domain::conversation::Speaker;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::pages::help_line;
use crate::ui::text_util::{input_tail, wrap_lines};

const INPUT_PLACEHOLDER: &str = "Type your message...";
const CONFIRMED_PLACEHOLDER: &str = "All recorded. Taking you home...";
const HELP_TEXT: &str = "Enter: send  Tab: pick option  Ctrl+V: voice  Esc: back";
const BUBBLE_WIDTH_PERCENT: usize = 80;

/// Chat page for the sales and expense dialogues.
pub struct ConversationPage<'a> {
    controller: &'a ConversationController,
}

impl<'a> ConversationPage<'a> {
    pub fn new(controller: &'a ConversationController) -> Self {
        Self { controller }
    }

    /// Builds every transcript line, oldest first.
    fn transcript_lines(&self, width: usize) -> Vec<Line<'static>> {
        let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(1);
        let quick_replies = self.controller.quick_replies();
        let last_index = self.controller.transcript().len().saturating_sub(1);
        let mut lines = Vec::new();

        for (index, turn) in self.controller.transcript().iter().enumerate() {
            let (style, alignment) = match turn.speaker {
                Speaker::Agent => (Style::default().fg(Color::White), Alignment::Left),
                Speaker::User => (
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    Alignment::Right,
                ),
            };
            lines.extend(
                wrap_lines(&turn.text, bubble_width)
                    .into_iter()
                    .map(|line| line.style(style).alignment(alignment)),
            );

            let is_active = index == last_index && !quick_replies.is_empty();
            for (option_index, option) in turn.options.iter().enumerate() {
                lines.push(self.option_line(option, is_active, option_index));
            }
            lines.push(Line::from(""));
        }

        if self.controller.is_loading() {
            lines.push(Line::from(Span::styled(
                format!("{} Saheli is thinking...", Icon::current_spinner()),
                Style::default().fg(Color::Cyan),
            )));
        }

        lines
    }

    fn option_line(&self, option: &str, is_active: bool, option_index: usize) -> Line<'static> {
        let is_selected = is_active && self.controller.selected_quick_reply() == Some(option_index);
        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if is_selected { "▶" } else { " " };

        Line::from(vec![
            Span::raw(format!("  {marker} ")),
            Span::styled(format!(" {option} "), style),
        ])
    }

    fn input_line(&self, width: usize) -> Line<'static> {
        if self.controller.phase() == ConversationPhase::Confirmed {
            return Line::from(Span::styled(
                format!("{} {CONFIRMED_PLACEHOLDER}", Icon::Check),
                Style::default().fg(Color::Green),
            ));
        }

        if self.controller.input().is_empty() {
            return Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
        }

        let text_style = if self.controller.accepts_input() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Line::from(vec![
            Span::styled(
                input_tail(self.controller.input(), width.saturating_sub(1)).to_string(),
                text_style,
            ),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ])
    }
}

impl Page for ConversationPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .horizontal_margin(1)
            .split(area);

        let transcript_area = chunks[0];
        let inner_width = usize::from(transcript_area.width.saturating_sub(2));
        let inner_height = usize::from(transcript_area.height.saturating_sub(2));
        let lines = self.transcript_lines(inner_width);
        let scroll = u16::try_from(lines.len().saturating_sub(inner_height)).unwrap_or(u16::MAX);
        let transcript = Paragraph::new(lines).scroll((scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(transcript, transcript_area);

        let input_width = usize::from(chunks[1].width.saturating_sub(2));
        let input = Paragraph::new(self.input_line(input_width)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Message "),
        );
        f.render_widget(input, chunks[1]);

        f.render_widget(help_line(HELP_TEXT), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agent::AgentRole;
    use crate::domain::conversation::ConversationStep;
    use crate::ui::pages::test_support::render_page_text;

    #[test]
    fn test_conversation_page_render_shows_greeting_and_placeholder() {
        // Arrange
        let controller = ConversationController::start(AgentRole::Sales);
        let mut page = ConversationPage::new(&controller);

        // Act
        let text = render_page_text(&mut page, 100, 20);

        // Assert
        assert!(text.contains("What did you sell today?"));
        assert!(text.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_conversation_page_render_shows_quick_replies() {
        // Arrange
        let mut controller = ConversationController::start(AgentRole::Expense);
        controller.begin_submit("flour");
        controller.finish_submit(Some(ConversationStep::Question {
            options: vec!["Ingredients".to_string(), "Gas".to_string()],
            text: "Which category?".to_string(),
        }));
        controller.select_next_quick_reply();
        let mut page = ConversationPage::new(&controller);

        // Act
        let text = render_page_text(&mut page, 100, 24);

        // Assert
        assert!(text.contains("flour"));
        assert!(text.contains("Which category?"));
        assert!(text.contains("▶  Ingredients"));
        assert!(text.contains(" Gas "));
    }

    #[test]
    fn test_conversation_page_render_replaces_input_after_confirmation() {
        // Arrange
        let mut controller = ConversationController::start(AgentRole::Sales);
        controller.begin_submit("5 samosas at ₹10");
        controller.finish_submit(Some(ConversationStep::Confirmed(
            "Sale recorded: ₹50".to_string(),
        )));
        let mut page = ConversationPage::new(&controller);

        // Act
        let text = render_page_text(&mut page, 100, 20);

        // Assert
        assert!(text.contains("Sale recorded: ₹50"));
        assert!(text.contains(CONFIRMED_PLACEHOLDER));
        assert!(!text.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_conversation_page_render_shows_thinking_while_loading() {
        // Arrange
        let mut controller = ConversationController::start(AgentRole::Sales);
        controller.begin_submit("5 samosas");
        let mut page = ConversationPage::new(&controller);

        // Act
        let text = render_page_text(&mut page, 100, 20);

        // Assert
        assert!(text.contains("Saheli is thinking..."));
    }

    #[test]
    fn test_conversation_page_keeps_latest_turn_visible() {
        // Arrange
        let mut controller = ConversationController::start(AgentRole::Sales);
        for answer in ["one", "two", "three", "four", "five"] {
            controller.begin_submit(answer);
            controller.finish_submit(Some(ConversationStep::Question {
                options: Vec::new(),
                text: format!("after {answer}"),
            }));
        }
        let mut page = ConversationPage::new(&controller);

        // Act
        let text = render_page_text(&mut page, 60, 12);

        // Assert
        assert!(text.contains("after five"));
        assert!(!text.contains("What did you sell today?"));
    }
}
