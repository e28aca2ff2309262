use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::panel::Panel;
use crate::domain::payload::Pricing;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::pages::help_line;
use crate::ui::text_util::input_tail;

const INPUT_PROMPT: &str = "Tell me what product you want pricing advice for:";
const INPUT_PLACEHOLDER: &str = "e.g., homemade pickles, samosas...";
const SUGGESTION_NOTE: &str = "Remember, this is just a suggestion. You know your customers best!";
const INPUT_HELP_TEXT: &str = "Enter: Get Advice  Tab: navigate  Esc: Back to Home";
const ADVICE_HELP_TEXT: &str = "m: Get More Advice  Tab: navigate  Esc: Back to Home";

/// Pricing advice: a product prompt, then the agent's suggestion.
pub struct PricingPage<'a> {
    input: &'a str,
    panel: &'a Panel<Pricing>,
}

impl<'a> PricingPage<'a> {
    pub fn new(panel: &'a Panel<Pricing>, input: &'a str) -> Self {
        Self { input, panel }
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("💡 "),
                Span::styled(INPUT_PROMPT, Style::default().add_modifier(Modifier::BOLD)),
            ])),
            chunks[0],
        );

        let input_width = usize::from(chunks[1].width.saturating_sub(2));
        let input_line = if self.input.is_empty() {
            Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw(input_tail(self.input, input_width.saturating_sub(1)).to_string()),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ])
        };
        f.render_widget(
            Paragraph::new(input_line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            chunks[1],
        );

        let button = if self.panel.is_loading() {
            Line::from(Span::styled(
                format!("{} Getting Advice...", Icon::current_spinner()),
                Style::default().fg(Color::Cyan),
            ))
        } else {
            Line::from(Span::styled(
                "[Enter] Get Advice",
                Style::default().fg(Color::Yellow),
            ))
        };
        f.render_widget(Paragraph::new(button), chunks[2]);
        f.render_widget(help_line(INPUT_HELP_TEXT), chunks[4]);
    }

    fn render_advice(f: &mut Frame, area: Rect, pricing: &Pricing) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let mut lines = vec![
            Line::from(Span::styled(
                pricing.suggestion.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Why this advice?",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(pricing.reasoning.clone()),
        ];
        if pricing.is_optional {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                SUGGESTION_NOTE,
                Style::default().fg(Color::Cyan),
            )));
        }

        let advice = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Pricing Suggestion "),
        );
        f.render_widget(advice, chunks[0]);
        f.render_widget(help_line(ADVICE_HELP_TEXT), chunks[1]);
    }
}

impl Page for PricingPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        match self.panel.record() {
            Some(pricing) => Self::render_advice(f, area, pricing),
            None => self.render_input(f, area),
        }
    }
}
