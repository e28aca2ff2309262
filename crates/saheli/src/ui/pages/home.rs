use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::domain::payload::Reminder;
use crate::ui::components::reminder_card::ReminderCard;
use crate::ui::pages::help_line;
use crate::ui::{Component, Page};

const ACTION_CARD_HEIGHT: u16 = 4;
const HELP_TEXT: &str = "1-4: open  p: pricing  v: voice  x: hide reminder  Tab: navigate  q: quit";

/// One entry of the home action grid.
struct ActionCard {
    color: Color,
    key: char,
    subtitle: &'static str,
    title: &'static str,
}

const ACTION_CARDS: [ActionCard; 4] = [
    ActionCard {
        color: Color::Green,
        key: '1',
        subtitle: "Bechna hua maal",
        title: "Record Sale",
    },
    ActionCard {
        color: Color::LightRed,
        key: '2',
        subtitle: "Kharcha",
        title: "Add Expense",
    },
    ActionCard {
        color: Color::Magenta,
        key: '3',
        subtitle: "Mera hisaab",
        title: "How am I doing?",
    },
    ActionCard {
        color: Color::Blue,
        key: '4',
        subtitle: "Hafta ka hisaab",
        title: "Weekly Summary",
    },
];

/// Landing page with the greeting, reminder card and action grid.
pub struct HomePage<'a> {
    reminder: Option<&'a Reminder>,
}

impl<'a> HomePage<'a> {
    pub fn new(reminder: Option<&'a Reminder>) -> Self {
        Self { reminder }
    }
}

impl Page for HomePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let reminder_card = self.reminder.map(ReminderCard::new);
        let reminder_height = reminder_card
            .as_ref()
            .map_or(0, |card| card.height(area.width.saturating_sub(2)));

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(3),
                Constraint::Length(reminder_height),
                Constraint::Length(ACTION_CARD_HEIGHT),
                Constraint::Length(ACTION_CARD_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .horizontal_margin(1)
            .split(area);

        render_header(f, chunks[0]);
        if let Some(card) = &reminder_card {
            card.render(f, chunks[1]);
        }
        for (row_index, row_area) in [chunks[2], chunks[3]].into_iter().enumerate() {
            let columns = Layout::default()
                .direction(ratatui::layout::Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row_area);
            for (column_index, column_area) in columns.iter().enumerate() {
                render_action_card(f, *column_area, &ACTION_CARDS[row_index * 2 + column_index]);
            }
        }
        render_pricing_button(f, chunks[4]);

        let voice = Paragraph::new(Line::from(vec![
            Span::styled("v", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(": 🎤 Speak to Saheli"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(voice, chunks[5]);

        f.render_widget(help_line(HELP_TEXT), chunks[7]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "नमस्ते, Saheli!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Welcome back to your business companion"),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_action_card(f: &mut Frame, area: Rect, card: &ActionCard) {
    let paragraph = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", card.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(card.subtitle, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(card.color)),
    );
    f.render_widget(paragraph, area);
}

fn render_pricing_button(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("[p] ", Style::default().fg(Color::Yellow)),
        Span::styled(
            "💡 Get Pricing Advice",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}
