use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub mod conversation;
pub mod history;
pub mod home;
pub mod pricing;
pub mod profit;
pub mod settings;
pub mod summary;

/// Single-row key hint rendered at the bottom of a page.
pub(crate) fn help_line(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).style(Style::default().fg(Color::Gray))
}
