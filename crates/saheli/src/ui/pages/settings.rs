use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::domain::settings::{Settings, SettingsField};
use crate::ui::Page;
use crate::ui::pages::help_line;

const ABOUT_TEXT: &str = "Saheli is your friendly business companion, designed to help you \
                          manage your home business with ease and confidence. We're here to \
                          support you every step of the way.";
const HELP_TEXT: &str = "j/k: select  Enter: change  Tab: navigate  Esc: Back to Home";

/// In-memory preferences and the about card.
pub struct SettingsPage<'a> {
    selection: SettingsField,
    settings: &'a Settings,
}

impl<'a> SettingsPage<'a> {
    pub fn new(settings: &'a Settings, selection: SettingsField) -> Self {
        Self {
            selection,
            settings,
        }
    }

    fn row(&self, field: SettingsField, label: &str, value: String) -> Line<'static> {
        let is_selected = self.selection == field;
        let marker = if is_selected { "▶ " } else { "  " };
        let label_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{label:<18}"), label_style),
            Span::styled(value, Style::default().fg(Color::Cyan)),
        ])
    }
}

impl Page for SettingsPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        let language = Paragraph::new(self.row(
            SettingsField::Language,
            "Language",
            format!("< {} >", self.settings.language.label()),
        ))
        .block(card(" Language / भाषा "));
        f.render_widget(language, chunks[0]);

        let reminders = Paragraph::new(vec![
            self.row(
                SettingsField::DailyReminders,
                "Daily reminders",
                checkbox(self.settings.daily_reminders),
            ),
            self.row(
                SettingsField::WeeklySummary,
                "Weekly summary",
                checkbox(self.settings.weekly_summary),
            ),
        ])
        .block(card(" Reminders "));
        f.render_widget(reminders, chunks[1]);

        let about = Paragraph::new(vec![
            Line::from(ABOUT_TEXT),
            Line::from(""),
            Line::from(Span::styled(
                format!("Version {}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(card(" About Saheli "));
        f.render_widget(about, chunks[2]);

        f.render_widget(help_line(HELP_TEXT), chunks[3]);
    }
}

fn card(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title)
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]" } else { "[ ]" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::test_support::render_page_text;

    #[test]
    fn test_settings_page_render_shows_defaults_and_version() {
        // Arrange
        let settings = Settings::default();
        let mut page = SettingsPage::new(&settings, SettingsField::Language);

        // Act
        let text = render_page_text(&mut page, 100, 20);

        // Assert
        assert!(text.contains("(Hindi)"));
        assert!(text.contains("Daily reminders   [x]"));
        assert!(text.contains("Weekly summary    [x]"));
        assert!(text.contains(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_settings_page_render_reflects_toggled_value() {
        // Arrange
        let mut settings = Settings::default();
        settings.toggle(SettingsField::WeeklySummary);
        let mut page = SettingsPage::new(&settings, SettingsField::WeeklySummary);

        // Act
        let text = render_page_text(&mut page, 100, 20);

        // Assert
        assert!(text.contains("▶ Weekly summary    [ ]"));
    }
}
