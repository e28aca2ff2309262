use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

use crate::app::notification::{Notification, NotificationKind};
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::text_util::wrap_lines;

const BODY_HORIZONTAL_PADDING: u16 = 2;
const BODY_VERTICAL_PADDING: u16 = 1;
const MIN_OVERLAY_WIDTH: u16 = 40;
const OVERLAY_WIDTH_PERCENT: u16 = 50;

/// Centered modal showing the front notification until dismissed.
pub struct NotificationOverlay<'a> {
    notification: &'a Notification,
    queued: usize,
}

impl<'a> NotificationOverlay<'a> {
    /// Creates an overlay for `notification`; `queued` counts the
    /// notifications waiting behind it.
    pub fn new(notification: &'a Notification, queued: usize) -> Self {
        Self {
            notification,
            queued,
        }
    }

    fn icon(&self) -> Icon {
        match self.notification.kind {
            NotificationKind::Info => Icon::Info,
            NotificationKind::Success => Icon::Check,
            NotificationKind::Warning => Icon::Warn,
        }
    }

    fn body_lines(&self, message_width: usize) -> Vec<Line<'static>> {
        let mut lines = wrap_lines(&self.notification.message, message_width);
        lines.push(Line::from(""));

        let mut action_spans = vec![Span::styled(
            " OK ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if self.queued > 0 {
            action_spans.push(Span::styled(
                format!("  +{} more", self.queued),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(action_spans).alignment(Alignment::Center));

        lines
    }

    fn popup_width(area: Rect) -> u16 {
        (area.width * OVERLAY_WIDTH_PERCENT / 100)
            .max(MIN_OVERLAY_WIDTH)
            .min(area.width)
    }

    fn message_width(width: u16) -> usize {
        let horizontal_chrome = 2 + (BODY_HORIZONTAL_PADDING * 2);

        usize::from(width.saturating_sub(horizontal_chrome).max(1))
    }
}

impl Component for NotificationOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let icon = self.icon();
        let width = Self::popup_width(area);
        let lines = self.body_lines(Self::message_width(width));
        let vertical_chrome = 2 + (BODY_VERTICAL_PADDING * 2);
        let height = u16::try_from(lines.len())
            .unwrap_or(area.height)
            .saturating_add(vertical_chrome)
            .min(area.height);
        let title = format!(" {icon} {} ", self.notification.kind.title());

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(icon.color()))
                .padding(Padding::new(
                    BODY_HORIZONTAL_PADDING,
                    BODY_HORIZONTAL_PADDING,
                    BODY_VERTICAL_PADDING,
                    BODY_VERTICAL_PADDING,
                ))
                .title(Span::styled(
                    title,
                    Style::default()
                        .fg(icon.color())
                        .add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center),
        );

        let popup_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}
