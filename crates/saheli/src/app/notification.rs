//! Declarative notification queue rendered as a modal overlay.

use std::collections::VecDeque;

/// Tone of a notification, used for overlay styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Info => "Notice",
            NotificationKind::Success => "Done",
            NotificationKind::Warning => "Please check",
        }
    }
}

/// One message awaiting acknowledgement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// FIFO of notifications; the front entry is shown until dismissed.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.queue.push_back(Notification {
            kind,
            message: message.into(),
        });
    }

    /// Returns the notification currently shown.
    pub fn front(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Acknowledges and removes the front notification.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
