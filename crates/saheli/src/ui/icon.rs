use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::style::Color;

use crate::domain::payload::Mood;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Bullet,
    Check,
    Concerned,
    Happy,
    Info,
    Neutral,
    Okay,
    Spinner(usize),
    Sun,
    Warn,
}

impl Icon {
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner(usize::try_from(now / 100).unwrap_or_default())
    }

    /// Returns the face shown for a profit mood.
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Happy => Icon::Happy,
            Mood::Okay => Icon::Okay,
            Mood::Concerned => Icon::Concerned,
            Mood::Neutral => Icon::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Bullet => "•",
            Icon::Check => "✓",
            Icon::Concerned => "😟",
            Icon::Happy => "😄",
            Icon::Info => "i",
            Icon::Neutral => "🙂",
            Icon::Okay => "😐",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
            Icon::Sun => "☀",
            Icon::Warn => "!",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Icon::Check | Icon::Happy | Icon::Neutral => Color::Green,
            Icon::Okay | Icon::Sun | Icon::Warn => Color::Yellow,
            Icon::Concerned => Color::LightRed,
            Icon::Info | Icon::Spinner(_) => Color::Cyan,
            Icon::Bullet => Color::Gray,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_spinner() {
        // Arrange & Act
        let icon = Icon::current_spinner();

        // Assert
        assert!(matches!(icon, Icon::Spinner(_)));
    }

    #[test]
    fn test_spinner_frames() {
        // Arrange & Act & Assert
        assert_eq!(Icon::Spinner(0).as_str(), "⠋");
        assert_eq!(Icon::Spinner(9).as_str(), "⠏");
        assert_eq!(Icon::Spinner(10).as_str(), "⠋");
    }

    #[test]
    fn test_for_mood_colors_follow_mood() {
        // Arrange & Act
        let happy = Icon::for_mood(Mood::Happy);
        let okay = Icon::for_mood(Mood::Okay);
        let concerned = Icon::for_mood(Mood::Concerned);
        let unknown = Icon::for_mood(Mood::Neutral);

        // Assert
        assert_eq!(happy.color(), Color::Green);
        assert_eq!(okay.color(), Color::Yellow);
        assert_eq!(concerned.color(), Color::LightRed);
        assert_eq!(unknown.color(), Color::Green);
    }
}
