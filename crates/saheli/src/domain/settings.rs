//! In-memory preferences shown on the settings page.

/// Display language choice. Stored only; text is not translated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Language {
    #[default]
    Hindi,
    English,
    Marathi,
    Tamil,
    Telugu,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Marathi => "mr",
            Language::Tamil => "ta",
            Language::Telugu => "te",
        }
    }

    /// Returns the label in its own script followed by the English name.
    pub fn label(self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी (Hindi)",
            Language::English => "English",
            Language::Marathi => "मराठी (Marathi)",
            Language::Tamil => "தமிழ் (Tamil)",
            Language::Telugu => "తెలుగు (Telugu)",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Language::Hindi => Language::English,
            Language::English => Language::Marathi,
            Language::Marathi => Language::Tamil,
            Language::Tamil => Language::Telugu,
            Language::Telugu => Language::Hindi,
        }
    }
}

/// Selectable rows on the settings page.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SettingsField {
    #[default]
    Language,
    DailyReminders,
    WeeklySummary,
}

impl SettingsField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SettingsField::Language => SettingsField::DailyReminders,
            SettingsField::DailyReminders => SettingsField::WeeklySummary,
            SettingsField::WeeklySummary => SettingsField::Language,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            SettingsField::Language => SettingsField::WeeklySummary,
            SettingsField::DailyReminders => SettingsField::Language,
            SettingsField::WeeklySummary => SettingsField::DailyReminders,
        }
    }
}

/// User preferences for the current process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settings {
    pub daily_reminders: bool,
    pub language: Language,
    pub weekly_summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            language: Language::default(),
            weekly_summary: true,
        }
    }
}

impl Settings {
    /// Flips a toggle, or advances the language for the language row.
    pub fn toggle(&mut self, field: SettingsField) {
        match field {
            SettingsField::Language => self.language = self.language.next(),
            SettingsField::DailyReminders => self.daily_reminders = !self.daily_reminders,
            SettingsField::WeeklySummary => self.weekly_summary = !self.weekly_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_enable_both_reminders_in_hindi() {
        // Arrange & Act
        let settings = Settings::default();

        // Assert
        assert!(settings.daily_reminders);
        assert!(settings.weekly_summary);
        assert_eq!(settings.language.code(), "hi");
    }

    #[test]
    fn test_toggle_flips_only_the_selected_field() {
        // Arrange
        let mut settings = Settings::default();

        // Act
        settings.toggle(SettingsField::WeeklySummary);

        // Assert
        assert!(settings.daily_reminders);
        assert!(!settings.weekly_summary);
    }

    #[test]
    fn test_toggle_language_cycles_through_all_languages() {
        // Arrange
        let mut settings = Settings::default();
        let mut codes = Vec::new();

        // Act
        for _ in 0..5 {
            settings.toggle(SettingsField::Language);
            codes.push(settings.language.code());
        }

        // Assert
        assert_eq!(codes, vec!["en", "mr", "ta", "te", "hi"]);
    }

    #[test]
    fn test_settings_field_next_and_previous_are_inverse() {
        // Arrange
        let fields = [
            SettingsField::Language,
            SettingsField::DailyReminders,
            SettingsField::WeeklySummary,
        ];

        // Act & Assert
        for field in fields {
            assert_eq!(field.next().previous(), field);
        }
    }
}
