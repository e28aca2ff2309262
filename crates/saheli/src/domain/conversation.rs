/// Who produced a transcript line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Speaker {
    Agent,
    User,
}

/// One line of a conversational transcript.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConversationTurn {
    pub options: Vec<String>,
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    /// Creates an agent turn without quick-replies.
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            speaker: Speaker::Agent,
            text: text.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// Attaches selectable quick-replies.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }
}

/// Normalized next step returned by a transactional agent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConversationStep {
    /// Terminal message; the record has been saved remotely.
    Confirmed(String),
    /// Follow-up question with optional quick-replies.
    Question { options: Vec<String>, text: String },
    /// Payload carried neither a confirmation nor a question.
    Empty,
}

impl ConversationStep {
    /// Builds a step from the optional fields shared by the sales and
    /// expense agents. A non-empty confirmation always wins.
    pub fn from_fields(
        confirmation: Option<String>,
        question: Option<String>,
        options: Vec<String>,
    ) -> Self {
        if let Some(confirmation) = confirmation
            && !confirmation.trim().is_empty()
        {
            return ConversationStep::Confirmed(confirmation);
        }

        match question {
            Some(text) if !text.trim().is_empty() => ConversationStep::Question { options, text },
            _ => ConversationStep::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_prefers_confirmation_over_question() {
        // Arrange
        let confirmation = Some("Saved!".to_string());
        let question = Some("Anything else?".to_string());

        // Act
        let step = ConversationStep::from_fields(confirmation, question, Vec::new());

        // Assert
        assert_eq!(step, ConversationStep::Confirmed("Saved!".to_string()));
    }

    #[test]
    fn test_from_fields_ignores_blank_confirmation() {
        // Arrange
        let confirmation = Some("  ".to_string());
        let question = Some("How many?".to_string());
        let options = vec!["1".to_string(), "2".to_string()];

        // Act
        let step = ConversationStep::from_fields(confirmation, question, options.clone());

        // Assert
        assert_eq!(
            step,
            ConversationStep::Question {
                options,
                text: "How many?".to_string(),
            }
        );
    }

    #[test]
    fn test_from_fields_without_question_is_empty() {
        // Arrange & Act
        let step = ConversationStep::from_fields(None, Some(String::new()), Vec::new());

        // Assert
        assert_eq!(step, ConversationStep::Empty);
    }

    #[test]
    fn test_turn_builders_set_speaker() {
        // Arrange & Act
        let agent_turn = ConversationTurn::agent("Q").with_options(vec!["A".to_string()]);
        let user_turn = ConversationTurn::user("A");

        // Assert
        assert_eq!(agent_turn.speaker, Speaker::Agent);
        assert_eq!(agent_turn.options, vec!["A".to_string()]);
        assert_eq!(user_turn.speaker, Speaker::User);
        assert!(user_turn.options.is_empty());
    }
}
