//! Linear question/answer exchange with one transactional agent.

use crate::domain::agent::AgentRole;
use crate::domain::conversation::{ConversationStep, ConversationTurn, Speaker};

/// Position of the dialogue in its state machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversationPhase {
    /// Only the seeded greeting is on screen.
    Greeting,
    /// An agent question is waiting for the user's answer.
    AwaitingAnswer,
    /// A user answer is in flight.
    AgentQuestioning,
    /// The agent confirmed the record; no further turns are accepted.
    Confirmed,
}

/// Result of applying one agent reply.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConversationOutcome {
    Asked,
    Confirmed,
    Unchanged,
}

/// Transcript, input buffer and loading flag for one conversational visit.
#[derive(Debug)]
pub struct ConversationController {
    input: String,
    loading: bool,
    phase: ConversationPhase,
    role: AgentRole,
    selected_quick_reply: Option<usize>,
    transcript: Vec<ConversationTurn>,
}

impl ConversationController {
    /// Starts a visit bound to `role`, seeded with its greeting.
    pub fn start(role: AgentRole) -> Self {
        Self {
            input: String::new(),
            loading: false,
            phase: ConversationPhase::Greeting,
            role,
            selected_quick_reply: None,
            transcript: vec![ConversationTurn::agent(greeting(role))],
        }
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    /// Returns whether new answers are accepted right now.
    pub fn accepts_input(&self) -> bool {
        !self.loading && self.phase != ConversationPhase::Confirmed
    }

    pub fn push_input(&mut self, character: char) {
        if self.accepts_input() {
            self.input.push(character);
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Records a user answer and reports the message to send.
    ///
    /// Returns `None` for blank text, while a reply is pending, or after
    /// confirmation. Otherwise appends the user turn, clears the input
    /// buffer and marks the request as loading.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || !self.accepts_input() {
            return None;
        }

        self.transcript.push(ConversationTurn::user(text));
        self.input.clear();
        self.loading = true;
        self.phase = ConversationPhase::AgentQuestioning;
        self.selected_quick_reply = None;

        Some(text.to_string())
    }

    /// Settles the in-flight answer with the agent's step, or `None` on
    /// failure. Loading is always cleared.
    pub fn finish_submit(&mut self, step: Option<ConversationStep>) -> ConversationOutcome {
        self.loading = false;

        match step {
            Some(ConversationStep::Confirmed(text)) => {
                self.transcript.push(ConversationTurn::agent(text));
                self.phase = ConversationPhase::Confirmed;

                ConversationOutcome::Confirmed
            }
            Some(ConversationStep::Question { options, text }) => {
                self.transcript
                    .push(ConversationTurn::agent(text).with_options(options));
                self.phase = ConversationPhase::AwaitingAnswer;

                ConversationOutcome::Asked
            }
            Some(ConversationStep::Empty) | None => {
                self.phase = self.idle_phase();

                ConversationOutcome::Unchanged
            }
        }
    }

    /// Quick-replies offered by the latest agent turn.
    pub fn quick_replies(&self) -> &[String] {
        if !self.accepts_input() {
            return &[];
        }

        match self.transcript.last() {
            Some(turn) if turn.speaker == Speaker::Agent => &turn.options,
            _ => &[],
        }
    }

    pub fn selected_quick_reply(&self) -> Option<usize> {
        self.selected_quick_reply
    }

    pub fn select_next_quick_reply(&mut self) {
        let count = self.quick_replies().len();
        if count == 0 {
            return;
        }

        self.selected_quick_reply = Some(match self.selected_quick_reply {
            Some(index) if index + 1 < count => index + 1,
            _ => 0,
        });
    }

    pub fn select_previous_quick_reply(&mut self) {
        let count = self.quick_replies().len();
        if count == 0 {
            return;
        }

        self.selected_quick_reply = Some(match self.selected_quick_reply {
            Some(index) if index > 0 => index - 1,
            _ => count - 1,
        });
    }

    /// Returns the highlighted quick-reply text, when any.
    pub fn selected_quick_reply_text(&self) -> Option<String> {
        self.selected_quick_reply
            .and_then(|index| self.quick_replies().get(index))
            .cloned()
    }

    fn idle_phase(&self) -> ConversationPhase {
        if self.transcript.len() <= 1 {
            ConversationPhase::Greeting
        } else {
            ConversationPhase::AwaitingAnswer
        }
    }
}

/// Opening line seeded when a conversational screen is entered.
pub fn greeting(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Expense => "Hello! Let's note down your expense. What did you spend money on?",
        _ => "Namaste! I'm here to help you record your sale. What did you sell today?",
    }
}

/// Acknowledgement shown after the agent confirms a record.
pub fn success_message(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Expense => "✓ Perfect! Your expense has been noted. You're managing so well!",
        _ => "🎉 Wonderful! Your sale has been recorded. You're doing amazing!",
    }
}
