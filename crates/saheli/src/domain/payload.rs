//! Typed agent payloads decoded from the `result` object of an agent
//! envelope.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::agent::AgentRole;
use crate::domain::conversation::ConversationStep;

/// Reads an optional field, mapping an explicit `null` to the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Morning card shown on the home page.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Reminder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub encouragement: String,
    pub greeting: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminders: Vec<String>,
}

/// One step of the sales recording dialogue.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SalesStep {
    #[serde(default)]
    pub confirmation: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub step: Option<Value>,
}

/// One step of the expense tracking dialogue.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ExpenseStep {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub confirmation: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

/// Overall feeling the profit agent attaches to the week.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Okay,
    Concerned,
    #[serde(other)]
    Neutral,
}

/// Weekly business status from the profit agent.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Profit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub encouragement: String,
    pub message: String,
    pub mood: Mood,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visualization: String,
}

/// Weekly recap from the summary agent.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub concerns: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encouragement: String,
    pub week_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: Vec<String>,
}

/// Price suggestion from the pricing agent.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_optional: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasoning: String,
    pub suggestion: String,
}

/// Agent result validated against the record shape of the calling role.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AgentPayload {
    Expense(ExpenseStep),
    Pricing(Pricing),
    Profit(Profit),
    Reminder(Reminder),
    Sales(SalesStep),
    Summary(Summary),
}

impl AgentPayload {
    /// Decodes `result` into the record expected from `role`.
    ///
    /// # Errors
    /// Returns the deserialization error when `result` does not match the
    /// role's record shape.
    pub fn decode(role: AgentRole, result: Value) -> Result<Self, serde_json::Error> {
        let payload = match role {
            AgentRole::Reminder => AgentPayload::Reminder(serde_json::from_value(result)?),
            AgentRole::Sales => AgentPayload::Sales(serde_json::from_value(result)?),
            AgentRole::Expense => AgentPayload::Expense(serde_json::from_value(result)?),
            AgentRole::Profit => AgentPayload::Profit(serde_json::from_value(result)?),
            AgentRole::Summary => AgentPayload::Summary(serde_json::from_value(result)?),
            AgentRole::Pricing => AgentPayload::Pricing(serde_json::from_value(result)?),
        };

        Ok(payload)
    }

    /// Returns the role whose record shape this payload carries.
    pub fn role(&self) -> AgentRole {
        match self {
            AgentPayload::Expense(_) => AgentRole::Expense,
            AgentPayload::Pricing(_) => AgentRole::Pricing,
            AgentPayload::Profit(_) => AgentRole::Profit,
            AgentPayload::Reminder(_) => AgentRole::Reminder,
            AgentPayload::Sales(_) => AgentRole::Sales,
            AgentPayload::Summary(_) => AgentRole::Summary,
        }
    }

    /// Converts a transactional payload into the next dialogue step.
    ///
    /// Returns `None` for panel payloads.
    pub fn into_conversation_step(self) -> Option<ConversationStep> {
        match self {
            AgentPayload::Sales(step) => Some(ConversationStep::from_fields(
                step.confirmation,
                step.question,
                step.options,
            )),
            AgentPayload::Expense(step) => Some(ConversationStep::from_fields(
                step.confirmation,
                step.question,
                step.categories,
            )),
            AgentPayload::Pricing(_)
            | AgentPayload::Profit(_)
            | AgentPayload::Reminder(_)
            | AgentPayload::Summary(_) => None,
        }
    }
}
