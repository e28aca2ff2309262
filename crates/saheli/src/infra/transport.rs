//! Transport boundary for remote agent calls.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Boxed future returned by [`AgentTransport`] implementations.
pub type AgentFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// One message addressed to one agent within a session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AgentRequest {
    pub agent_id: String,
    pub message: String,
    pub session_id: String,
}

/// Normalized reply envelope: `{ success, response: { result? } }`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct AgentEnvelope {
    #[serde(default)]
    pub response: AgentResponseBody,
    #[serde(default)]
    pub success: bool,
}

/// Inner `response` object of an [`AgentEnvelope`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct AgentResponseBody {
    #[serde(default)]
    pub result: Option<Value>,
}

impl AgentEnvelope {
    /// Builds a successful envelope carrying `result`.
    pub fn success(result: Value) -> Self {
        Self {
            response: AgentResponseBody {
                result: Some(result),
            },
            success: true,
        }
    }

    /// Builds a failed envelope without a result.
    pub fn failure() -> Self {
        Self::default()
    }
}

/// Failures below the envelope level.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("agent request failed: {0}")]
    Request(String),
    #[error("agent service returned HTTP {status}: {body}")]
    Status { body: String, status: u16 },
    #[error("invalid agent envelope: {0}")]
    Envelope(String),
}

/// Sends a message to a named agent and returns its envelope.
#[cfg_attr(test, mockall::automock)]
pub trait AgentTransport: Send + Sync {
    fn call(&self, request: AgentRequest) -> AgentFuture<Result<AgentEnvelope, TransportError>>;
}
