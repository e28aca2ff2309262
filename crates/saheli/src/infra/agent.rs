//! Typed agent client bound to one process-wide session.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::domain::agent::{AgentDirectory, AgentRole};
use crate::domain::payload::AgentPayload;
use crate::infra::transport::{AgentRequest, AgentTransport, TransportError};

/// Correlation token generated once per process and sent with every call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgentSessionId(String);

impl AgentSessionId {
    /// Generates `session_<unix-millis>` from the current time.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        Self(format!("session_{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentSessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for AgentSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything that can keep an agent call from producing a payload.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{role} agent reported failure")]
    Unsuccessful { role: AgentRole },
    #[error("{role} agent returned no result")]
    MissingResult { role: AgentRole },
    #[error("{role} agent returned a malformed payload: {source}")]
    Malformed {
        role: AgentRole,
        #[source]
        source: serde_json::Error,
    },
}

/// Cloneable handle used by background tasks to reach the agents.
#[derive(Clone)]
pub struct AgentClient {
    directory: Arc<AgentDirectory>,
    session_id: AgentSessionId,
    transport: Arc<dyn AgentTransport>,
}

impl AgentClient {
    pub fn new(
        transport: Arc<dyn AgentTransport>,
        directory: AgentDirectory,
        session_id: AgentSessionId,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            session_id,
            transport,
        }
    }

    pub fn session_id(&self) -> &AgentSessionId {
        &self.session_id
    }

    /// Builds the wire request for `role`.
    pub fn request(&self, role: AgentRole, message: String) -> AgentRequest {
        AgentRequest {
            agent_id: self.directory.agent_id(role).to_string(),
            message,
            session_id: self.session_id.to_string(),
        }
    }

    /// Calls the agent for `role` and decodes its result.
    ///
    /// # Errors
    /// Returns an error when the transport fails, the envelope reports
    /// failure or lacks a result, or the result does not match the role.
    pub async fn call(&self, role: AgentRole, message: String) -> Result<AgentPayload, AgentError> {
        let request = self.request(role, message);
        let envelope = self.transport.call(request).await?;
        if !envelope.success {
            return Err(AgentError::Unsuccessful { role });
        }

        let result = envelope
            .response
            .result
            .ok_or(AgentError::MissingResult { role })?;

        AgentPayload::decode(role, result).map_err(|source| AgentError::Malformed { role, source })
    }
}
