//! HTTP implementation of [`AgentTransport`].

use std::time::Duration;

use reqwest::Client;

use crate::infra::transport::{
    AgentEnvelope, AgentFuture, AgentRequest, AgentTransport, TransportError,
};

/// Posts `{ message, agent_id, session_id }` as JSON to one endpoint and
/// reads the envelope from the response body.
pub struct HttpAgentTransport {
    api_key: Option<String>,
    client: Client,
    endpoint: String,
}

impl HttpAgentTransport {
    /// Creates a transport with a per-request timeout.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| {
                TransportError::Request(format!("Failed to build HTTP client: {error}"))
            })?;

        Ok(Self {
            api_key,
            client,
            endpoint,
        })
    }
}

impl AgentTransport for HttpAgentTransport {
    fn call(&self, request: AgentRequest) -> AgentFuture<Result<AgentEnvelope, TransportError>> {
        let api_key = self.api_key.clone();
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            let mut builder = client.post(&endpoint).json(&request);
            if let Some(api_key) = api_key {
                builder = builder.bearer_auth(api_key);
            }

            let response = builder
                .send()
                .await
                .map_err(|error| TransportError::Request(error.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|error| TransportError::Request(format!("Failed to read body: {error}")))?;

            if !status.is_success() {
                return Err(TransportError::Status {
                    body: body.trim().to_string(),
                    status: status.as_u16(),
                });
            }

            parse_envelope(&body)
        })
    }
}

/// Parses a response body into an envelope.
fn parse_envelope(body: &str) -> Result<AgentEnvelope, TransportError> {
    serde_json::from_str(body).map_err(|error| TransportError::Envelope(error.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_envelope_reads_success_and_result() {
        // Arrange
        let body = r#"{"success": true, "response": {"result": {"confirmation": "Saved!"}}}"#;

        // Act
        let envelope = parse_envelope(body).expect("failed to parse envelope");

        // Assert
        assert_eq!(envelope, AgentEnvelope::success(json!({"confirmation": "Saved!"})));
    }

    #[test]
    fn test_parse_envelope_defaults_missing_fields_to_failure() {
        // Arrange
        let body = "{}";

        // Act
        let envelope = parse_envelope(body).expect("failed to parse envelope");

        // Assert
        assert!(!envelope.success);
        assert_eq!(envelope.response.result, None);
    }

    #[test]
    fn test_parse_envelope_rejects_non_json_body() {
        // Arrange
        let body = "<html>Bad gateway</html>";

        // Act
        let result = parse_envelope(body);

        // Assert
        assert!(matches!(result, Err(TransportError::Envelope(_))));
    }

    #[test]
    fn test_request_serializes_wire_field_names() {
        // Arrange
        let request = AgentRequest {
            agent_id: "agent-1".to_string(),
            message: "Good morning".to_string(),
            session_id: "session_1".to_string(),
        };

        // Act
        let value = serde_json::to_value(&request).expect("failed to serialize request");

        // Assert
        assert_eq!(
            value,
            json!({"agent_id": "agent-1", "message": "Good morning", "session_id": "session_1"})
        );
    }

    #[test]
    fn test_new_builds_client_for_endpoint() {
        // Arrange & Act
        let transport = HttpAgentTransport::new(
            "http://127.0.0.1:9/agents".to_string(),
            Some("key".to_string()),
            Duration::from_secs(5),
        )
        .expect("failed to build transport");

        // Assert
        assert_eq!(transport.endpoint, "http://127.0.0.1:9/agents");
        assert_eq!(transport.api_key.as_deref(), Some("key"));
    }
}
