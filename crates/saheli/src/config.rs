//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::domain::agent::{AgentDirectory, AgentRole, parse_agent_override};

const LOG_DIR_NAME: &str = ".saheli";
const LOG_FILE_NAME: &str = "saheli.log";

/// Terminal companion for logging sales and expenses with remote agents.
#[derive(Debug, Parser)]
#[command(name = "saheli", version, about)]
pub struct Cli {
    /// Endpoint that accepts agent messages.
    #[arg(long, env = "SAHELI_AGENT_URL")]
    pub agent_url: String,

    /// Bearer token sent with every agent request.
    #[arg(long, env = "SAHELI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "SAHELI_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Maximum level written to the log file.
    #[arg(long, env = "SAHELI_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Replaces the agent id used for one role, e.g. `pricing=abc123`.
    #[arg(long = "agent", value_name = "ROLE=ID", value_parser = parse_agent_override)]
    pub agent_overrides: Vec<(AgentRole, String)>,
}

impl Cli {
    /// Builds the role to agent-id mapping with overrides applied.
    pub fn agent_directory(&self) -> AgentDirectory {
        self.agent_overrides
            .iter()
            .fold(AgentDirectory::default(), |directory, (role, agent_id)| {
                directory.with_override(*role, agent_id.clone())
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Returns `~/.saheli/saheli.log`, or `None` when no home directory is known.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uses_defaults() {
        // Arrange
        let args = ["saheli", "--agent-url", "http://localhost:9000/agent"];

        // Act
        let cli = Cli::try_parse_from(args).expect("failed to parse args");

        // Assert
        assert_eq!(cli.agent_url, "http://localhost:9000/agent");
        assert_eq!(cli.timeout(), Duration::from_secs(30));
        assert_eq!(cli.log_level, Level::INFO);
        assert!(cli.agent_overrides.is_empty());
    }

    #[test]
    fn test_parse_collects_agent_overrides() {
        // Arrange
        let args = [
            "saheli",
            "--agent-url",
            "http://localhost:9000/agent",
            "--agent",
            "pricing=custom-pricing",
            "--agent",
            "Sales=custom-sales",
            "--log-level",
            "debug",
        ];

        // Act
        let cli = Cli::try_parse_from(args).expect("failed to parse args");
        let directory = cli.agent_directory();

        // Assert
        assert_eq!(cli.log_level, Level::DEBUG);
        assert_eq!(directory.agent_id(AgentRole::Pricing), "custom-pricing");
        assert_eq!(directory.agent_id(AgentRole::Sales), "custom-sales");
        assert_eq!(
            directory.agent_id(AgentRole::Profit),
            AgentRole::Profit.default_agent_id()
        );
    }

    #[test]
    fn test_parse_rejects_unknown_agent_role() {
        // Arrange
        let args = [
            "saheli",
            "--agent-url",
            "http://localhost:9000/agent",
            "--agent",
            "inventory=abc",
        ];

        // Act
        let result = Cli::try_parse_from(args);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_log_file_path_ends_with_log_file_name() {
        // Arrange & Act
        let path = log_file_path();

        // Assert
        if let Some(path) = path {
            assert!(path.ends_with(".saheli/saheli.log"));
        }
    }
}
