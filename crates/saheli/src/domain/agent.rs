use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Remote agents the companion talks to, one per screen purpose.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AgentRole {
    Reminder,
    Sales,
    Expense,
    Profit,
    Summary,
    Pricing,
}

impl AgentRole {
    pub const ALL: [AgentRole; 6] = [
        AgentRole::Reminder,
        AgentRole::Sales,
        AgentRole::Expense,
        AgentRole::Profit,
        AgentRole::Summary,
        AgentRole::Pricing,
    ];

    /// Returns the routing key of the deployed agent for this role.
    pub fn default_agent_id(self) -> &'static str {
        match self {
            AgentRole::Reminder => "69858c60ab4bf65a66ad081a",
            AgentRole::Sales => "69858c7bc613a65b3c419477",
            AgentRole::Expense => "69858c94a791e6e318b8dee8",
            AgentRole::Profit => "69858cad094c8b2d4207dd31",
            AgentRole::Summary => "69858cc8c613a65b3c41947c",
            AgentRole::Pricing => "69858ce46417bacaca9cf927",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentRole::Reminder => "reminder",
            AgentRole::Sales => "sales",
            AgentRole::Expense => "expense",
            AgentRole::Profit => "profit",
            AgentRole::Summary => "summary",
            AgentRole::Pricing => "pricing",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AgentRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("Unknown agent role: {value}"))
    }
}

/// Routing table from [`AgentRole`] to the agent identifier sent on the
/// wire.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AgentDirectory {
    overrides: HashMap<AgentRole, String>,
}

impl AgentDirectory {
    /// Replaces the deployed identifier for one role.
    #[must_use]
    pub fn with_override(mut self, role: AgentRole, agent_id: impl Into<String>) -> Self {
        self.overrides.insert(role, agent_id.into());
        self
    }

    /// Returns the identifier used for `role`.
    pub fn agent_id(&self, role: AgentRole) -> &str {
        self.overrides
            .get(&role)
            .map_or_else(|| role.default_agent_id(), String::as_str)
    }
}

/// Parses one `role=agent_id` override as given on the command line.
///
/// # Errors
/// Returns an error when the separator is missing, the role is unknown, or
/// the identifier is empty.
pub fn parse_agent_override(value: &str) -> Result<(AgentRole, String), String> {
    let (role, agent_id) = value
        .split_once('=')
        .ok_or_else(|| format!("Expected `role=agent_id`, got `{value}`"))?;
    let role = role.parse::<AgentRole>()?;
    let agent_id = agent_id.trim();
    if agent_id.is_empty() {
        return Err(format!("Agent id for `{role}` must not be empty"));
    }

    Ok((role, agent_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_directory_uses_deployed_ids_by_default() {
        // Arrange
        let directory = AgentDirectory::default();

        // Act
        let sales_id = directory.agent_id(AgentRole::Sales);
        let pricing_id = directory.agent_id(AgentRole::Pricing);

        // Assert
        assert_eq!(sales_id, "69858c7bc613a65b3c419477");
        assert_eq!(pricing_id, "69858ce46417bacaca9cf927");
    }

    #[test]
    fn test_agent_directory_override_replaces_only_that_role() {
        // Arrange
        let directory = AgentDirectory::default().with_override(AgentRole::Profit, "local-profit");

        // Act
        let profit_id = directory.agent_id(AgentRole::Profit);
        let summary_id = directory.agent_id(AgentRole::Summary);

        // Assert
        assert_eq!(profit_id, "local-profit");
        assert_eq!(summary_id, AgentRole::Summary.default_agent_id());
    }

    #[test]
    fn test_agent_role_from_str_is_case_insensitive() {
        // Arrange & Act & Assert
        assert_eq!("Expense".parse::<AgentRole>(), Ok(AgentRole::Expense));
        assert_eq!(" reminder ".parse::<AgentRole>(), Ok(AgentRole::Reminder));
        assert!("inventory".parse::<AgentRole>().is_err());
    }

    #[test]
    fn test_parse_agent_override_rejects_missing_separator_and_empty_id() {
        // Arrange & Act
        let valid = parse_agent_override("sales=abc123");
        let missing_separator = parse_agent_override("sales");
        let empty_id = parse_agent_override("sales=  ");

        // Assert
        assert_eq!(valid, Ok((AgentRole::Sales, "abc123".to_string())));
        assert!(missing_separator.is_err());
        assert!(empty_id.is_err());
    }
}
