//! Service configuration
//!
//! All configuration is read once from the process environment at startup
//! into an explicit struct; no ambient globals. Secrets for the optional
//! AI-analysis backends are only recorded as present or absent.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable missing
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// Environment variable present but unparseable
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Which agent gateway implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    /// Perform real GitHub API calls
    Live,
    /// Fabricate outcomes, flagged `simulated: true`
    Simulated,
}

impl AgentMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "live" => Some(AgentMode::Live),
            "simulated" => Some(AgentMode::Simulated),
            _ => None,
        }
    }
}

/// Service configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API access token
    pub github_token: String,
    /// Session-signing secret
    pub session_secret: String,
    /// SQLite connection string
    pub database_url: String,
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Agent gateway selection
    pub agent_mode: AgentMode,
    /// Login of the coding agent bot account
    pub agent_login: String,
    /// REST API base URL override
    pub github_api_base: Option<String>,
    /// GraphQL endpoint override
    pub github_graphql_url: Option<String>,
    /// Whether an OpenAI analysis key was provided
    pub openai_key_present: bool,
    /// Whether an Anthropic analysis key was provided
    pub anthropic_key_present: bool,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_token =
            std::env::var("GITHUB_TOKEN").map_err(|_| ConfigError::Missing("GITHUB_TOKEN"))?;

        let session_secret = match std::env::var("SESSION_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("SESSION_SECRET not set, using development default");
                "dev-secret-key".to_string()
            }
        };

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:manager.db?mode=rwc".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            Err(_) => 8080,
        };

        let agent_mode = match std::env::var("AGENT_MODE") {
            Ok(value) => AgentMode::parse(&value).ok_or(ConfigError::Invalid {
                name: "AGENT_MODE",
                value,
            })?,
            Err(_) => AgentMode::Simulated,
        };

        let agent_login =
            std::env::var("AGENT_LOGIN").unwrap_or_else(|_| "copilot-swe-agent".to_string());

        Ok(Self {
            github_token,
            session_secret,
            database_url,
            host,
            port,
            agent_mode,
            agent_login,
            github_api_base: std::env::var("GITHUB_API_BASE").ok(),
            github_graphql_url: std::env::var("GITHUB_GRAPHQL_URL").ok(),
            openai_key_present: std::env::var("OPENAI_API_KEY").is_ok(),
            anthropic_key_present: std::env::var("ANTHROPIC_API_KEY").is_ok(),
        })
    }

    /// Build the GitHub client configuration from this service config
    pub fn github_config(&self) -> crate::github::GitHubConfig {
        let mut config = crate::github::GitHubConfig::new(self.github_token.clone());
        config.agent_login = self.agent_login.clone();
        if let Some(base) = &self.github_api_base {
            config.api_base = base.clone();
        }
        if let Some(url) = &self.github_graphql_url {
            config.graphql_url = url.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_mode_parse() {
        assert_eq!(AgentMode::parse("live"), Some(AgentMode::Live));
        assert_eq!(AgentMode::parse("simulated"), Some(AgentMode::Simulated));
        assert_eq!(AgentMode::parse("auto"), None);
    }

    #[test]
    fn test_github_config_overrides() {
        let config = Config {
            github_token: "t".to_string(),
            session_secret: "s".to_string(),
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            agent_mode: AgentMode::Simulated,
            agent_login: "some-bot".to_string(),
            github_api_base: Some("http://localhost:9999".to_string()),
            github_graphql_url: None,
            openai_key_present: false,
            anthropic_key_present: false,
        };

        let gh = config.github_config();
        assert_eq!(gh.api_base, "http://localhost:9999");
        assert_eq!(gh.agent_login, "some-bot");
        assert_eq!(gh.graphql_url, "https://api.github.com/graphql");
    }
}
