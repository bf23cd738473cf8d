//! Manager server binary
//!
//! Standalone server for the agent task manager: a JSON REST API for
//! tracking repositories, delegating issues to a coding agent, and
//! recording pull-request review decisions.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use manager::agent::{AgentGateway, LiveAgentGateway, SimulatedAgentGateway};
use manager::api::routes::create_router;
use manager::config::{AgentMode, Config};
use manager::db::DatabaseConnection;
use manager::github::GitHubClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Agent mode: {:?}", config.agent_mode);
    tracing::info!("Agent login: {}", config.agent_login);
    tracing::info!(
        "Analysis backends: openai={} anthropic={}",
        config.openai_key_present,
        config.anthropic_key_present
    );

    tracing::info!("Connecting to database: {}", config.database_url);
    let db = DatabaseConnection::new(&config.database_url).await?;
    db.run_migrations().await?;
    db.health_check().await?;
    tracing::info!("Database ready");

    let github = Arc::new(GitHubClient::new(config.github_config()));
    let agent: Arc<dyn AgentGateway> = match config.agent_mode {
        AgentMode::Live => Arc::new(LiveAgentGateway::new(github.clone())),
        AgentMode::Simulated => Arc::new(SimulatedAgentGateway::new()),
    };

    let app = create_router(db, github, agent);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
