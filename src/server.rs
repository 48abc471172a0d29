use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use rmcp::{
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ServiceExt,
};

use crate::agent::AgentCard;
use crate::config::{Config, Transport};
use crate::constants::{AGENT_CARD_PATH, MCP_PATH};
use crate::service::CityAgent;

/// Serves `agent` over the transport named in `config` until shutdown
pub async fn run(config: Config, agent: CityAgent) -> Result<()> {
    match config.transport {
        Transport::Stdio => serve_stdio(agent).await,
        Transport::Http => serve_http(&config, agent).await,
    }
}

pub async fn serve_stdio(agent: CityAgent) -> Result<()> {
    tracing::info!("Serving MCP over stdio");

    let server = agent.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;
    Ok(())
}

pub async fn serve_http(config: &Config, agent: CityAgent) -> Result<()> {
    let app = build_router(config, agent);
    let addr = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", addr))?;

    tracing::info!("Listening on {}, advertised as {}", addr, config.public_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}

/// Routes for HTTP mode: the MCP endpoint plus the agent card
pub fn build_router(config: &Config, agent: CityAgent) -> Router {
    let card = Arc::new(AgentCard::new(agent.profile(), config, &agent.tools()));

    let mcp = StreamableHttpService::new(
        move || Ok(agent.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    Router::new()
        .route(
            AGENT_CARD_PATH,
            get(move || {
                let card = Arc::clone(&card);
                async move { Json(card.as_ref().clone()) }
            }),
        )
        .nest_service(MCP_PATH, mcp)
}
