use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_time_agent::{agent::SAMPLE_AGENT, server, CityAgent, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_time_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting {} for {} ({:?} transport, {})",
        SAMPLE_AGENT.name,
        SAMPLE_AGENT.model,
        config.transport,
        config.public_url()
    );

    server::run(config, CityAgent::new()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
