use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use get_weather::capability::Capability;
use get_weather::service::Weather;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "get_weather=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let weather = Weather::new()?;
    let descriptor = weather.descriptor();
    tracing::info!(
        tool = %descriptor.name,
        data_tags = ?descriptor.data_tags,
        "Starting get-weather MCP server"
    );
    tracing::debug!(schema = %descriptor.input_schema, "Input schema");

    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
