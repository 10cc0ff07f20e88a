use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use twilio_sms_core::Credentials;
use twilio_sms_server::{build_dispatcher, telemetry, Config, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    // Credentials are a hard precondition: exit before opening the transport
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::load_default()?;
    let dispatcher = build_dispatcher(credentials, &config.provider)?;
    let mcp_server = McpServer::new(dispatcher);

    let service = mcp_server
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;
    tracing::info!("Twilio SMS MCP Server running on stdio");

    service.waiting().await?;
    Ok(())
}
