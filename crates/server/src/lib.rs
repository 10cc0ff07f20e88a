mod config;
pub mod http;
mod mcp;
pub mod prompts;
mod schemas;
pub mod telemetry;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use mcp::{McpServer, SERVER_NAME, SERVER_VERSION};
pub use schemas::*;

use std::sync::Arc;
use twilio_sms_core::{Credentials, Dispatcher, TwilioClient};

/// Build the shared dispatcher from credentials and provider settings
pub fn build_dispatcher(
    credentials: Credentials,
    provider: &ProviderConfig,
) -> anyhow::Result<Dispatcher> {
    let from_number = credentials.from_number.clone();
    let client = TwilioClient::builder(credentials)
        .api_base_url(provider.api_base_url.as_str())
        .timeout(provider.timeout())
        .user_agent(concat!("twilio-sms/", env!("CARGO_PKG_VERSION")))
        .build()?;

    tracing::info!("Twilio endpoint: {}", client.messages_url());
    Ok(Dispatcher::new(Arc::new(client), from_number))
}
