use anyhow::Result;
use twilio_sms_core::Credentials;
use twilio_sms_server::{build_dispatcher, http, telemetry, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional; real environment variables take precedence
    let dotenv = dotenvy::dotenv();
    telemetry::init();
    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    // Credentials are a hard precondition: exit before binding the listener
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::load_default()?;
    tracing::info!(
        "Twilio SMS API starting on {}:{}",
        config.server.bind_address,
        config.server.port
    );

    let dispatcher = build_dispatcher(credentials, &config.provider)?;
    http::serve(dispatcher, &config.server.bind_address, config.server.port).await
}
