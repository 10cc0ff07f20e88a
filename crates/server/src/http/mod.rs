//! JSON HTTP front-end.

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use types::{ErrorBody, SendGreetingRequest, SendSmsRequest};

use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use twilio_sms_core::Dispatcher;

pub const SERVICE_NAME: &str = "Twilio SMS API";

/// Build the HTTP router around a dispatcher
pub fn router(dispatcher: Dispatcher) -> Router {
    let state = Arc::new(AppState { dispatcher });

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/send-sms", post(handlers::send_sms))
        .route("/send-greeting", post(handlers::send_greeting))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `bind_address:port` and serve until the process exits
pub async fn serve(dispatcher: Dispatcher, bind_address: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Twilio SMS API server running on port {}", port);
    tracing::info!("Health check: http://localhost:{}/health", port);

    axum::serve(listener, router(dispatcher)).await?;
    Ok(())
}
