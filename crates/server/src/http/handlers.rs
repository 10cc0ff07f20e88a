use super::error::ApiError;
use super::types::{
    HealthResponse, SendGreetingRequest, SendGreetingResponse, SendSmsRequest, SendSmsResponse,
};
use super::SERVICE_NAME;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;
use twilio_sms_core::{Dispatcher, SendOutcome};

pub struct AppState {
    pub dispatcher: Dispatcher,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "endpoints": {
            "GET /health": "Health check",
            "POST /send-sms": "Send SMS message (requires: to, message)",
            "POST /send-greeting": "Send greeting message (requires: to, occasion, optional: customMessage)"
        },
        "example": {
            "sendSms": {
                "url": "/send-sms",
                "method": "POST",
                "body": {
                    "to": "+11234567890",
                    "message": "Hello from the cloud!"
                }
            }
        }
    }))
}

pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendSmsRequest>, JsonRejection>,
) -> Result<Json<SendSmsResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    info!("POST /send-sms to {}", req.to);

    match state.dispatcher.send(&req.to, &req.message).await {
        SendOutcome::Success { message_sid } => Ok(Json(SendSmsResponse {
            success: true,
            message: "Message sent successfully",
            message_sid,
            to: req.to,
            from: state.dispatcher.from_number().to_string(),
        })),
        SendOutcome::Failure(failure) => {
            Err(ApiError::from_failure(failure, "Failed to send message"))
        }
    }
}

pub async fn send_greeting(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendGreetingRequest>, JsonRejection>,
) -> Result<Json<SendGreetingResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let (Some(to), Some(occasion)) = (
        req.to.as_deref().filter(|s| !s.is_empty()),
        req.occasion.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::MissingGreetingFields);
    };
    info!("POST /send-greeting ({}) to {}", occasion, to);

    let body = req.body(occasion);
    match state.dispatcher.send(to, &body).await {
        SendOutcome::Success { message_sid } => Ok(Json(SendGreetingResponse {
            success: true,
            message: "Greeting sent successfully",
            message_sid,
            occasion: occasion.to_string(),
            to: to.to_string(),
        })),
        SendOutcome::Failure(failure) => {
            Err(ApiError::from_failure(failure, "Failed to send greeting"))
        }
    }
}
