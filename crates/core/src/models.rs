use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single send request as received by a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub recipient: String,
    pub body: String,
}

impl SendRequest {
    #[must_use]
    pub fn new(recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            body: body.into(),
        }
    }
}

/// Message handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub to: String,
    pub from: String,
    pub body: String,
}

/// Provider acknowledgement of a created message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageReceipt {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Why a dispatch did not produce a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendFailure {
    /// Rejected before contacting the provider.
    #[error("Phone number must be in E.164 format")]
    InvalidRecipient,

    /// The provider call failed; carries the provider's message text.
    #[error("{0}")]
    Provider(String),
}

impl SendFailure {
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Result of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Success { message_sid: String },
    Failure(SendFailure),
}

impl SendOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
