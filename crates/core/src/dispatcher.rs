use crate::models::{OutboundMessage, SendFailure, SendOutcome, SendRequest};
use crate::provider::SmsProvider;
use std::sync::Arc;
use tracing::{debug, error};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Validates send requests and forwards them to the provider
///
/// This is the only piece of logic shared by the MCP and HTTP front-ends.
/// Each call makes at most one provider request and never retries.
#[derive(Clone)]
pub struct Dispatcher {
    provider: Arc<dyn SmsProvider>,
    from_number: String,
}

impl Dispatcher {
    /// Create a new `Dispatcher` sending from `from_number`
    #[must_use]
    pub fn new(provider: Arc<dyn SmsProvider>, from_number: impl Into<String>) -> Self {
        Self {
            provider,
            from_number: from_number.into(),
        }
    }

    /// Sender number used for every outbound message
    #[must_use]
    pub fn from_number(&self) -> &str {
        &self.from_number
    }

    /// Check that `recipient` looks like an E.164 number (leading `+`)
    pub fn validate_recipient(recipient: &str) -> Result<(), SendFailure> {
        if recipient.starts_with('+') {
            Ok(())
        } else {
            Err(SendFailure::InvalidRecipient)
        }
    }

    /// Send `body` to `recipient`
    ///
    /// # Returns
    /// * `SendOutcome::Success` - carrying the provider's message SID
    /// * `SendOutcome::Failure(InvalidRecipient)` - the provider was not called
    /// * `SendOutcome::Failure(Provider(_))` - the provider call failed
    ///
    /// The body is forwarded as-is, including when empty.
    pub async fn send(&self, recipient: &str, body: &str) -> SendOutcome {
        if let Err(failure) = Self::validate_recipient(recipient) {
            return SendOutcome::Failure(failure);
        }

        let message = OutboundMessage {
            to: recipient.to_string(),
            from: self.from_number.clone(),
            body: body.to_string(),
        };

        match self.provider.create_message(&message).await {
            Ok(receipt) => {
                debug!("Message {} created for {}", receipt.sid, recipient);
                SendOutcome::Success {
                    message_sid: receipt.sid,
                }
            }
            Err(e) => {
                error!("Error sending message to {}: {}", recipient, e);
                let reason = e.to_string();
                let reason = if reason.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    reason
                };
                SendOutcome::Failure(SendFailure::Provider(reason))
            }
        }
    }

    /// Send a prepared [`SendRequest`]
    pub async fn dispatch(&self, request: &SendRequest) -> SendOutcome {
        self.send(&request.recipient, &request.body).await
    }
}
