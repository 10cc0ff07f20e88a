use crate::error::Result;
use crate::models::{MessageReceipt, OutboundMessage};
use async_trait::async_trait;

/// The external "create message" operation
///
/// Implementations must be safe to share across concurrent requests; each
/// call is one independent outbound send attempt.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    async fn create_message(&self, message: &OutboundMessage) -> Result<MessageReceipt>;
}
