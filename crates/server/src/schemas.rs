use serde::{Deserialize, Serialize};

/// Input schema for the `send-message` tool
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SendMessageInput {
    #[schemars(description = "Recipient phone number in E.164 format (e.g., +11234567890)")]
    pub to: String,

    #[schemars(description = "Message content to send")]
    pub message: String,
}
