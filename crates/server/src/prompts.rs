//! MCP prompts: instruction templates for an upstream model.
//!
//! Prompts only render text. Sending is left to the `send-message` tool,
//! which the model is expected to call after writing the message.

use rmcp::model::{
    ErrorData as McpError, GetPromptResult, JsonObject, Prompt, PromptArgument, PromptMessage,
    PromptMessageRole,
};
use serde_json::Value;
use tracing::debug;

pub const SEND_GREETING: &str = "send-greeting";
pub const SEND_HAIKU: &str = "send-haiku";

const TO_DESCRIPTION: &str = "Recipient's phone number in E.164 format (e.g., +11234567890)";

/// Registry of available MCP prompts.
pub struct PromptRegistry;

impl PromptRegistry {
    /// List all available prompts.
    #[must_use]
    pub fn list() -> Vec<Prompt> {
        vec![
            Prompt::new(
                SEND_GREETING,
                Some("Write a personalized greeting and text it to someone"),
                Some(vec![
                    argument("to", TO_DESCRIPTION),
                    argument(
                        "occasion",
                        "The occasion for the greeting (e.g., birthday, holiday)",
                    ),
                ]),
            ),
            Prompt::new(
                SEND_HAIKU,
                Some("Write a haiku on a theme and text it to someone"),
                Some(vec![
                    argument("theme", "The theme of the haiku"),
                    argument("to", TO_DESCRIPTION),
                ]),
            ),
        ]
    }

    /// Render a prompt by name with the supplied arguments.
    pub fn get(name: &str, args: Option<&JsonObject>) -> Result<GetPromptResult, McpError> {
        debug!(name = %name, ?args, "Getting prompt");

        match name {
            SEND_GREETING => {
                let to = required(args, "to")?;
                let occasion = required(args, "occasion")?;
                Ok(user_prompt(
                    format!("Send a {occasion} greeting to {to}"),
                    greeting_text(&to, &occasion),
                ))
            }
            SEND_HAIKU => {
                let to = required(args, "to")?;
                let theme = required(args, "theme")?;
                Ok(user_prompt(
                    format!("Send a haiku about {theme} to {to}"),
                    haiku_text(&to, &theme),
                ))
            }
            _ => Err(McpError::invalid_params(
                format!("Unknown prompt: {name}"),
                None,
            )),
        }
    }
}

#[must_use]
pub fn greeting_text(to: &str, occasion: &str) -> String {
    format!(
        "Please write a warm, personalized greeting for {occasion} and send it as a text message to {to}. Make it engaging and friendly."
    )
}

#[must_use]
pub fn haiku_text(to: &str, theme: &str) -> String {
    format!(
        "Please write a haiku about {theme} and send it as a text message to {to}. Make it evocative and follow the 5-7-5 syllable pattern."
    )
}

fn argument(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        description: Some(description.to_string()),
        required: Some(true),
    }
}

fn user_prompt(description: String, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}

/// Fetch a string argument; numbers and booleans are accepted as text.
fn required(args: Option<&JsonObject>, key: &str) -> Result<String, McpError> {
    let value = args.and_then(|a| a.get(key)).and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    });

    value.ok_or_else(|| McpError::invalid_params(format!("{key} argument is required"), None))
}
