use super::prompts::PromptRegistry;
use super::schemas::SendMessageInput;
use rmcp::handler::server::{router::tool::ToolRouter, tool::Parameters, ServerHandler};
use rmcp::model::{
    CallToolResult, Content, ErrorData as McpError, GetPromptRequestParam, GetPromptResult,
    Implementation, InitializeResult, ListPromptsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, RoleServer};
use std::future::Future;
use tracing::info;
use twilio_sms_core::{Dispatcher, SendFailure, SendOutcome};

pub const SERVER_NAME: &str = "twilio-sms";
pub const SERVER_VERSION: &str = "1.0.0";

/// MCP Server exposing SMS sending over stdio
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl McpServer {
    /// Create a new MCP server around the given dispatcher
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            tool_router: Self::tool_router(),
        }
    }

    /// Send an SMS message
    #[tool(name = "send-message", description = "Send an SMS message via Twilio")]
    async fn send_message(
        &self,
        Parameters(input): Parameters<SendMessageInput>,
    ) -> Result<CallToolResult, McpError> {
        info!("send-message tool called for {}", input.to);

        let result = match self.dispatcher.send(&input.to, &input.message).await {
            SendOutcome::Success { message_sid } => CallToolResult::success(vec![Content::text(
                format!("Message sent successfully! Message SID: {message_sid}"),
            )]),
            SendOutcome::Failure(SendFailure::InvalidRecipient) => {
                CallToolResult::error(vec![Content::text(format!(
                    "Error: {} (e.g., +11234567890)",
                    SendFailure::InvalidRecipient
                ))])
            }
            SendOutcome::Failure(failure) => CallToolResult::error(vec![Content::text(format!(
                "Error sending message: {}",
                failure.reason()
            ))]),
        };

        Ok(result)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            instructions: Some(
                "Send SMS text messages. Phone numbers must be in E.164 format (e.g., +11234567890)."
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: PromptRegistry::list(),
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Rendering prompt: {}", request.name);
        PromptRegistry::get(&request.name, request.arguments.as_ref())
    }
}
