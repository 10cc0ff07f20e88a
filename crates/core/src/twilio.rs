//! Twilio Messages API client.

use crate::config::Credentials;
use crate::error::{ProviderError, Result};
use crate::models::{MessageReceipt, OutboundMessage};
use crate::provider::SmsProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";
const API_VERSION: &str = "2010-04-01";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error payload returned by Twilio on non-2xx responses.
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    message: Option<String>,
}

/// Builder for [`TwilioClient`]
#[derive(Debug, Clone)]
pub struct TwilioClientBuilder {
    credentials: Credentials,
    api_base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl TwilioClientBuilder {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API origin (scheme + host), e.g. for a local stand-in server.
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Timeout applied to the whole request, connect through body.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<TwilioClient> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder.build()?;

        let messages_url = format!(
            "{}/{}/Accounts/{}/Messages.json",
            self.api_base_url, API_VERSION, self.credentials.account_sid
        );

        Ok(TwilioClient {
            http,
            messages_url,
            account_sid: self.credentials.account_sid,
            auth_token: self.credentials.auth_token,
        })
    }
}

/// [`SmsProvider`] backed by Twilio's REST API
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct TwilioClient {
    http: reqwest::Client,
    messages_url: String,
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    /// Create a client with the default endpoint and timeout
    pub fn new(credentials: Credentials) -> Result<Self> {
        TwilioClientBuilder::new(credentials).build()
    }

    #[must_use]
    pub fn builder(credentials: Credentials) -> TwilioClientBuilder {
        TwilioClientBuilder::new(credentials)
    }

    /// Fully qualified Messages resource URL for the configured account
    #[must_use]
    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }
}

#[async_trait]
impl SmsProvider for TwilioClient {
    async fn create_message(&self, message: &OutboundMessage) -> Result<MessageReceipt> {
        debug!("POST {} (to: {})", self.messages_url, message.to);

        let form = [
            ("To", message.to.as_str()),
            ("From", message.from.as_str()),
            ("Body", message.body.as_str()),
        ];

        let response = self
            .http
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str::<MessageReceipt>(&body)
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// Map a non-2xx response body to a [`ProviderError`].
fn api_error(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<TwilioErrorBody>(body) {
        Ok(TwilioErrorBody {
            code,
            message: Some(message),
        }) if !message.trim().is_empty() => ProviderError::Api {
            status,
            code,
            message,
        },
        Ok(TwilioErrorBody { code, .. }) => ProviderError::Api {
            status,
            code,
            message: format!("HTTP {status}"),
        },
        Err(_) => ProviderError::Api {
            status,
            code: None,
            message: format!("HTTP {status}"),
        },
    }
}
