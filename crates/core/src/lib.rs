mod config;
mod dispatcher;
mod error;
mod models;
mod provider;
mod twilio;

pub use config::Credentials;
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, ProviderError, Result};
pub use models::{MessageReceipt, OutboundMessage, SendFailure, SendOutcome, SendRequest};
pub use provider::SmsProvider;
pub use twilio::{TwilioClient, TwilioClientBuilder, DEFAULT_API_BASE_URL};
