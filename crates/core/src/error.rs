use thiserror::Error;

/// Startup configuration failures. Always fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Errors raised by an [`SmsProvider`](crate::SmsProvider) while creating a message.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with an error payload.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    /// DNS, TLS, connect or timeout failure before a response arrived.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid provider response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
