use crate::error::ConfigError;
use std::fmt;

const ACCOUNT_SID: &str = "ACCOUNT_SID";
const AUTH_TOKEN: &str = "AUTH_TOKEN";
const FROM_NUMBER: &str = "FROM_NUMBER";

/// Twilio account credentials and sender number
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl Credentials {
    /// Names of the required environment variables, in the order they are checked.
    pub const REQUIRED_VARS: [&'static str; 3] = [ACCOUNT_SID, AUTH_TOKEN, FROM_NUMBER];

    /// Load credentials from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary lookup function
    ///
    /// A variable that is absent or blank counts as missing. The first missing
    /// variable is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [account_sid, auth_token, from_number] = Self::REQUIRED_VARS.map(|name| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        });

        Ok(Self {
            account_sid: account_sid?,
            auth_token: auth_token?,
            from_number: from_number?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .finish()
    }
}
