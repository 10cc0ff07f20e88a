use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SendSmsRequest {
    pub to: String,
    pub message: String,
}

/// `/send-greeting` body; fields are checked by the handler so a missing
/// field yields the dedicated error message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendGreetingRequest {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub custom_message: Option<String>,
}

impl SendGreetingRequest {
    /// Greeting text: the custom message when given, otherwise the stock one.
    #[must_use]
    pub fn body(&self, occasion: &str) -> String {
        match self.custom_message.as_deref() {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => format!(
                "Wishing you a wonderful {occasion}! Hope your day is filled with joy and happiness."
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    pub success: bool,
    pub message: &'static str,
    pub message_sid: String,
    pub to: String,
    pub from: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendGreetingResponse {
    pub success: bool,
    pub message: &'static str,
    pub message_sid: String,
    pub occasion: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Error payload shared by every failing route
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_body_defaults_to_template() {
        let req = SendGreetingRequest::default();
        assert_eq!(
            req.body("birthday"),
            "Wishing you a wonderful birthday! Hope your day is filled with joy and happiness."
        );
    }

    #[test]
    fn test_greeting_body_prefers_custom_message() {
        let req: SendGreetingRequest = serde_json::from_str(
            r#"{"to":"+11234567890","occasion":"birthday","customMessage":"Happy 30th!"}"#,
        )
        .unwrap();
        assert_eq!(req.body("birthday"), "Happy 30th!");

        let empty = SendGreetingRequest {
            custom_message: Some(String::new()),
            ..SendGreetingRequest::default()
        };
        assert!(empty.body("holiday").starts_with("Wishing you a wonderful holiday!"));
    }
}
