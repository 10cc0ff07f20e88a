#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use twilio_sms_core::{
    Dispatcher, MessageReceipt, OutboundMessage, ProviderError, Result, SmsProvider,
};

pub const FROM_NUMBER: &str = "+15550001111";

/// Provider stand-in that records calls and replies with a fixed outcome
#[derive(Default)]
pub struct StubProvider {
    calls: Mutex<Vec<OutboundMessage>>,
    fail_with: Option<String>,
}

impl StubProvider {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::default(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<OutboundMessage> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsProvider for StubProvider {
    async fn create_message(&self, message: &OutboundMessage) -> Result<MessageReceipt> {
        self.calls.lock().unwrap().push(message.clone());
        match &self.fail_with {
            Some(msg) => Err(ProviderError::Api {
                status: 401,
                code: Some(20003),
                message: msg.clone(),
            }),
            None => Ok(MessageReceipt {
                sid: "SM123".to_string(),
                status: Some("queued".to_string()),
            }),
        }
    }
}

/// Dispatcher wired to a stub, plus a handle on the stub for assertions
pub fn stub_dispatcher(provider: StubProvider) -> (Arc<StubProvider>, Dispatcher) {
    let provider = Arc::new(provider);
    let dispatcher = Dispatcher::new(provider.clone(), FROM_NUMBER);
    (provider, dispatcher)
}
