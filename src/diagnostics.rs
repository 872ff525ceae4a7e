//! LM Studio integration diagnostics
//!
//! Three best-effort checks: the LM Studio API answers, it lists at least one
//! model, and a chat round-trip through the inference API gateway works. The
//! chat check only runs when the LM Studio API answered. Failures never
//! propagate; they leave the corresponding flag false.

use crate::{
    client::HttpClient,
    defaults,
    logging::Logger,
    models::IntegrationStatus,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Prompt sent by the chat round-trip check
pub const CHAT_PROMPT: &str = "Hi";
/// Token cap for the chat round-trip check
pub const CHAT_MAX_TOKENS: u32 = 10;

/// Probes LM Studio and the chat gateway of the inference API
pub struct IntegrationProber {
    client: Arc<dyn HttpClient>,
    models_url: String,
    chat_url: String,
    models_timeout: Duration,
    chat_timeout: Duration,
    logger: Logger,
}

impl IntegrationProber {
    pub fn new(client: Arc<dyn HttpClient>, models_url: String, chat_url: String, logger: Logger) -> Self {
        Self {
            client,
            models_url,
            chat_url,
            models_timeout: defaults::MODELS_TIMEOUT,
            chat_timeout: defaults::CHAT_TIMEOUT,
            logger,
        }
    }

    /// Override both timeouts
    pub fn with_timeouts(mut self, models_timeout: Duration, chat_timeout: Duration) -> Self {
        self.models_timeout = models_timeout;
        self.chat_timeout = chat_timeout;
        self
    }

    /// Run the checks in order
    pub async fn probe(&self) -> IntegrationStatus {
        let mut status = IntegrationStatus::default();

        self.check_models(&mut status).await;

        if status.api_available {
            status.chat_working = self.check_chat().await;
        } else {
            self.logger
                .debug("Skipping chat check, LM Studio API unavailable")
                .log()
                .await;
        }

        status
    }

    async fn check_models(&self, status: &mut IntegrationStatus) {
        let response = match self.client.get(&self.models_url, self.models_timeout).await {
            Ok(response) => response,
            Err(e) => {
                self.logger
                    .debug("LM Studio models request failed")
                    .field("url", &self.models_url)
                    .error_info(&e)
                    .log()
                    .await;
                return;
            }
        };

        if !response.is_ok() {
            self.logger
                .debug("LM Studio models endpoint returned non-200 status")
                .field("status", response.status_code)
                .log()
                .await;
            return;
        }

        status.api_available = true;

        match response.json() {
            Ok(body) => {
                let data = body.get("data").unwrap_or(&Value::Null);
                status.models_available = is_truthy(data);
                status.models = model_ids(data);
            }
            Err(e) => {
                self.logger
                    .debug("LM Studio models response is not JSON")
                    .error_info(&e)
                    .log()
                    .await;
            }
        }
    }

    async fn check_chat(&self) -> bool {
        match self
            .client
            .post_json(&self.chat_url, &chat_request_body(), self.chat_timeout)
            .await
        {
            Ok(response) => {
                self.logger
                    .debug("Chat round-trip completed")
                    .field("status", response.status_code)
                    .field("elapsed_ms", response.elapsed.as_secs_f64() * 1000.0)
                    .log()
                    .await;
                response.is_ok()
            }
            Err(e) => {
                self.logger
                    .debug("Chat round-trip failed")
                    .field("url", &self.chat_url)
                    .error_info(&e)
                    .log()
                    .await;
                false
            }
        }
    }
}

/// Body of the minimal chat request
pub fn chat_request_body() -> Value {
    json!({
        "messages": [{"role": "user", "content": CHAT_PROMPT}],
        "max_tokens": CHAT_MAX_TOKENS,
    })
}

/// Empty collections, empty strings, zero, false and null count as absent
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn model_ids(data: &Value) -> Vec<String> {
    data.as_array()
        .map(|models| {
            models
                .iter()
                .filter_map(|model| model.get("id").and_then(Value::as_str))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
