use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GenerateError, ProviderError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Chat-completions request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Raw outcome of an outbound call that produced an HTTP response.
#[derive(Clone, Debug)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one completion request. `Err` means no HTTP response was obtained.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<UpstreamReply, ProviderError>;
}

/// Best-effort JSON parse; malformed input yields `None`.
pub fn parse_json_lenient(body: &str) -> Option<Value> {
    serde_json::from_str(body).ok()
}

/// `error.message` from an upstream error body.
pub fn upstream_error_message(raw: &Value) -> Option<String> {
    raw.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
}

/// Trimmed `choices[0].message.content`; `Ok(None)` when absent, null or blank.
/// Content of any other JSON type is an internal failure, not an empty reply.
pub fn completion_text(raw: &Value) -> Result<Option<String>, GenerateError> {
    let content = raw
        .get("choices")
        .and_then(|v| v.as_array())
        .and_then(|list| list.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"));
    let text = match content {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) => text.trim(),
        Some(other) => {
            return Err(GenerateError::Internal(format!(
                "completion content is not a string: {}",
                other
            )))
        }
    };
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text.to_string()))
    }
}
