use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use super::types::{CompletionProvider, CompletionRequest, UpstreamReply};
use crate::error::ProviderError;

/// Chat-completions client. One POST per request, no retries.
pub struct OpenAiAdapter {
    base_url: String,
    client: Client,
}

impl OpenAiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiAdapter {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<UpstreamReply, ProviderError> {
        debug!(model = %request.model, messages = request.messages.len(), "sending completion request");
        let resp = self
            .client
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            OpenAiAdapter::new("https://api.openai.com").endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            OpenAiAdapter::new("http://localhost:9000/").endpoint(),
            "http://localhost:9000/v1/chat/completions"
        );
    }
}
