use std::sync::Arc;

use tracing::error;

use crate::config::ServiceConfig;
use crate::error::{GenerateError, MSG_UPSTREAM_FALLBACK};
use crate::form::CaptionForm;
use crate::llm::{
    completion_text, parse_json_lenient, upstream_error_message, CompletionProvider, CompletionRequest,
    OpenAiAdapter,
};
use crate::prompt::PromptPair;

/// Turns a caption form into generated text through one upstream completion call.
#[derive(Clone)]
pub struct CaptionGenerator {
    pub config: Arc<ServiceConfig>,
    pub provider: Arc<dyn CompletionProvider>,
}

impl CaptionGenerator {
    pub fn new(config: Arc<ServiceConfig>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }

    /// Generator backed by the real chat-completions endpoint.
    pub fn from_config(config: ServiceConfig) -> Self {
        let provider = OpenAiAdapter::new(&config.upstream.base_url);
        Self::new(Arc::new(config), Arc::new(provider))
    }

    pub async fn generate(&self, form: CaptionForm) -> Result<String, GenerateError> {
        let form = form.validate()?;

        // Input problems are reported before server misconfiguration.
        let api_key = self.config.api_key().ok_or(GenerateError::MissingApiKey)?;

        let prompts = PromptPair::build(&form);
        let request = CompletionRequest {
            model: self.config.upstream.model.clone(),
            messages: prompts.messages(),
            temperature: self.config.upstream.temperature,
            max_tokens: self.config.upstream.max_tokens,
        };

        let reply = self.provider.complete(api_key, &request).await?;

        if !reply.is_success() {
            let parsed = parse_json_lenient(&reply.body);
            error!(status = reply.status, body = %reply.body, "upstream returned an error");
            let message = parsed
                .as_ref()
                .and_then(upstream_error_message)
                .unwrap_or_else(|| MSG_UPSTREAM_FALLBACK.to_string());
            return Err(GenerateError::Upstream(message));
        }

        let raw: serde_json::Value = serde_json::from_str(&reply.body)?;
        match completion_text(&raw)? {
            Some(text) => Ok(text),
            None => {
                error!(body = %raw, "upstream response has no content");
                Err(GenerateError::EmptyCompletion)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::ProviderError;
    use crate::llm::UpstreamReply;

    struct FixedProvider {
        reply: Result<UpstreamReply, ProviderError>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl FixedProvider {
        fn new(reply: Result<UpstreamReply, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn ok(status: u16, body: &str) -> Arc<Self> {
            Self::new(Ok(UpstreamReply {
                status,
                body: body.to_string(),
            }))
        }
    }

    #[async_trait]
    impl CompletionProvider for FixedProvider {
        async fn complete(
            &self,
            _api_key: &str,
            request: &CompletionRequest,
        ) -> Result<UpstreamReply, ProviderError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(err) => Err(ProviderError::new(&err.code, &err.message)),
            }
        }
    }

    fn generator(provider: Arc<FixedProvider>, api_key: Option<&str>) -> CaptionGenerator {
        let config = ServiceConfig {
            api_key: api_key.map(|k| k.to_string()),
            ..ServiceConfig::default()
        };
        CaptionGenerator::new(Arc::new(config), provider)
    }

    fn form() -> CaptionForm {
        CaptionForm {
            business: Some("padaria".to_string()),
            goal: Some("vendas".to_string()),
            tone: Some("divertido".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn builds_the_fixed_upstream_request() {
        let provider = FixedProvider::ok(200, r#"{"choices":[{"message":{"content":"ok"}}]}"#);
        let text = generator(provider.clone(), Some("sk-test")).generate(form()).await.unwrap();
        assert_eq!(text, "ok");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gpt-4o-mini");
        assert_eq!(seen[0].temperature, 0.8);
        assert_eq!(seen[0].max_tokens, 500);
        assert_eq!(seen[0].messages[0].role, "system");
        assert!(seen[0].messages[1].content.contains("Observações: N/A"));
    }

    #[tokio::test]
    async fn missing_key_skips_the_upstream_call() {
        let provider = FixedProvider::ok(200, "{}");
        let err = generator(provider.clone(), None).generate(form()).await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
        assert!(provider.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_input_is_reported_before_missing_key() {
        let provider = FixedProvider::ok(200, "{}");
        let err = generator(provider, None)
            .generate(CaptionForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingFields));
    }

    #[tokio::test]
    async fn non_json_error_body_uses_fallback_message() {
        let provider = FixedProvider::ok(503, "<html>unavailable</html>");
        let err = generator(provider, Some("sk")).generate(form()).await.unwrap_err();
        assert!(matches!(err, GenerateError::Upstream(ref m) if m == MSG_UPSTREAM_FALLBACK));
    }

    #[tokio::test]
    async fn malformed_success_body_is_internal() {
        let provider = FixedProvider::ok(200, "not json");
        let err = generator(provider, Some("sk")).generate(form()).await.unwrap_err();
        assert!(matches!(err, GenerateError::Internal(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_internal() {
        let provider = FixedProvider::new(Err(ProviderError::new("connection_error", "refused")));
        let err = generator(provider, Some("sk")).generate(form()).await.unwrap_err();
        assert!(matches!(err, GenerateError::Internal(_)));
    }
}
