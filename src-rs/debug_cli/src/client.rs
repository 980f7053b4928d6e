use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::models::{CaptionRequest, CaptionResponse};

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::new(),
        }
    }

    pub fn generate(&self, req: &CaptionRequest) -> Result<String, String> {
        let url = format!("{}/api/gerar", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(req)
            .send()
            .map_err(|err| err.to_string())?;

        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        let parsed = serde_json::from_str::<CaptionResponse>(&body).ok();
        if status.is_success() {
            parsed
                .and_then(|p| p.text)
                .ok_or_else(|| format!("unexpected response: {}", body))
        } else {
            Err(failure_message(status.as_u16(), parsed, body))
        }
    }
}

/// The server's `{error}` message, or the raw body when it is not JSON.
fn failure_message(status: u16, parsed: Option<CaptionResponse>, body: String) -> String {
    match parsed.and_then(|p| p.error) {
        Some(error) => error,
        None if body.trim().is_empty() => format!("status {}", status),
        None => body,
    }
}
