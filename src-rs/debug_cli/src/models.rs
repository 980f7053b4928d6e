use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub form: CaptionRequest,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CaptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionResponse {
    pub text: Option<String>,
    pub error: Option<String>,
}
