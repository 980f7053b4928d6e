use serde::{Deserialize, Serialize};

/// 200 body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

/// Body of every non-200 response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
