use axum::http::StatusCode;
use thiserror::Error;

pub const MSG_METHOD_NOT_ALLOWED: &str = "Método não permitido.";
pub const MSG_MISSING_FIELDS: &str = "Campos obrigatórios ausentes.";
pub const MSG_INPUT_TOO_LONG: &str = "Entrada muito longa. Resuma as observações.";
pub const MSG_MISSING_API_KEY: &str = "OPENAI_API_KEY ausente no servidor.";
pub const MSG_UPSTREAM_FALLBACK: &str = "Falha ao consultar a OpenAI.";
pub const MSG_EMPTY_COMPLETION: &str = "Resposta vazia da OpenAI.";
pub const MSG_INTERNAL: &str = "Erro interno. Verifique os logs.";

/// Terminal failures of a generation request. Each maps to exactly one response.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("required fields missing")]
    MissingFields,
    #[error("input too long ({0} chars)")]
    InputTooLong(usize),
    #[error("request body exceeds the buffering limit")]
    BodyTooLarge,
    #[error("API key missing on server")]
    MissingApiKey,
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("empty response from upstream")]
    EmptyCompletion,
    #[error("internal error: {0}")]
    Internal(String),
}

impl GenerateError {
    pub fn status(&self) -> StatusCode {
        match self {
            GenerateError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GenerateError::MissingFields => StatusCode::BAD_REQUEST,
            GenerateError::InputTooLong(_) | GenerateError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            GenerateError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            GenerateError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GenerateError::EmptyCompletion => StatusCode::BAD_GATEWAY,
            GenerateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller. Internal details never leave the process.
    pub fn public_message(&self) -> String {
        match self {
            GenerateError::MethodNotAllowed => MSG_METHOD_NOT_ALLOWED.to_string(),
            GenerateError::MissingFields => MSG_MISSING_FIELDS.to_string(),
            GenerateError::InputTooLong(_) | GenerateError::BodyTooLarge => MSG_INPUT_TOO_LONG.to_string(),
            GenerateError::MissingApiKey => MSG_MISSING_API_KEY.to_string(),
            GenerateError::Upstream(msg) => msg.clone(),
            GenerateError::EmptyCompletion => MSG_EMPTY_COMPLETION.to_string(),
            GenerateError::Internal(_) => MSG_INTERNAL.to_string(),
        }
    }
}

/// Transport-level failure of the outbound call (no HTTP response was received).
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::new("timeout", &err.to_string())
        } else if err.is_connect() {
            ProviderError::new("connection_error", &err.to_string())
        } else {
            ProviderError::new("network_error", &err.to_string())
        }
    }
}

impl From<ProviderError> for GenerateError {
    fn from(err: ProviderError) -> Self {
        GenerateError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Internal(format!("invalid upstream json: {}", err))
    }
}
