pub mod config;
pub mod error;
pub mod form;
pub mod generator;
pub mod prompt;
pub mod result;

#[path = "llm/lib.rs"]
pub mod llm;
#[path = "api/lib.rs"]
pub mod api;

pub use config::ServiceConfig;
pub use error::{GenerateError, ProviderError};
pub use form::CaptionForm;
pub use generator::CaptionGenerator;
