pub use crate::config::ServiceConfig;
pub use crate::generator::CaptionGenerator;
pub use crate::result::{ErrorResponse, TextResponse};

pub mod handlers;
pub mod server;
