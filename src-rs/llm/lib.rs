pub mod openai_adapter;
pub mod types;

pub use openai_adapter::OpenAiAdapter;
pub use types::{
    completion_text, parse_json_lenient, upstream_error_message, CompletionProvider, CompletionRequest, Message,
    UpstreamReply,
};
