mod console_prompt;
mod http_store_api;

pub use console_prompt::ConsolePrompt;
pub use http_store_api::{HttpApiConfig, HttpStoreApi};
