mod operator_prompt;
mod store_api;

pub use operator_prompt::OperatorPrompt;
pub use store_api::{ApiError, NewStore, StoreApi};
