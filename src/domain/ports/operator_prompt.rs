//! Operator Prompt Port
//!
//! Capability interface for talking to the human operator. Destructive
//! actions must be confirmed through it before any request leaves the
//! client, and failures are surfaced through it instead of a blocking
//! native dialog.

use async_trait::async_trait;

/// Interaction capability handed to the lifecycle controller.
///
/// Implementations decide the medium (terminal prompt, test double, a
/// future GUI); the controller only depends on the two capabilities.
#[async_trait]
pub trait OperatorPrompt: Send + Sync {
    /// Ask the operator a yes/no question. `false` means the action is
    /// abandoned with no side effects.
    async fn confirm(&self, message: &str) -> bool;

    /// Surface a non-fatal failure to the operator without blocking.
    fn notify_error(&self, message: &str);
}
