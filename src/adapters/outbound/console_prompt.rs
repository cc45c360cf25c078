//! Console Operator Prompt
//!
//! Terminal implementation of the OperatorPrompt port: yes/no confirmation
//! on stdin, error notification on stderr. An auto-confirm mode exists for
//! non-interactive runs.

use crate::domain::ports::OperatorPrompt;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Prompt adapter for the terminal dashboard.
pub struct ConsolePrompt {
    /// Answer yes to every confirmation without asking (scripted runs)
    auto_confirm: bool,
}

impl ConsolePrompt {
    pub fn new(auto_confirm: bool) -> Self {
        Self { auto_confirm }
    }

    async fn read_answer(&self) -> Option<String> {
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        reader.read_line(&mut line).await.ok()?;
        Some(line.trim().to_lowercase())
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl OperatorPrompt for ConsolePrompt {
    async fn confirm(&self, message: &str) -> bool {
        if self.auto_confirm {
            tracing::debug!("auto-confirming: {}", message);
            return true;
        }

        println!("{} [y/N]", message);
        matches!(self.read_answer().await.as_deref(), Some("y") | Some("yes"))
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!("{}", message);
        eprintln!("error: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_confirm_skips_prompt() {
        let prompt = ConsolePrompt::new(true);
        assert!(prompt.confirm("Delete store s-1?").await);
    }

    #[test]
    fn test_default_is_interactive() {
        let prompt = ConsolePrompt::default();
        assert!(!prompt.auto_confirm);
    }

    #[test]
    fn test_notify_error_does_not_panic() {
        let prompt = ConsolePrompt::new(true);
        prompt.notify_error("Failed to create store: backend rejected request");
    }
}
