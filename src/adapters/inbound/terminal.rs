//! Terminal Dashboard
//!
//! Inbound adapter: a line-oriented command loop over the lifecycle service.
//! Every frame is drawn through the rendering fault barrier, and the loop
//! exits on `quit`, closed stdin, or a shutdown signal.

use crate::adapters::inbound::render::{render_dashboard, render_guarded};
use crate::application::StoreLifecycleService;
use crate::domain::value_objects::StoreEngine;
use crate::infrastructure::ShutdownController;
use chrono::Utc;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Empty line: redraw the current frame
    Redraw,
    List,
    New { engine: String, name: String },
    Remove { id: String },
    Health { id: String },
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line into a command.
///
/// `new` takes the engine first so the free-form name (which may contain
/// spaces) can run to the end of the line.
fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();

    match parts.next() {
        None => Command::Redraw,
        Some("list") | Some("ls") => Command::List,
        Some("new") => {
            let engine = match parts.next() {
                Some(e) => e.to_string(),
                None => return Command::Unknown("usage: new <engine> <name>".to_string()),
            };
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Command::Unknown("usage: new <engine> <name>".to_string());
            }
            Command::New { engine, name }
        }
        Some("rm") | Some("delete") => match parts.next() {
            Some(id) => Command::Remove { id: id.to_string() },
            None => Command::Unknown("usage: rm <id>".to_string()),
        },
        Some("health") => match parts.next() {
            Some(id) => Command::Health { id: id.to_string() },
            None => Command::Unknown("usage: health <id>".to_string()),
        },
        Some("help") => Command::Help,
        Some("quit") | Some("exit") | Some("q") => Command::Quit,
        Some(other) => Command::Unknown(format!("unknown command: {}", other)),
    }
}

fn help_text() -> String {
    let engines = StoreEngine::all()
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        concat!(
            "commands:\n",
            "  list                 show all stores\n",
            "  new <engine> <name>  provision a store (engine: {})\n",
            "  rm <id>              delete a store (asks for confirmation)\n",
            "  health <id>          probe a store deployment\n",
            "  help                 this text\n",
            "  quit                 leave the dashboard\n"
        ),
        engines
    )
}

/// Interactive terminal dashboard.
pub struct TerminalDashboard {
    service: Arc<StoreLifecycleService>,
    shutdown: ShutdownController,
}

impl TerminalDashboard {
    pub fn new(service: Arc<StoreLifecycleService>, shutdown: ShutdownController) -> Self {
        Self { service, shutdown }
    }

    /// Run the command loop until quit, closed stdin, or shutdown.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut shutdown_rx = self.shutdown.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.draw().await;
        println!("type 'help' for commands");

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("dashboard loop stopping on shutdown signal");
                    break;
                }
                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => {
                            if !self.handle(parse_command(line.trim())).await {
                                break;
                            }
                        }
                        Ok(None) => break, // stdin closed
                        Err(e) => {
                            tracing::error!("stdin read failed: {}", e);
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Execute one command. Returns `false` when the loop should exit.
    async fn handle(&self, command: Command) -> bool {
        match command {
            Command::Redraw | Command::List => self.draw().await,
            Command::New { engine, name } => {
                match self.service.create_store(&name, &engine).await {
                    Ok(store) => {
                        println!("store {} accepted, provisioning started", store.id);
                        self.draw().await;
                    }
                    Err(e) => println!("create failed: {}", e),
                }
            }
            Command::Remove { id } => match self.service.delete_store(&id).await {
                Ok(true) => {
                    println!("store {} deletion started", id);
                    self.draw().await;
                }
                Ok(false) => println!("deletion cancelled"),
                Err(e) => println!("delete failed: {}", e),
            },
            Command::Health { id } => match self.service.store_health(&id).await {
                Ok(health) => {
                    if health.healthy {
                        println!("store {} is healthy", id);
                    } else {
                        println!(
                            "store {} is unhealthy: {}",
                            id,
                            health.error.as_deref().unwrap_or("no detail")
                        );
                    }
                }
                Err(e) => println!("health probe failed: {}", e),
            },
            Command::Help => println!("{}", help_text()),
            Command::Quit => return false,
            Command::Unknown(message) => println!("{}", message),
        }
        true
    }

    /// Draw the current snapshot through the fault barrier.
    async fn draw(&self) {
        let stores = self.service.stores().await;
        let now = Utc::now();
        let frame = render_guarded(move || render_dashboard(&stores, now));
        println!("{}", frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_line_redraws() {
        assert_eq!(parse_command(""), Command::Redraw);
        assert_eq!(parse_command("   "), Command::Redraw);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("ls"), Command::List);
    }

    #[test]
    fn test_parse_new_with_spaced_name() {
        assert_eq!(
            parse_command("new woocommerce My Awesome Shop"),
            Command::New {
                engine: "woocommerce".to_string(),
                name: "My Awesome Shop".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_new_missing_args() {
        assert!(matches!(parse_command("new"), Command::Unknown(_)));
        assert!(matches!(parse_command("new medusa"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse_command("rm s-1"),
            Command::Remove { id: "s-1".to_string() }
        );
        assert_eq!(
            parse_command("delete s-1"),
            Command::Remove { id: "s-1".to_string() }
        );
        assert!(matches!(parse_command("rm"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_health() {
        assert_eq!(
            parse_command("health s-1"),
            Command::Health { id: "s-1".to_string() }
        );
        assert!(matches!(parse_command("health"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(parse_command("frobnicate"), Command::Unknown(_)));
    }

    #[test]
    fn test_help_text_lists_engines() {
        let help = help_text();
        assert!(help.contains("woocommerce | medusa"));
        assert!(help.contains("rm <id>"));
    }
}
