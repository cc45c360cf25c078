//! storedash - Terminal dashboard for managed store deployments
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;
mod infrastructure;

use crate::adapters::inbound::TerminalDashboard;
use crate::adapters::outbound::{ConsolePrompt, HttpApiConfig, HttpStoreApi};
use crate::application::StoreLifecycleService;
use crate::config::load_config;
use crate::infrastructure::{shutdown_signal, DirectoryPoller, ShutdownController};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting storedash backend={} poll_interval={}s",
        cfg.api_url,
        cfg.poll_interval_secs
    );

    // ===== COMPOSITION ROOT =====
    // Wire up all adapters and services

    // 1. Create outbound adapters

    // Backend API (reqwest)
    let api = Arc::new(HttpStoreApi::new(HttpApiConfig {
        base_url: cfg.api_url.clone(),
        request_timeout: Duration::from_secs(cfg.request_timeout_secs),
    })?);

    // Operator prompt (console)
    let prompt = Arc::new(ConsolePrompt::new(cfg.auto_confirm));

    // 2. Start the directory poller
    let poller = Arc::new(DirectoryPoller::new(api.clone()));
    let poller_handle = poller.start(Duration::from_secs(cfg.poll_interval_secs));

    // 3. Create application service
    let service = Arc::new(StoreLifecycleService::new(api, poller, prompt));

    // 4. Run the terminal dashboard until quit or signal
    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let dashboard = TerminalDashboard::new(service, shutdown);
    let result = dashboard.run().await;

    // Teardown: no in-flight poll response may touch the snapshot after this
    poller_handle.stop();

    result
}
