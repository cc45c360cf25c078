//! Dashboard Rendering
//!
//! Pure functions that turn the store snapshot into terminal frames: one
//! card per store, a status badge, an empty-state panel, and relative-age
//! labels. Rendering always runs under the fault barrier so a bad record
//! can never take the dashboard loop down.

use crate::domain::entities::Store;
use crate::domain::value_objects::StoreStatus;
use chrono::{DateTime, Utc};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Marker shown next to transitional statuses (the terminal stand-in for a
/// spinner).
const SPINNER: &str = "~";

/// Format the age of a store relative to `now`.
///
/// Policy: under a minute reads "Just now", then minutes, hours, days.
/// A `created_at` in the future (clock skew) also reads "Just now".
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created_at).num_seconds().max(0);

    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}

/// Status badge for one store.
pub fn status_badge(status: StoreStatus) -> String {
    if status.is_transitional() {
        format!("[{} {}]", status, SPINNER)
    } else {
        format!("[{}]", status)
    }
}

/// Render a single store card.
pub fn render_store_card(store: &Store, now: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    lines.push(format!("* {} {}", store.name, status_badge(store.status)));
    lines.push(format!(
        "    id: {}   engine: {}   created: {}",
        store.id,
        store.engine,
        relative_age(store.created_at, now)
    ));

    if let Some(namespace) = &store.namespace {
        lines.push(format!("    namespace: {}", namespace));
    }

    // Only Ready stores with a url get a visit line
    if let Some(url) = store.visit_url() {
        lines.push(format!("    visit: {}", url));
    }

    lines.join("\n")
}

/// Render the full dashboard frame.
pub fn render_dashboard(stores: &[Store], now: DateTime<Utc>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Your Stores ({})\n", stores.len()));
    out.push_str("----------------------------------------\n");

    if stores.is_empty() {
        out.push_str("No stores found. Create one to get started.\n");
        return out;
    }

    for store in stores {
        out.push_str(&render_store_card(store, now));
        out.push('\n');
    }

    out
}

/// Fault barrier around a rendering function.
///
/// Any panic below the barrier replaces the whole frame with a recovery
/// panel; nothing of the faulty frame leaks through. There is no partial
/// recovery and no state preservation, by analogy with a full page reload.
pub fn render_guarded<F>(render: F) -> String
where
    F: FnOnce() -> String,
{
    match catch_unwind(AssertUnwindSafe(render)) {
        Ok(frame) => frame,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| panic.downcast_ref::<&str>().copied())
                .unwrap_or("unknown panic");
            tracing::error!("rendering fault caught: {}", detail);
            recovery_panel()
        }
    }
}

/// The frame shown when rendering itself failed.
pub fn recovery_panel() -> String {
    concat!(
        "!! Something went wrong\n",
        "The dashboard encountered an unexpected rendering error.\n",
        "Enter any command to redraw, or restart the dashboard.\n"
    )
    .to_string()
}
