//! CLI command implementations.

pub mod blog;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;
pub mod status;
pub mod subscribe;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use uip_core::config::ConfigHandle;
use uip_core::error::UipResult;
use uip_pages::LoadState;
use uip_store::StoreClient;

/// Helper to create a store client from config.
pub async fn create_store_client(config: &ConfigHandle) -> UipResult<StoreClient> {
    let store_config = config.read().await.store.clone();
    StoreClient::new(&store_config)
}

/// The loading indicator shown while a page read is outstanding.
pub fn loading_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Render the error affordance for a failed page read.
pub fn print_load_failure(section: &str, reason: &str) {
    println!(
        "{} Could not load {section}: {reason}",
        console::style("ERROR").red().bold()
    );
    println!("  Check your connection and try again.");
}

/// Truncate a string to a maximum length, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        format!("{}...", &s[..max_len - 3])
    } else {
        s[..max_len].to_string()
    }
}

/// JSON tag for a load state, used by `--format json` output.
pub fn state_tag<T>(state: &LoadState<T>) -> &'static str {
    match state {
        LoadState::Loading => "loading",
        LoadState::Ready(_) => "ready",
        LoadState::Failed(_) => "failed",
    }
}
