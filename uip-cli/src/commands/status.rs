//! Status command - configuration summary and store connectivity.

use console::style;

use uip_core::config::ConfigHandle;
use uip_core::constants;
use uip_core::error::UipResult;

use crate::OutputFormat;

pub async fn run(config: ConfigHandle, format: OutputFormat) -> UipResult<()> {
    let (store_url, configured) = {
        let cfg = config.read().await;
        (cfg.store.url.clone(), cfg.is_store_configured())
    };

    if !configured {
        match format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "version": constants::APP_VERSION,
                    "configured": false,
                });
                println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
            }
            OutputFormat::Text => {
                println!("{}", style("Unique IP Solutions CLI").bold());
                println!("  Version: {}", constants::APP_VERSION);
                println!();
                println!(
                    "{} Store is not configured. Set {} and {} (or edit the config file).",
                    style("WARN").yellow().bold(),
                    constants::env::STORE_URL,
                    constants::env::STORE_KEY,
                );
            }
        }
        return Ok(());
    }

    let store = super::create_store_client(&config).await?;
    let health = store.health_check().await;

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "version": constants::APP_VERSION,
                "configured": true,
                "store_url": store_url,
                "reachable": health.is_ok(),
                "latency_ms": health.as_ref().ok().map(|d| d.as_millis() as u64),
                "error": health.as_ref().err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", style("Unique IP Solutions CLI").bold());
            println!("  Version: {}", constants::APP_VERSION);
            println!("  Store:   {store_url}");
            match health {
                Ok(latency) => {
                    println!(
                        "  {} Store reachable ({} ms)",
                        style("OK").green().bold(),
                        latency.as_millis()
                    );
                }
                Err(e) => {
                    println!("  {} Store unreachable: {e}", style("FAIL").red().bold());
                }
            }
        }
    }

    Ok(())
}
