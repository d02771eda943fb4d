//! Newsletter subscription command.

use console::style;

use uip_core::error::{UipError, UipResult};
use uip_pages::form::SUBSCRIBE_CONFIRMATION_MESSAGE;
use uip_pages::NewsletterSignup;

use crate::OutputFormat;

pub async fn run(email: String, format: OutputFormat) -> UipResult<()> {
    let signup = NewsletterSignup::new();
    signup.set_email(email).await;

    let result = signup.subscribe().await;

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "outcome": if result.is_ok() { "subscribed" } else { "invalid" },
                "error": result.as_ref().err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => match &result {
            Ok(()) => {
                println!("{} {SUBSCRIBE_CONFIRMATION_MESSAGE}", style("OK").green().bold());
                println!("Stay updated with the latest IP industry insights.");
            }
            Err(UipError::Validation(reason)) => {
                println!("{} {reason}", style("INVALID").yellow().bold());
            }
            Err(e) => {
                println!("{} {e}", style("ERROR").red().bold());
            }
        },
    }

    signup.teardown();
    Ok(())
}
