//! Contact / valuation form command.

use console::style;
use dialoguer::Input;

use uip_core::config::ConfigHandle;
use uip_core::constants::contact as contact_info;
use uip_core::error::{UipError, UipResult};
use uip_pages::form::SUBMIT_CONFIRMATION_MESSAGE;
use uip_pages::{ContactPage, Field, FormPhase};

use crate::OutputFormat;

/// Form input gathered from flags; missing required fields are prompted for.
pub struct ContactInput {
    pub valuation: bool,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

pub async fn run(config: ConfigHandle, input: ContactInput, format: OutputFormat) -> UipResult<()> {
    let store = super::create_store_client(&config).await?;

    let page = ContactPage::from_query(input.valuation.then_some("valuation"));

    if matches!(format, OutputFormat::Text) {
        println!("{}", style(page.headline()).bold().underlined());
        println!("{}", page.intro());
        println!();
    }

    // Fill the form: flag values first, interactive prompts for the rest.
    let name = resolve_field(input.name, "Full Name", false)?;
    let email = resolve_field(input.email, "Email Address", false)?;
    let company = resolve_field(input.company, "Company Name (optional)", true)?;
    if matches!(format, OutputFormat::Text) && input.message.is_none() {
        println!("{}", style(page.message_placeholder()).dim());
    }
    let message = resolve_field(input.message, "Message", false)?;

    page.set_field(Field::Name, name).await;
    page.set_field(Field::Email, email).await;
    page.set_field(Field::Company, company).await;
    page.set_field(Field::Message, message).await;

    let spinner =
        matches!(format, OutputFormat::Text).then(|| super::loading_spinner("Sending..."));
    let result = page.submit(&store).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let phase = page.phase().await;
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "submission_type": page.submission_type().as_str(),
                "outcome": match &phase {
                    FormPhase::Submitted => "submitted",
                    FormPhase::Error(_) => "error",
                    _ => "not_submitted",
                },
                "error": match &result {
                    Err(e) => Some(e.to_string()),
                    Ok(()) => None,
                },
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => match (&result, &phase) {
            (Ok(()), _) => {
                println!("{} {SUBMIT_CONFIRMATION_MESSAGE}", style("OK").green().bold());
            }
            (Err(UipError::Validation(reason)), _) => {
                println!("{} {reason}", style("INVALID").yellow().bold());
            }
            (Err(_), FormPhase::Error(banner)) => {
                println!("{} {banner}", style("ERROR").red().bold());
                print_contact_info();
            }
            (Err(e), _) => {
                println!("{} {e}", style("ERROR").red().bold());
            }
        },
    }

    // The failure was already rendered as a banner; a failed submit never
    // crashes the page.
    page.teardown();
    Ok(())
}

/// Use the flag value when present, otherwise prompt on the terminal.
fn resolve_field(flag: Option<String>, prompt: &str, optional: bool) -> UipResult<String> {
    match flag {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(prompt)
            .allow_empty(optional)
            .interact_text()
            .map_err(|e| UipError::Internal(e.to_string())),
    }
}

fn print_contact_info() {
    println!();
    println!("{}", style("Contact Information").bold());
    println!("  Email:    {}", contact_info::EMAIL);
    println!("  Phone:    {}", contact_info::PHONE);
    println!("  Location: {}", contact_info::LOCATION);
}
