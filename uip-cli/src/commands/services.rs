//! Service catalog commands.

use console::style;

use uip_core::error::UipResult;
use uip_models::ServiceOffering;
use uip_pages::{services, ServicesView};

use crate::OutputFormat;

pub async fn run(slug: Option<&str>, format: OutputFormat) -> UipResult<()> {
    match services::resolve(slug) {
        ServicesView::Index(all) => render_index(all, format),
        ServicesView::Detail(offering) => render_detail(offering, format),
        ServicesView::NotFound(slug) => {
            match format {
                OutputFormat::Json => {
                    let json = serde_json::json!({ "error": "not_found", "service": slug });
                    println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
                }
                OutputFormat::Text => {
                    println!("{} Service not found: {slug}", style("ERROR").red().bold());
                    println!("The service you're looking for doesn't exist.");
                    println!();
                    println!("Available services:");
                    for offering in ServiceOffering::all() {
                        println!("  - {}", offering.kind.slug());
                    }
                }
            }
        }
    }
    Ok(())
}

fn render_index(all: &[ServiceOffering], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json: Vec<_> = all
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "slug": o.kind.slug(),
                        "name": o.name,
                        "summary": o.summary,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", style("Our Services").bold().underlined());
            println!("Comprehensive IP solutions tailored to your business needs.");
            println!();
            for offering in all {
                println!("{}", style(offering.name).bold());
                println!("  {}", offering.summary);
                println!(
                    "  {}",
                    style(format!("uniqueip services {}", offering.kind.slug())).dim()
                );
                println!();
            }
        }
    }
}

fn render_detail(offering: &ServiceOffering, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "slug": offering.kind.slug(),
                "title": offering.title,
                "summary": offering.summary,
                "benefits": offering.benefits,
                "process": offering.process.iter().map(|step| {
                    serde_json::json!({ "title": step.title, "description": step.description })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", style(offering.title).bold().underlined());
            println!("{}", offering.summary);

            println!();
            println!("{}", style("What You Get").bold());
            for benefit in offering.benefits {
                println!("  {} {benefit}", style("+").green());
            }

            println!();
            println!("{}", style("Our Process").bold());
            for (i, step) in offering.process.iter().enumerate() {
                println!("  {}. {} - {}", i + 1, style(step.title).bold(), step.description);
            }

            println!();
            println!(
                "{}",
                style("Get started with: uniqueip contact --valuation").dim()
            );
        }
    }
}
