//! Home page command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use uip_core::config::ConfigHandle;
use uip_core::error::UipResult;
use uip_models::{ServiceOffering, Testimonial};
use uip_pages::HomePage;

use crate::OutputFormat;

/// "Why Choose Us" copy.
const BENEFITS: &[(&str, &str)] = &[
    (
        "Global Network",
        "Access to international buyers, sellers, and partners across all industries.",
    ),
    (
        "Fast Valuation",
        "Receive comprehensive IP valuations within 48 hours from our expert team.",
    ),
    (
        "Secure Transactions",
        "End-to-end transaction security with complete confidentiality guaranteed.",
    ),
    (
        "Expert Guidance",
        "20+ years of combined experience in intellectual property transactions.",
    ),
];

pub async fn run(config: ConfigHandle, watch: bool, format: OutputFormat) -> UipResult<()> {
    let store = super::create_store_client(&config).await?;

    let mut page = HomePage::new();
    let spinner = matches!(format, OutputFormat::Text)
        .then(|| super::loading_spinner("Loading home page..."));
    page.load(&store).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "portfolio": {
                    "state": super::state_tag(page.portfolio()),
                    "items": page.portfolio().rows(),
                },
                "testimonials": {
                    "state": super::state_tag(page.testimonials()),
                    "items": page.testimonials().rows(),
                },
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            render_text(&page);

            if watch && page.is_rotating() {
                println!();
                println!("{}", style("Rotating testimonials (Ctrl-C to stop)...").dim());
                watch_carousel(&page).await;
            }
        }
    }

    page.teardown();
    Ok(())
}

fn render_text(page: &HomePage) {
    println!("{}", style("Global Leader in IP Solutions").bold().underlined());
    println!(
        "Buy, sell, or lease intellectual property with confidence. Trusted by \
         Fortune 500 companies worldwide."
    );

    println!();
    println!("{}", style("Our Services").bold().underlined());
    for offering in ServiceOffering::all() {
        println!("  {} - {}", style(offering.name).bold(), offering.blurb);
        println!("    {}", style(format!("uniqueip services {}", offering.kind.slug())).dim());
    }

    println!();
    println!("{}", style("Why Choose Us").bold().underlined());
    for (title, description) in BENEFITS {
        println!("  {} - {description}", style(*title).bold());
    }

    // Hidden (not an error) when the store has no featured rows, like the
    // page section.
    match page.portfolio() {
        state if state.is_failed() => {
            println!();
            super::print_load_failure("the featured portfolio", state.failure().unwrap_or(""));
        }
        state if !state.rows().is_empty() => {
            println!();
            println!("{}", style("Featured Portfolio").bold().underlined());

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Title", "Category", "Description"]);

            for item in state.rows() {
                table.add_row(vec![
                    item.title.clone(),
                    item.category.label().to_string(),
                    super::truncate(&item.description, 60),
                ]);
            }
            println!("{table}");
            println!("{}", style("See every case with: uniqueip portfolio").dim());
        }
        _ => {}
    }

    match page.testimonials() {
        state if state.is_failed() => {
            println!();
            super::print_load_failure("testimonials", state.failure().unwrap_or(""));
        }
        state if !state.rows().is_empty() => {
            println!();
            println!("{}", style("What Our Clients Say").bold().underlined());
            if let Some(testimonial) = page.current_testimonial() {
                print_testimonial(testimonial, page.current_index(), state.rows().len());
            }
        }
        _ => {}
    }

    println!();
    println!("{}", style("Ready to Get Started?").bold().underlined());
    println!("  Get a free IP valuation:  uniqueip contact --valuation");
    println!("  Contact our team:         uniqueip contact");
}

fn print_testimonial(testimonial: &Testimonial, index: usize, total: usize) {
    let stars = "*".repeat(testimonial.star_count() as usize);
    println!("  {}", style(stars).yellow());
    println!("  \"{}\"", style(&testimonial.testimonial_text).italic());
    println!(
        "  - {}, {}  {}",
        style(&testimonial.client_name).bold(),
        testimonial.attribution(),
        style(format!("[{}/{}]", index + 1, total)).dim()
    );
}

/// Re-render the carousel as the rotator advances, until Ctrl-C.
async fn watch_carousel(page: &HomePage) {
    let total = page.testimonials().rows().len();
    let mut shown = page.current_index();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = tokio::time::sleep(std::time::Duration::from_millis(250)) => {
                let current = page.current_index();
                if current != shown {
                    shown = current;
                    if let Some(testimonial) = page.current_testimonial() {
                        println!();
                        print_testimonial(testimonial, current, total);
                    }
                }
            }
        }
    }
}
