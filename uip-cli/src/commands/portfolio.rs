//! Portfolio page command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use uip_core::config::ConfigHandle;
use uip_core::error::UipResult;
use uip_models::PortfolioCategory;
use uip_pages::{FilterTag, PortfolioPage};

use crate::OutputFormat;

/// Category filter argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    Sold,
    Licensed,
    Leased,
}

impl From<CategoryArg> for FilterTag {
    fn from(arg: CategoryArg) -> Self {
        FilterTag::Category(match arg {
            CategoryArg::Sold => PortfolioCategory::Sold,
            CategoryArg::Licensed => PortfolioCategory::Licensed,
            CategoryArg::Leased => PortfolioCategory::Leased,
        })
    }
}

pub async fn run(
    config: ConfigHandle,
    category: Option<CategoryArg>,
    format: OutputFormat,
) -> UipResult<()> {
    let store = super::create_store_client(&config).await?;

    let mut page = PortfolioPage::new();
    let spinner = matches!(format, OutputFormat::Text)
        .then(|| super::loading_spinner("Loading portfolio..."));
    page.load(&store).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if let Some(category) = category {
        page.set_filter(category.into());
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "state": super::state_tag(page.state()),
                "filter": page.active_filter().label(),
                "items": page.visible(),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => render_text(&page),
    }

    Ok(())
}

fn render_text(page: &PortfolioPage) {
    println!("{}", style("Our Portfolio").bold().underlined());
    println!("Showcasing successful IP transactions across diverse industries worldwide.");
    println!();

    if let Some(reason) = page.state().failure() {
        super::print_load_failure("the portfolio", reason);
        return;
    }

    println!("Filter: {}", style(page.active_filter().label()).bold());
    println!();

    let visible = page.visible();
    if visible.is_empty() {
        println!("{}", style("No cases found").bold());
        println!("{}", page.empty_message());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Category", "Client", "Value", "Completed"]);

    for item in &visible {
        table.add_row(vec![
            item.title.clone(),
            item.category.label().to_string(),
            item.client_name.clone().unwrap_or_else(|| "-".into()),
            item.deal_value.clone().unwrap_or_else(|| "-".into()),
            item.completion_label().unwrap_or_else(|| "-".into()),
        ]);
    }
    println!("{table}");
    println!("{} case(s)", visible.len());
}
