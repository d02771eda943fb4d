//! Blog page command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use uip_core::config::ConfigHandle;
use uip_core::error::UipResult;
use uip_pages::pages::blog::{BlogPage, NO_ARTICLES_MESSAGE};

use crate::OutputFormat;

pub async fn run(config: ConfigHandle, format: OutputFormat) -> UipResult<()> {
    let store = super::create_store_client(&config).await?;

    let mut page = BlogPage::new();
    let spinner = matches!(format, OutputFormat::Text)
        .then(|| super::loading_spinner("Loading articles..."));
    page.load(&store).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "state": super::state_tag(page.state()),
                "featured": page.featured(),
                "posts": page.grid(),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => render_text(&page),
    }

    Ok(())
}

fn render_text(page: &BlogPage) {
    println!("{}", style("IP Industry Insights").bold().underlined());
    println!("Expert analysis, trends, and strategies in the intellectual property landscape.");
    println!();

    if let Some(reason) = page.state().failure() {
        super::print_load_failure("articles", reason);
        return;
    }

    if page.state().is_empty_ready() {
        println!("{}", style("No articles yet").bold());
        println!("{NO_ARTICLES_MESSAGE}");
        return;
    }

    if let Some(featured) = page.featured() {
        println!("{}", style("Featured Article").green().bold());
        println!("{}", style(&featured.title).bold());
        println!("{}", featured.excerpt);
        println!(
            "{}",
            style(format!("by {} on {}", featured.author, featured.date_label())).dim()
        );
    }

    if !page.grid().is_empty() {
        println!();
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Title", "Excerpt", "Author", "Published"]);

        for post in page.grid() {
            table.add_row(vec![
                super::truncate(&post.title, 40),
                super::truncate(&post.excerpt, 60),
                post.author.clone(),
                post.date_label(),
            ]);
        }
        println!("{table}");
    }

    println!();
    println!(
        "{}",
        style("Stay informed: uniqueip subscribe <email>").dim()
    );
}
