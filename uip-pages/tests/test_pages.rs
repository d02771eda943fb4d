//! Integration tests for the list-rendering page view models.

mod common;

use std::time::Duration;

use common::{blog_post, portfolio_item, testimonial, FakeBackend};
use uip_models::PortfolioCategory;
use uip_pages::pages::blog::BlogPage;
use uip_pages::pages::home::HomePage;
use uip_pages::pages::portfolio::PortfolioPage;
use uip_pages::FilterTag;

// ---- Home page ----

#[tokio::test]
async fn home_loads_both_sections() {
    let backend = FakeBackend::new()
        .with_portfolio(vec![
            portfolio_item("1", PortfolioCategory::Sold, true),
            portfolio_item("2", PortfolioCategory::Licensed, false),
        ])
        .with_testimonials(vec![testimonial("t1", 5), testimonial("t2", 4)]);

    let mut page = HomePage::new();
    assert!(page.portfolio().is_loading());

    page.load(&backend).await;

    // Only featured rows appear in the highlight section.
    assert_eq!(page.portfolio().rows().len(), 1);
    assert_eq!(page.testimonials().rows().len(), 2);
    assert!(page.is_rotating());

    page.teardown();
    assert!(!page.is_rotating());
}

#[tokio::test]
async fn home_with_no_testimonials_starts_no_rotator() {
    let backend = FakeBackend::new();
    let mut page = HomePage::new();
    page.load(&backend).await;

    assert!(page.testimonials().is_empty_ready());
    assert!(!page.is_rotating());
    assert!(page.current_testimonial().is_none());
}

#[tokio::test]
async fn home_read_failure_is_explicit() {
    let backend = FakeBackend::new().failing_reads();
    let mut page = HomePage::new();
    page.load(&backend).await;

    assert!(page.portfolio().is_failed());
    assert!(page.testimonials().is_failed());
    assert!(!page.is_rotating());
}

#[tokio::test(start_paused = true)]
async fn home_testimonial_rotation_scenario() {
    // Loading testimonials [5-star, 4-star]: after 5000 ms the displayed
    // index moves from 0 to 1; clicking indicator 0 while at index 1
    // immediately sets it back without waiting for the next tick.
    let backend =
        FakeBackend::new().with_testimonials(vec![testimonial("t1", 5), testimonial("t2", 4)]);

    let mut page = HomePage::new();
    page.load(&backend).await;
    assert_eq!(page.current_index(), 0);
    assert_eq!(page.current_testimonial().unwrap().rating, 5);

    tokio::time::advance(Duration::from_millis(5_000)).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert_eq!(page.current_index(), 1);
    assert_eq!(page.current_testimonial().unwrap().rating, 4);

    assert!(page.select_testimonial(0));
    assert_eq!(page.current_index(), 0);

    page.teardown();
}

// ---- Portfolio page ----

#[tokio::test]
async fn portfolio_zero_rows_is_ready_empty() {
    let backend = FakeBackend::new();
    let mut page = PortfolioPage::new();
    assert!(page.state().is_loading());

    page.load(&backend).await;

    // Loaded-but-empty is distinct from still-loading.
    assert!(page.state().is_empty_ready());
    assert!(!page.state().is_loading());
    assert_eq!(
        page.empty_message(),
        "Portfolio items will appear here once they are added."
    );
}

#[tokio::test]
async fn portfolio_filter_recomputes_without_refetch() {
    let backend = FakeBackend::new().with_portfolio(vec![
        portfolio_item("1", PortfolioCategory::Sold, false),
        portfolio_item("2", PortfolioCategory::Licensed, false),
        portfolio_item("3", PortfolioCategory::Leased, false),
        portfolio_item("4", PortfolioCategory::Sold, false),
    ]);

    let mut page = PortfolioPage::new();
    page.load(&backend).await;
    assert_eq!(page.visible().len(), 4);

    page.set_filter(FilterTag::Category(PortfolioCategory::Sold));
    let ids: Vec<&str> = page.visible().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);

    // Back to the sentinel: the view is identical to the source again.
    page.set_filter(FilterTag::All);
    assert_eq!(page.visible().len(), 4);
}

#[tokio::test]
async fn portfolio_category_specific_empty_message() {
    let backend = FakeBackend::new()
        .with_portfolio(vec![portfolio_item("1", PortfolioCategory::Sold, false)]);

    let mut page = PortfolioPage::new();
    page.load(&backend).await;

    page.set_filter(FilterTag::Category(PortfolioCategory::Leased));
    assert!(page.visible().is_empty());
    assert_eq!(page.empty_message(), "No leased cases available at this time.");
}

#[tokio::test]
async fn portfolio_read_failure_state() {
    let backend = FakeBackend::new().failing_reads();
    let mut page = PortfolioPage::new();
    page.load(&backend).await;

    assert!(page.state().is_failed());
    assert!(page.visible().is_empty());
}

// ---- Blog page ----

#[tokio::test]
async fn blog_splits_featured_and_grid() {
    let backend = FakeBackend::new().with_posts(vec![
        blog_post("p1", "Newest Post"),
        blog_post("p2", "Older Post"),
        blog_post("p3", "Oldest Post"),
    ]);

    let mut page = BlogPage::new();
    page.load(&backend).await;

    assert_eq!(page.featured().unwrap().title, "Newest Post");
    let grid: Vec<&str> = page.grid().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(grid, vec!["Older Post", "Oldest Post"]);
}

#[tokio::test]
async fn blog_empty_has_no_featured_slot() {
    let backend = FakeBackend::new();
    let mut page = BlogPage::new();
    page.load(&backend).await;

    assert!(page.state().is_empty_ready());
    assert!(page.featured().is_none());
    assert!(page.grid().is_empty());
}

#[tokio::test]
async fn blog_single_post_fills_only_featured_slot() {
    let backend = FakeBackend::new().with_posts(vec![blog_post("p1", "Only Post")]);
    let mut page = BlogPage::new();
    page.load(&backend).await;

    assert!(page.featured().is_some());
    assert!(page.grid().is_empty());
}
