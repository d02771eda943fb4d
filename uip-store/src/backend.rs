//! The store surface consumed by the page machines.
//!
//! Pages depend on this trait rather than the concrete client so that the
//! view-state machines can be exercised against an in-memory fake in tests.

use async_trait::async_trait;

use uip_core::constants::{tables, FEATURED_PORTFOLIO_LIMIT};
use uip_core::error::UipResult;
use uip_models::{BlogPost, ContactSubmission, PortfolioItem, Testimonial};

use crate::client::StoreClient;
use crate::query::{OrderDirection, SelectQuery};

/// The five logical operations the site issues against the store.
#[async_trait]
pub trait SiteBackend: Send + Sync {
    /// Featured portfolio items for the home page highlight section,
    /// ordered by display_order, capped at six rows.
    async fn featured_portfolio(&self) -> UipResult<Vec<PortfolioItem>>;

    /// The full portfolio, ordered by display_order.
    async fn all_portfolio(&self) -> UipResult<Vec<PortfolioItem>>;

    /// Published blog posts, newest publish date first.
    async fn published_posts(&self) -> UipResult<Vec<BlogPost>>;

    /// Featured testimonials for the home page carousel, ordered by
    /// display_order.
    async fn featured_testimonials(&self) -> UipResult<Vec<Testimonial>>;

    /// Insert one contact/valuation submission. Write-only; nothing is
    /// read back.
    async fn submit_contact(&self, submission: &ContactSubmission) -> UipResult<()>;
}

#[async_trait]
impl SiteBackend for StoreClient {
    async fn featured_portfolio(&self) -> UipResult<Vec<PortfolioItem>> {
        let query = SelectQuery::from(tables::PORTFOLIO_ITEMS)
            .eq("featured", true)
            .order("display_order", OrderDirection::Asc)
            .limit(FEATURED_PORTFOLIO_LIMIT);
        self.fetch(&query).await
    }

    async fn all_portfolio(&self) -> UipResult<Vec<PortfolioItem>> {
        let query = SelectQuery::from(tables::PORTFOLIO_ITEMS)
            .order("display_order", OrderDirection::Asc);
        self.fetch(&query).await
    }

    async fn published_posts(&self) -> UipResult<Vec<BlogPost>> {
        let query = SelectQuery::from(tables::BLOG_POSTS)
            .eq("published", true)
            .order("published_at", OrderDirection::Desc);
        self.fetch(&query).await
    }

    async fn featured_testimonials(&self) -> UipResult<Vec<Testimonial>> {
        let query = SelectQuery::from(tables::TESTIMONIALS)
            .eq("featured", true)
            .order("display_order", OrderDirection::Asc);
        self.fetch(&query).await
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> UipResult<()> {
        self.insert(tables::CONTACT_SUBMISSIONS, submission).await
    }
}
