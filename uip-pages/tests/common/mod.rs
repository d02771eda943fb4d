//! Shared test utilities for the page integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Semaphore;

use uip_core::error::{UipError, UipResult};
use uip_models::{
    BlogPost, ContactSubmission, PortfolioCategory, PortfolioItem, Testimonial,
};
use uip_store::SiteBackend;

/// In-memory stand-in for the managed store.
///
/// Reads return configured rows (or fail wholesale); writes are recorded.
/// An optional gate lets a test hold a write in flight to observe the
/// `Submitting` phase.
#[derive(Default)]
pub struct FakeBackend {
    portfolio: Vec<PortfolioItem>,
    testimonials: Vec<Testimonial>,
    posts: Vec<BlogPost>,
    fail_reads: bool,
    fail_writes: bool,
    write_gate: Option<Arc<Semaphore>>,
    pub submissions: Mutex<Vec<ContactSubmission>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_portfolio(mut self, items: Vec<PortfolioItem>) -> Self {
        self.portfolio = items;
        self
    }

    pub fn with_testimonials(mut self, rows: Vec<Testimonial>) -> Self {
        self.testimonials = rows;
        self
    }

    pub fn with_posts(mut self, rows: Vec<BlogPost>) -> Self {
        self.posts = rows;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Writes block until a permit is added to the returned semaphore.
    pub fn gated_writes(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.write_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn recorded_submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn read_failure() -> UipError {
        UipError::Http("connection failed: store unreachable".into())
    }
}

#[async_trait]
impl SiteBackend for FakeBackend {
    async fn featured_portfolio(&self) -> UipResult<Vec<PortfolioItem>> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.portfolio.iter().filter(|i| i.featured).cloned().collect())
    }

    async fn all_portfolio(&self) -> UipResult<Vec<PortfolioItem>> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.portfolio.clone())
    }

    async fn published_posts(&self) -> UipResult<Vec<BlogPost>> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.posts.clone())
    }

    async fn featured_testimonials(&self) -> UipResult<Vec<Testimonial>> {
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(self.testimonials.clone())
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> UipResult<()> {
        if let Some(gate) = &self.write_gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        if self.fail_writes {
            return Err(UipError::Store {
                status: 500,
                message: "insert failed".into(),
            });
        }
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(submission.clone());
        Ok(())
    }
}

// ---- Row factories ----

pub fn portfolio_item(id: &str, category: PortfolioCategory, featured: bool) -> PortfolioItem {
    PortfolioItem {
        id: id.into(),
        title: format!("Case {id}"),
        description: format!("Description for case {id}"),
        category,
        image_url: None,
        deal_value: Some("$1.0M".into()),
        client_name: Some("Client".into()),
        completion_date: None,
        featured,
        display_order: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn testimonial(id: &str, rating: i32) -> Testimonial {
    Testimonial {
        id: id.into(),
        client_name: format!("Client {id}"),
        company: "Northgate Robotics".into(),
        position: Some("CTO".into()),
        testimonial_text: "Great outcome on our portfolio sale.".into(),
        rating,
        featured: true,
        display_order: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn blog_post(id: &str, title: &str) -> BlogPost {
    BlogPost {
        id: id.into(),
        title: title.into(),
        slug: title.to_lowercase().replace(' ', "-"),
        excerpt: format!("Excerpt of {title}"),
        content: "Full text.".into(),
        thumbnail_url: None,
        author: "M. Reyes".into(),
        published: true,
        published_at: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    }
}
