//! Blog page view model: the published article list.

use uip_models::BlogPost;
use uip_store::SiteBackend;

use crate::state::LoadState;

/// Copy shown when no articles have been published yet.
pub const NO_ARTICLES_MESSAGE: &str =
    "Check back soon for expert insights and analysis on IP industry trends.";

/// View state of the blog page.
///
/// The newest post is promoted to the featured slot; the remainder fill the
/// article grid.
pub struct BlogPage {
    posts: LoadState<BlogPost>,
}

impl Default for BlogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogPage {
    pub fn new() -> Self {
        Self {
            posts: LoadState::Loading,
        }
    }

    /// Issue the page's one read, on initial display.
    pub async fn load<B: SiteBackend>(&mut self, backend: &B) {
        self.posts = LoadState::from_result(backend.published_posts().await);
    }

    pub fn state(&self) -> &LoadState<BlogPost> {
        &self.posts
    }

    /// The featured article: the first (newest) row, when any exist.
    pub fn featured(&self) -> Option<&BlogPost> {
        self.posts.rows().first()
    }

    /// The article grid: everything after the featured slot.
    pub fn grid(&self) -> &[BlogPost] {
        let rows = self.posts.rows();
        if rows.is_empty() {
            rows
        } else {
            &rows[1..]
        }
    }
}
