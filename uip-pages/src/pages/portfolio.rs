//! Portfolio page view model: the full case list with category filtering.

use uip_models::PortfolioItem;
use uip_store::SiteBackend;

use crate::filter::{self, FilterTag};
use crate::state::LoadState;

/// View state of the portfolio page.
pub struct PortfolioPage {
    items: LoadState<PortfolioItem>,
    active: FilterTag,
}

impl Default for PortfolioPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioPage {
    pub fn new() -> Self {
        Self {
            items: LoadState::Loading,
            active: FilterTag::All,
        }
    }

    /// Issue the page's one read, on initial display.
    pub async fn load<B: SiteBackend>(&mut self, backend: &B) {
        self.items = LoadState::from_result(backend.all_portfolio().await);
    }

    pub fn state(&self) -> &LoadState<PortfolioItem> {
        &self.items
    }

    pub fn active_filter(&self) -> FilterTag {
        self.active
    }

    /// Select a filter tag. The visible view is recomputed from the source
    /// list; no re-fetch happens.
    pub fn set_filter(&mut self, tag: FilterTag) {
        self.active = tag;
    }

    /// The visible view: a pure function of the loaded list and the active
    /// tag.
    pub fn visible(&self) -> Vec<&PortfolioItem> {
        filter::apply(self.items.rows(), self.active)
    }

    /// The "no results" copy for the current filter selection.
    pub fn empty_message(&self) -> String {
        self.active.empty_message()
    }
}
