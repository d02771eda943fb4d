//! Home page view model: featured portfolio plus the testimonial carousel.

use std::time::Duration;

use uip_core::constants::TESTIMONIAL_ROTATION_MS;
use uip_models::{PortfolioItem, Testimonial};
use uip_store::SiteBackend;

use crate::rotator::RotatingSelector;
use crate::state::LoadState;

/// View state of the home page.
///
/// The two highlight sections load independently and degrade independently;
/// a section with no rows is hidden rather than rendered empty. The
/// testimonial rotator starts only once testimonials are loaded and
/// non-empty, and is cancelled on teardown.
pub struct HomePage {
    portfolio: LoadState<PortfolioItem>,
    testimonials: LoadState<Testimonial>,
    rotator: Option<RotatingSelector>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            portfolio: LoadState::Loading,
            testimonials: LoadState::Loading,
            rotator: None,
        }
    }

    /// Issue the page's reads, once, on initial display.
    pub async fn load<B: SiteBackend>(&mut self, backend: &B) {
        self.portfolio = LoadState::from_result(backend.featured_portfolio().await);
        self.testimonials = LoadState::from_result(backend.featured_testimonials().await);

        let count = self.testimonials.rows().len();
        if count > 0 {
            self.rotator = Some(RotatingSelector::start(
                count,
                Duration::from_millis(TESTIMONIAL_ROTATION_MS),
            ));
        }
    }

    pub fn portfolio(&self) -> &LoadState<PortfolioItem> {
        &self.portfolio
    }

    pub fn testimonials(&self) -> &LoadState<Testimonial> {
        &self.testimonials
    }

    /// Index of the testimonial currently shown by the carousel.
    pub fn current_index(&self) -> usize {
        self.rotator.as_ref().map(|r| r.current()).unwrap_or(0)
    }

    /// The testimonial currently shown, if any are loaded.
    pub fn current_testimonial(&self) -> Option<&Testimonial> {
        self.testimonials.rows().get(self.current_index())
    }

    /// Jump the carousel to an explicit indicator. Takes effect immediately
    /// without resetting the rotation interval.
    pub fn select_testimonial(&self, index: usize) -> bool {
        self.rotator.as_ref().map(|r| r.select(index)).unwrap_or(false)
    }

    /// Whether the rotation timer is attached and running.
    pub fn is_rotating(&self) -> bool {
        self.rotator.as_ref().map(|r| r.is_running()).unwrap_or(false)
    }

    /// Tear the view down, cancelling the rotation timer unconditionally.
    pub fn teardown(&mut self) {
        self.rotator = None;
    }
}
